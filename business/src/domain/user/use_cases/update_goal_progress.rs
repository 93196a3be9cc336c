use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct UpdateGoalProgressParams {
    pub user_id: UserId,
    pub goal_id: Uuid,
    pub progress: f64,
}

#[async_trait]
pub trait UpdateGoalProgressUseCase: Send + Sync {
    async fn execute(&self, params: UpdateGoalProgressParams) -> Result<User, UserError>;
}
