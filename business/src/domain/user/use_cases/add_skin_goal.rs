use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct AddSkinGoalParams {
    pub user_id: UserId,
    pub title: String,
    pub color: String,
}

#[async_trait]
pub trait AddSkinGoalUseCase: Send + Sync {
    async fn execute(&self, params: AddSkinGoalParams) -> Result<User, UserError>;
}
