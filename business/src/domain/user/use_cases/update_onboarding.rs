use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct UpdateOnboardingParams {
    pub user_id: UserId,
    pub onboarding_step: u32,
    pub face_image_captured: Option<bool>,
    pub face_analysis_completed: Option<bool>,
}

#[async_trait]
pub trait UpdateOnboardingUseCase: Send + Sync {
    async fn execute(&self, params: UpdateOnboardingParams) -> Result<User, UserError>;
}
