use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{SkinProfileUpdate, User};

pub struct UpdateSkinProfileParams {
    pub user_id: UserId,
    pub profile: SkinProfileUpdate,
}

#[async_trait]
pub trait UpdateSkinProfileUseCase: Send + Sync {
    async fn execute(&self, params: UpdateSkinProfileParams) -> Result<User, UserError>;
}
