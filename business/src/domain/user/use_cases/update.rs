use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{SkinProfileUpdate, User};
use crate::domain::user::value_objects::Gender;

/// Partial profile update; every `None` keeps the stored value.
pub struct UpdateUserParams {
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub profile_photo_url: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: Option<Gender>,
    pub skin_profile: SkinProfileUpdate,
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, params: UpdateUserParams) -> Result<User, UserError>;
}
