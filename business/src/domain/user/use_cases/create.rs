use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::value_objects::Gender;

pub struct CreateUserParams {
    /// UID proven by the bearer token.
    pub auth_user_id: UserId,
    /// UID claimed in the request body; must match `auth_user_id`.
    pub firebase_uid: String,
    pub email: String,
    pub display_name: String,
    pub name: String,
    pub bio: Option<String>,
    pub profile_photo_url: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: Option<Gender>,
}

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, params: CreateUserParams) -> Result<User, UserError>;
}
