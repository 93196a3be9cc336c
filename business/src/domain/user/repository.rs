use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get(&self, user_id: &UserId) -> Result<User, RepositoryError>;
    /// Inserts a new user. Fails with `Duplicated` when the UID or email is taken.
    async fn create(&self, user: &User) -> Result<(), RepositoryError>;
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;
    async fn delete(&self, user_id: &UserId) -> Result<(), RepositoryError>;
}
