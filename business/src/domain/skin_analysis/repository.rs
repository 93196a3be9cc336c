use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::SkinAnalysis;

#[async_trait]
pub trait SkinAnalysisRepository: Send + Sync {
    /// Inserts or updates the analysis keyed by its id.
    async fn save(&self, analysis: &SkinAnalysis) -> Result<(), RepositoryError>;
    /// Looks up an analysis by provider image id, regardless of owner.
    async fn get_by_image_id(&self, image_id: &str) -> Result<Option<SkinAnalysis>, RepositoryError>;
    /// Newest first.
    async fn get_by_user(
        &self,
        user_id: &UserId,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<SkinAnalysis>, RepositoryError>;
    async fn get_latest_completed(&self, user_id: &UserId) -> Result<SkinAnalysis, RepositoryError>;
    /// Provider subject already registered for this user, if any.
    async fn find_subject_id(&self, user_id: &UserId) -> Result<Option<String>, RepositoryError>;
    async fn delete_by_user(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
}
