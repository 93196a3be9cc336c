use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::skin_analysis::model::{AnalysisStatus, SkinAnalysis};

#[derive(Debug, FromRow)]
pub struct SkinAnalysisEntity {
    pub id: Uuid,
    pub user_id: String,
    pub subject_id: String,
    pub batch_id: String,
    pub image_id: String,
    pub side_id: i32,
    pub light_id: i32,
    pub status: String,
    pub raw_results: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SkinAnalysisEntity {
    pub fn into_domain(self) -> Result<SkinAnalysis, RepositoryError> {
        let status = self
            .status
            .parse::<AnalysisStatus>()
            .map_err(|_| RepositoryError::CorruptedRecord)?;

        Ok(SkinAnalysis {
            id: self.id,
            user_id: UserId::new(self.user_id),
            subject_id: self.subject_id,
            batch_id: self.batch_id,
            image_id: self.image_id,
            side_id: u32::try_from(self.side_id).unwrap_or(1),
            light_id: u32::try_from(self.light_id).unwrap_or(1),
            status,
            raw_results: self.raw_results,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
