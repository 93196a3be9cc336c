use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::skin_analysis::model::{AnalysisStatus, SkinAnalysis};
use business::domain::skin_analysis::repository::SkinAnalysisRepository;

use super::entity::SkinAnalysisEntity;

const ANALYSIS_COLUMNS: &str = "id, user_id, subject_id, batch_id, image_id, side_id, light_id, status, raw_results, created_at, updated_at";

pub struct SkinAnalysisRepositoryPostgres {
    pool: PgPool,
}

impl SkinAnalysisRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkinAnalysisRepository for SkinAnalysisRepositoryPostgres {
    async fn save(&self, analysis: &SkinAnalysis) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO skin_analyses (id, user_id, subject_id, batch_id, image_id, side_id, light_id, status, raw_results, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status,
                raw_results = EXCLUDED.raw_results,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(analysis.id)
        .bind(analysis.user_id.as_str())
        .bind(&analysis.subject_id)
        .bind(&analysis.batch_id)
        .bind(&analysis.image_id)
        .bind(i32::try_from(analysis.side_id).unwrap_or(1))
        .bind(i32::try_from(analysis.light_id).unwrap_or(1))
        .bind(analysis.status.to_string())
        .bind(&analysis.raw_results)
        .bind(analysis.created_at)
        .bind(analysis.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
            other => {
                tracing::error!(error = %other, "skin_analyses write failed");
                RepositoryError::DatabaseError
            }
        })?;

        Ok(())
    }

    async fn get_by_image_id(
        &self,
        image_id: &str,
    ) -> Result<Option<SkinAnalysis>, RepositoryError> {
        let entity = sqlx::query_as::<_, SkinAnalysisEntity>(&format!(
            "SELECT {} FROM skin_analyses WHERE image_id = $1",
            ANALYSIS_COLUMNS
        ))
        .bind(image_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entity.map(|e| e.into_domain()).transpose()
    }

    async fn get_by_user(
        &self,
        user_id: &UserId,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<SkinAnalysis>, RepositoryError> {
        let entities = sqlx::query_as::<_, SkinAnalysisEntity>(&format!(
            "SELECT {} FROM skin_analyses WHERE user_id = $1 ORDER BY created_at DESC OFFSET $2 LIMIT $3",
            ANALYSIS_COLUMNS
        ))
        .bind(user_id.as_str())
        .bind(i64::from(skip))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_latest_completed(
        &self,
        user_id: &UserId,
    ) -> Result<SkinAnalysis, RepositoryError> {
        let entity = sqlx::query_as::<_, SkinAnalysisEntity>(&format!(
            "SELECT {} FROM skin_analyses WHERE user_id = $1 AND status = $2 ORDER BY created_at DESC LIMIT 1",
            ANALYSIS_COLUMNS
        ))
        .bind(user_id.as_str())
        .bind(AnalysisStatus::Analyzed.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn find_subject_id(&self, user_id: &UserId) -> Result<Option<String>, RepositoryError> {
        sqlx::query_scalar::<_, String>(
            "SELECT subject_id FROM skin_analyses WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)
    }

    async fn delete_by_user(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM skin_analyses WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }
}
