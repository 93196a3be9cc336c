use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::skin_analysis::errors::SkinAnalysisError;
use crate::domain::skin_analysis::repository::SkinAnalysisRepository;
use crate::domain::skin_analysis::services::SkinAnalyzerService;
use crate::domain::skin_analysis::use_cases::get_results::{
    AnalysisResults, GetAnalysisResultsParams, GetAnalysisResultsUseCase,
};

/// Haut.ai ids are UUIDs or integers.
fn is_provider_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub struct GetAnalysisResultsUseCaseImpl {
    pub repository: Arc<dyn SkinAnalysisRepository>,
    pub analyzer: Arc<dyn SkinAnalyzerService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAnalysisResultsUseCase for GetAnalysisResultsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAnalysisResultsParams,
    ) -> Result<AnalysisResults, SkinAnalysisError> {
        let ids = [&params.subject_id, &params.batch_id, &params.image_id];
        if !ids.iter().all(|id| is_provider_id(id)) {
            self.logger.warn(&format!(
                "User {} sent malformed analysis ids",
                params.user_id
            ));
            return Err(SkinAnalysisError::NotFound);
        }

        let record = self.repository.get_by_image_id(&params.image_id).await?;

        if let Some(existing) = &record {
            if !existing.matches(&params.user_id, &params.subject_id, &params.batch_id) {
                self.logger.warn(&format!(
                    "User {} requested results for image {} they do not own",
                    params.user_id, params.image_id
                ));
                return Err(SkinAnalysisError::NotFound);
            }
        }

        let fetched = self
            .analyzer
            .get_results(&params.subject_id, &params.batch_id, &params.image_id)
            .await;

        let results = match fetched {
            Ok(results) => results,
            Err(SkinAnalysisError::InvalidProviderResponse) => {
                if let Some(mut failed) = record {
                    failed.mark_failed();
                    self.repository.save(&failed).await?;
                }
                return Err(SkinAnalysisError::InvalidProviderResponse);
            }
            Err(other) => return Err(other),
        };

        if let Some(mut analysis) = record {
            analysis.mark_completed(results.clone());
            self.repository.save(&analysis).await?;
            self.logger
                .info(&format!("Stored results for image: {}", analysis.image_id));
        }

        Ok(AnalysisResults {
            subject_id: params.subject_id,
            batch_id: params.batch_id,
            image_id: params.image_id,
            results,
        })
    }
}
