use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::skin_analysis::errors::SkinAnalysisError;

pub struct GetAnalysisResultsParams {
    pub user_id: UserId,
    pub image_id: String,
    pub subject_id: String,
    pub batch_id: String,
}

#[derive(Debug, Clone)]
pub struct AnalysisResults {
    pub subject_id: String,
    pub batch_id: String,
    pub image_id: String,
    pub results: serde_json::Value,
}

#[async_trait]
pub trait GetAnalysisResultsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAnalysisResultsParams,
    ) -> Result<AnalysisResults, SkinAnalysisError>;
}
