use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::skin_analysis::errors::SkinAnalysisError;
use crate::domain::skin_analysis::model::SkinAnalysis;

pub struct GetLatestAnalysisParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetLatestAnalysisUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetLatestAnalysisParams,
    ) -> Result<SkinAnalysis, SkinAnalysisError>;
}
