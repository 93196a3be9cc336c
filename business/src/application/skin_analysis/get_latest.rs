use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::skin_analysis::errors::SkinAnalysisError;
use crate::domain::skin_analysis::model::SkinAnalysis;
use crate::domain::skin_analysis::repository::SkinAnalysisRepository;
use crate::domain::skin_analysis::use_cases::get_latest::{
    GetLatestAnalysisParams, GetLatestAnalysisUseCase,
};

pub struct GetLatestAnalysisUseCaseImpl {
    pub repository: Arc<dyn SkinAnalysisRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetLatestAnalysisUseCase for GetLatestAnalysisUseCaseImpl {
    async fn execute(
        &self,
        params: GetLatestAnalysisParams,
    ) -> Result<SkinAnalysis, SkinAnalysisError> {
        self.repository
            .get_latest_completed(&params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    self.logger.debug(&format!(
                        "No completed analysis yet for user: {}",
                        params.user_id
                    ));
                    SkinAnalysisError::NotFound
                }
                other => SkinAnalysisError::Repository(other),
            })
    }
}
