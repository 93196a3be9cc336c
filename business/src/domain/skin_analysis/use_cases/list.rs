use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::skin_analysis::errors::SkinAnalysisError;
use crate::domain::skin_analysis::model::SkinAnalysis;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

pub struct ListAnalysesParams {
    pub user_id: UserId,
    pub skip: u32,
    pub limit: u32,
}

#[async_trait]
pub trait ListAnalysesUseCase: Send + Sync {
    async fn execute(&self, params: ListAnalysesParams)
    -> Result<Vec<SkinAnalysis>, SkinAnalysisError>;
}
