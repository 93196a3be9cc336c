use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::skin_analysis::errors::SkinAnalysisError;

pub struct UploadAnalysisImageParams {
    pub user_id: UserId,
    pub image_base64: String,
    pub side_id: u32,
    pub light_id: u32,
}

/// Provider references for a submitted image.
#[derive(Debug, Clone)]
pub struct AnalysisUpload {
    pub analysis_id: Uuid,
    pub subject_id: String,
    pub batch_id: String,
    pub image_id: String,
    pub message: String,
}

#[async_trait]
pub trait UploadAnalysisImageUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UploadAnalysisImageParams,
    ) -> Result<AnalysisUpload, SkinAnalysisError>;
}
