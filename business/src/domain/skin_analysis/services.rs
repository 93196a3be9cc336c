use async_trait::async_trait;

use super::errors::SkinAnalysisError;
use super::image::AnalysisImage;

/// Port to the external skin-analysis provider.
///
/// The provider organises captures as subject (one person) > batch (one
/// session) > image. Results are returned as the provider's raw JSON, which
/// may be either an array of algorithm outputs or a single object.
#[async_trait]
pub trait SkinAnalyzerService: Send + Sync {
    async fn create_subject(&self, name: &str) -> Result<String, SkinAnalysisError>;

    async fn create_batch(&self, subject_id: &str) -> Result<String, SkinAnalysisError>;

    async fn send_image(
        &self,
        subject_id: &str,
        batch_id: &str,
        image: &AnalysisImage,
    ) -> Result<String, SkinAnalysisError>;

    async fn get_results(
        &self,
        subject_id: &str,
        batch_id: &str,
        image_id: &str,
    ) -> Result<serde_json::Value, SkinAnalysisError>;
}
