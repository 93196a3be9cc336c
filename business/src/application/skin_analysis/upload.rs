use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::skin_analysis::errors::SkinAnalysisError;
use crate::domain::skin_analysis::image::AnalysisImage;
use crate::domain::skin_analysis::model::{NewSkinAnalysisProps, SkinAnalysis};
use crate::domain::skin_analysis::repository::SkinAnalysisRepository;
use crate::domain::skin_analysis::services::SkinAnalyzerService;
use crate::domain::skin_analysis::use_cases::upload::{
    AnalysisUpload, UploadAnalysisImageParams, UploadAnalysisImageUseCase,
};

pub const UPLOAD_ACCEPTED_MESSAGE: &str =
    "Image uploaded successfully. Analysis is being processed.";

pub struct UploadAnalysisImageUseCaseImpl {
    pub repository: Arc<dyn SkinAnalysisRepository>,
    pub analyzer: Arc<dyn SkinAnalyzerService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UploadAnalysisImageUseCase for UploadAnalysisImageUseCaseImpl {
    async fn execute(
        &self,
        params: UploadAnalysisImageParams,
    ) -> Result<AnalysisUpload, SkinAnalysisError> {
        let image =
            AnalysisImage::from_base64(&params.image_base64, params.side_id, params.light_id)?;

        let subject_id = match self.repository.find_subject_id(&params.user_id).await? {
            Some(existing) => existing,
            None => {
                let created = self.analyzer.create_subject(params.user_id.as_str()).await?;
                self.logger.info(&format!(
                    "Registered analysis subject {} for user: {}",
                    created, params.user_id
                ));
                created
            }
        };

        let batch_id = self.analyzer.create_batch(&subject_id).await?;
        let image_id = self
            .analyzer
            .send_image(&subject_id, &batch_id, &image)
            .await?;

        let analysis = SkinAnalysis::new(NewSkinAnalysisProps {
            user_id: params.user_id,
            subject_id,
            batch_id,
            image_id,
            side_id: image.side_id,
            light_id: image.light_id,
        })?;
        self.repository.save(&analysis).await?;

        self.logger.info(&format!(
            "Image {} submitted for user: {}",
            analysis.image_id, analysis.user_id
        ));

        Ok(AnalysisUpload {
            analysis_id: analysis.id,
            subject_id: analysis.subject_id,
            batch_id: analysis.batch_id,
            image_id: analysis.image_id,
            message: UPLOAD_ACCEPTED_MESSAGE.to_string(),
        })
    }
}
