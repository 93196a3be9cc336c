use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::skin_analysis::image::{DEFAULT_LIGHT_ID, DEFAULT_SIDE_ID};
use business::domain::skin_analysis::model::{AnalysisStatus, SkinAnalysis};
use business::domain::skin_analysis::use_cases::get_results::AnalysisResults;
use business::domain::skin_analysis::use_cases::upload::AnalysisUpload;

fn default_side_id() -> u32 {
    DEFAULT_SIDE_ID
}

fn default_light_id() -> u32 {
    DEFAULT_LIGHT_ID
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AnalysisUploadRequest {
    /// Base64 image, bare or as a `data:image/...;base64,` URL. At most 10 MiB decoded.
    pub image_base64: String,
    /// Face side (1 = front)
    #[oai(default = "default_side_id")]
    pub side_id: u32,
    /// Lighting (1 = standard)
    #[oai(default = "default_light_id")]
    pub light_id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AnalysisUploadResponse {
    pub analysis_id: Uuid,
    pub subject_id: String,
    pub batch_id: String,
    pub image_id: String,
    pub message: String,
}

impl From<AnalysisUpload> for AnalysisUploadResponse {
    fn from(upload: AnalysisUpload) -> Self {
        Self {
            analysis_id: upload.analysis_id,
            subject_id: upload.subject_id,
            batch_id: upload.batch_id,
            image_id: upload.image_id,
            message: upload.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AnalysisResultsResponse {
    pub subject_id: String,
    pub batch_id: String,
    pub image_id: String,
    /// Raw Haut.ai results, either an array of algorithm outputs or an object
    pub results: serde_json::Value,
}

impl From<AnalysisResults> for AnalysisResultsResponse {
    fn from(results: AnalysisResults) -> Self {
        Self {
            subject_id: results.subject_id,
            batch_id: results.batch_id,
            image_id: results.image_id,
            results: results.results,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum AnalysisStatusDto {
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "processing")]
    Processing,
    #[oai(rename = "analyzed")]
    Analyzed,
    #[oai(rename = "failed")]
    Failed,
}

impl From<AnalysisStatus> for AnalysisStatusDto {
    fn from(status: AnalysisStatus) -> Self {
        match status {
            AnalysisStatus::Pending => AnalysisStatusDto::Pending,
            AnalysisStatus::Processing => AnalysisStatusDto::Processing,
            AnalysisStatus::Analyzed => AnalysisStatusDto::Analyzed,
            AnalysisStatus::Failed => AnalysisStatusDto::Failed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AnalysisRecordResponse {
    pub id: Uuid,
    pub subject_id: String,
    pub batch_id: String,
    pub image_id: String,
    pub side_id: u32,
    pub light_id: u32,
    pub status: AnalysisStatusDto,
    pub results: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SkinAnalysis> for AnalysisRecordResponse {
    fn from(analysis: SkinAnalysis) -> Self {
        Self {
            id: analysis.id,
            subject_id: analysis.subject_id,
            batch_id: analysis.batch_id,
            image_id: analysis.image_id,
            side_id: analysis.side_id,
            light_id: analysis.light_id,
            status: analysis.status.into(),
            results: analysis.raw_results,
            created_at: analysis.created_at,
            updated_at: analysis.updated_at,
        }
    }
}
