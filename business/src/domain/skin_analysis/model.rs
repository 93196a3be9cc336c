use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::SkinAnalysisError;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisStatus {
    Pending,
    Processing,
    Analyzed,
    Failed,
}

impl std::fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisStatus::Pending => write!(f, "pending"),
            AnalysisStatus::Processing => write!(f, "processing"),
            AnalysisStatus::Analyzed => write!(f, "analyzed"),
            AnalysisStatus::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for AnalysisStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AnalysisStatus::Pending),
            "processing" => Ok(AnalysisStatus::Processing),
            "analyzed" => Ok(AnalysisStatus::Analyzed),
            "failed" => Ok(AnalysisStatus::Failed),
            _ => Err(format!("Invalid analysis status: {}", s)),
        }
    }
}

/// A face photo submitted to the provider, and whatever results came back for it.
#[derive(Debug, Clone)]
pub struct SkinAnalysis {
    pub id: Uuid,
    pub user_id: UserId,
    pub subject_id: String,
    pub batch_id: String,
    pub image_id: String,
    pub side_id: u32,
    pub light_id: u32,
    pub status: AnalysisStatus,
    pub raw_results: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewSkinAnalysisProps {
    pub user_id: UserId,
    pub subject_id: String,
    pub batch_id: String,
    pub image_id: String,
    pub side_id: u32,
    pub light_id: u32,
}

impl SkinAnalysis {
    /// Records an upload the provider has accepted. Starts in `Processing`.
    pub fn new(props: NewSkinAnalysisProps) -> Result<Self, SkinAnalysisError> {
        if props.subject_id.is_empty() || props.batch_id.is_empty() || props.image_id.is_empty()
        {
            return Err(SkinAnalysisError::InvalidProviderResponse);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            subject_id: props.subject_id,
            batch_id: props.batch_id,
            image_id: props.image_id,
            side_id: props.side_id,
            light_id: props.light_id,
            status: AnalysisStatus::Processing,
            raw_results: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn mark_completed(&mut self, results: serde_json::Value) {
        self.status = AnalysisStatus::Analyzed;
        self.raw_results = Some(results);
        self.updated_at = Utc::now();
    }

    pub fn mark_failed(&mut self) {
        self.status = AnalysisStatus::Failed;
        self.updated_at = Utc::now();
    }

    pub fn is_complete(&self) -> bool {
        self.status == AnalysisStatus::Analyzed
    }

    /// True when the record was created by `user_id` for the given provider subject and batch.
    pub fn matches(&self, user_id: &UserId, subject_id: &str, batch_id: &str) -> bool {
        &self.user_id == user_id && self.subject_id == subject_id && self.batch_id == batch_id
    }
}
