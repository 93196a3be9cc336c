#[derive(Debug, thiserror::Error)]
pub enum SkinAnalysisError {
    #[error("analysis.image_empty")]
    ImageEmpty,
    #[error("analysis.image_invalid")]
    ImageInvalid,
    #[error("analysis.image_too_large")]
    ImageTooLarge,
    #[error("analysis.invalid_capture_settings")]
    InvalidCaptureSettings,
    #[error("analysis.not_found")]
    NotFound,
    #[error("analysis.provider_unavailable")]
    ProviderUnavailable,
    #[error("analysis.invalid_provider_response")]
    InvalidProviderResponse,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
