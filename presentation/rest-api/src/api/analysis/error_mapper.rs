use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::skin_analysis::errors::SkinAnalysisError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SkinAnalysisError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            SkinAnalysisError::ImageEmpty
            | SkinAnalysisError::ImageInvalid
            | SkinAnalysisError::ImageTooLarge
            | SkinAnalysisError::InvalidCaptureSettings => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            SkinAnalysisError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            SkinAnalysisError::ProviderUnavailable
            | SkinAnalysisError::InvalidProviderResponse => {
                (StatusCode::BAD_GATEWAY, "ProviderError")
            }
            SkinAnalysisError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        if status.is_server_error() {
            tracing::error!(error = ?self, "analysis request failed");
        }

        (status, ErrorResponse::new(name, &self.to_string()))
    }
}
