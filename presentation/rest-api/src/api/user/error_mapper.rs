use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            UserError::EmailInvalid
            | UserError::DisplayNameEmpty
            | UserError::NameEmpty
            | UserError::GoalTitleEmpty => (StatusCode::BAD_REQUEST, "ValidationError"),
            UserError::UidMismatch => (StatusCode::FORBIDDEN, "Forbidden"),
            UserError::AlreadyExists => (StatusCode::CONFLICT, "Conflict"),
            UserError::NotFound | UserError::GoalNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            UserError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        if status.is_server_error() {
            tracing::error!(error = ?self, "user request failed");
        }

        (status, ErrorResponse::new(name, &self.to_string()))
    }
}
