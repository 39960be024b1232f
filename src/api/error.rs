use crate::application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API layer error
///
/// Either an application error mapped onto an HTTP status, or a request
/// the extractors could not parse.
#[derive(Debug)]
pub enum ApiError {
    Application(ApplicationError),
    InvalidRequest { status: StatusCode, message: String },
}

impl ApiError {
    pub fn invalid_request(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::InvalidRequest {
            status,
            message: message.into(),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Application(err) => application_error_parts(err),
            // Malformed body or query string
            ApiError::InvalidRequest { status, message } => (status, "INVALID_REQUEST", message),
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}

fn application_error_parts(err: ApplicationError) -> (StatusCode, &'static str, String) {
    let message = err.to_string();

    match err {
        // 400 Bad Request - invalid input
        ApplicationError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message),

        // 404 Not Found
        ApplicationError::BookNotFound { .. } => {
            (StatusCode::NOT_FOUND, "BOOK_NOT_FOUND", message)
        }
        ApplicationError::UserNotFound { .. } => {
            (StatusCode::NOT_FOUND, "USER_NOT_FOUND", message)
        }

        // 409 / 422 - business rule violations
        ApplicationError::BookAlreadyLoaned { .. } => {
            (StatusCode::CONFLICT, "BOOK_ALREADY_LOANED", message)
        }
        ApplicationError::LoanHistoryNotFound { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "LOAN_HISTORY_NOT_FOUND",
            message,
        ),

        // 500 Internal Server Error
        // Details go to the log only
        ApplicationError::RepositoryError(e) => {
            tracing::error!("Repository error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "REPOSITORY_ERROR",
                "Failed to access the database".to_string(),
            )
        }
    }
}
