use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use idsmoe_redirector::RedirectError;
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors returned by the HTTP handlers.
///
/// Every variant renders as `{"error", "code", "message"}` with a matching
/// status code; the display form is the message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest {
        error: &'static str,
        message: String,
    },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    MethodNotAllowed { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(error: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            error,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AppError::BadRequest { error, .. } => error,
            AppError::NotFound { .. } => "Not found",
            AppError::MethodNotAllowed { .. } => "Method not allowed",
            AppError::Internal { .. } => "Internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Internal { message } = &self {
            error!(message = %message, "request failed");
        }

        let body = ErrorResponse {
            error: self.title().to_string(),
            code: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<RedirectError> for AppError {
    fn from(err: RedirectError) -> Self {
        if err.is_bad_request() {
            AppError::bad_request(err.title(), err.to_string())
        } else if err.is_not_found() {
            AppError::not_found(err.to_string())
        } else {
            AppError::internal(err.to_string())
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        if rejection.status().is_server_error() {
            AppError::internal(rejection.body_text())
        } else {
            AppError::bad_request("Invalid request", rejection.body_text())
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request("Invalid request", rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idsmoe_core::Platform;

    #[test]
    fn redirect_errors_map_to_status_codes() {
        let err: AppError = RedirectError::OneWaySource(Platform::Kurozora).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.title(), "Invalid platform source");

        let err: AppError = RedirectError::NotFound {
            platform: "anilist".to_string(),
            id: "1".to_string(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Platform anilist with ID 1 not found");

        let err: AppError = RedirectError::DataCorruption("bad".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
