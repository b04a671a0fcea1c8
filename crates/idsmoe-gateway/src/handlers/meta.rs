use axum::extract::State;
use axum::response::Response;
use tracing::warn;

use super::found;
use crate::error::AppError;
use crate::state::AppState;

pub async fn index_handler(State(state): State<AppState>) -> Response {
    found(&state.settings().homepage_url)
}

pub async fn robots_handler() -> &'static str {
    "User-agent: *\nDisallow:"
}

/// `GET /updated`: when the dataset was last refreshed, as plain text.
pub async fn updated_handler(State(state): State<AppState>) -> String {
    match state.lookup().last_updated().await {
        Ok(Some(at)) => format!("Updated on {}", at.strftime("%m/%d/%Y %H:%M:%S UTC")),
        Ok(None) => "Updated endpoint - timestamp not available".to_string(),
        Err(e) => {
            warn!(error = %e, "failed to read last update time");
            "Updated endpoint - timestamp not available".to_string()
        }
    }
}

pub async fn not_found_handler() -> AppError {
    AppError::not_found("Endpoint not found")
}

pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed {
        message: "Only GET requests are allowed".to_string(),
    }
}
