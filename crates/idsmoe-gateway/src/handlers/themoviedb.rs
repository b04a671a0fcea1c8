use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use idsmoe_core::{AnimeRecord, LookupKey, Platform};
use idsmoe_redirector::LookupError;
use tracing::warn;

use super::segments;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// `GET /themoviedb/movie/{id}`: returns the full record.
///
/// Only movies are mapped; TV shows and seasons are rejected.
pub async fn themoviedb_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<AnimeRecord>> {
    let Path(path) = path?;
    let parts = segments(&path);
    if parts.len() < 2 {
        return Err(AppError::bad_request(
            "Invalid request",
            "Invalid TMDB URL format",
        ));
    }

    let (media_type, media_id) = (parts[0], parts[1]);
    if media_type != "movie" || parts.get(2) == Some(&"season") {
        return Err(AppError::bad_request(
            "Invalid request",
            "Currently, only `movie` are supported",
        ));
    }

    let key = LookupKey::new(Platform::TheMovieDb.key(), &format!("movie/{media_id}"));
    match state.lookup().fetch_key(&key).await {
        Ok(record) => Ok(Json(record)),
        Err(LookupError::NotFound(_)) => Err(AppError::not_found(format!(
            "Media type {media_type} with ID {media_id} not found"
        ))),
        Err(LookupError::DataCorruption(message)) => Err(AppError::internal(message)),
        Err(LookupError::Storage(e)) => {
            warn!(key = %key, error = %e, "themoviedb lookup failed");
            Err(AppError::not_found("TMDB data not found"))
        }
    }
}
