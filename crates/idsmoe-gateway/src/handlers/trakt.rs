use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use idsmoe_core::{AnimeRecord, LookupKey};
use idsmoe_redirector::LookupError;
use tracing::warn;

use super::segments;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// `GET /trakt/{type}/{id}[/seasons/{season}]`: returns the full record.
pub async fn trakt_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<AnimeRecord>> {
    let Path(path) = path?;
    let parts = segments(&path);
    if parts.len() < 2 {
        return Err(AppError::bad_request(
            "Invalid request",
            "Invalid Trakt URL format",
        ));
    }

    let (media_type, media_id) = (parts[0], parts[1]);
    let season = match parts.get(2..4) {
        Some(&[marker, season]) if marker == "season" || marker == "seasons" => Some(season),
        _ => None,
    };

    if season == Some("0") && (media_type == "show" || media_type == "shows") {
        return Err(AppError::bad_request(
            "Invalid season ID",
            "Season ID cannot be 0",
        ));
    }

    let media_type = if media_type.ends_with('s') {
        media_type.to_string()
    } else {
        format!("{media_type}s")
    };
    let key = LookupKey::trakt(&media_type, media_id, season);

    match state.lookup().fetch_key(&key).await {
        Ok(record) => Ok(Json(record)),
        Err(LookupError::NotFound(_)) => {
            let mut message = format!("Media type {media_type} with ID {media_id}");
            if let Some(season) = season {
                message.push_str(&format!(" and season ID {season}"));
            }
            message.push_str(" not found");
            Err(AppError::not_found(message))
        }
        Err(LookupError::DataCorruption(message)) => Err(AppError::internal(message)),
        Err(LookupError::Storage(e)) => {
            warn!(key = %key, error = %e, "trakt lookup failed");
            Err(AppError::not_found("Trakt data not found"))
        }
    }
}
