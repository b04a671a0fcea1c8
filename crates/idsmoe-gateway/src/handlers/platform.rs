use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use idsmoe_core::{is_valid_target, resolve, AnimeRecord};
use idsmoe_redirector::LookupError;
use tracing::warn;

use super::found;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Name of the bundled dataset served by `/animeapi` and `/aa`.
const ANIMEAPI_DATASET: &str = "animeapi";

/// `GET /{platform}`: redirects to the bulk dataset file for a platform.
///
/// `/{platform}()` selects the array form of the file, plain `/{platform}`
/// the object form keyed by id.
pub async fn platform_array_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let Path(platform) = path?;
    let Some(name) = dataset_name(&platform) else {
        return Err(AppError::bad_request(
            "Invalid platform",
            format!("Platform {platform} not found, please check if it is a valid platform"),
        ));
    };

    let location = format!(
        "{}/{name}.json",
        state.settings().dataset_base_url.trim_end_matches('/')
    );
    Ok(found(&location))
}

/// `GET /{platform}/{id}`: returns the full record.
pub async fn platform_lookup_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<AnimeRecord>> {
    let Path((platform, id)) = path?;
    let platform = resolve(&platform).into_owned();

    match state.lookup().fetch(&platform, &id).await {
        Ok(record) => Ok(Json(record)),
        Err(LookupError::NotFound(_)) => Err(AppError::not_found(format!(
            "Platform {platform} with ID {id} not found"
        ))),
        Err(LookupError::DataCorruption(message)) => Err(AppError::internal(message)),
        Err(LookupError::Storage(e)) => {
            warn!(platform = %platform, id = %id, error = %e, "platform lookup failed");
            Err(AppError::not_found(format!(
                "Platform {platform} not found or not supported"
            )))
        }
    }
}

/// Maps a requested file name to the dataset it refers to.
fn dataset_name(requested: &str) -> Option<String> {
    let name = requested.strip_suffix(".json").unwrap_or(requested);
    let (name, is_array) = match name.strip_suffix("()") {
        Some(name) => (name, true),
        None => (name, false),
    };

    if name == "aa" || name == ANIMEAPI_DATASET {
        return Some(ANIMEAPI_DATASET.to_string());
    }
    if !is_valid_target(name) {
        return None;
    }

    let resolved = resolve(name);
    Some(if is_array {
        resolved.to_string()
    } else {
        format!("{resolved}_object")
    })
}
