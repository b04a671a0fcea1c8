mod health;
mod meta;
mod platform;
mod redirect;
mod themoviedb;
mod trakt;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

pub use health::heartbeat_handler;
pub use meta::{
    index_handler, method_not_allowed_handler, not_found_handler, robots_handler,
    updated_handler,
};
pub use platform::{platform_array_handler, platform_lookup_handler};
pub use redirect::redirect_handler;
pub use themoviedb::themoviedb_handler;
pub use trakt::trakt_handler;

/// 302 response pointing at `location`.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Splits a path into segments, ignoring leading and trailing slashes.
fn segments(path: &str) -> Vec<&str> {
    path.trim_matches('/').split('/').collect()
}
