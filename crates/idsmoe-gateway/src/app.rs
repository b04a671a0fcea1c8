use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    heartbeat_handler, index_handler, method_not_allowed_handler, not_found_handler,
    platform_array_handler, platform_lookup_handler, redirect_handler, robots_handler,
    themoviedb_handler, trakt_handler, updated_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/heartbeat", get(heartbeat_handler))
            .route("/ping", get(heartbeat_handler))
            .route("/updated", get(updated_handler))
            .route("/robots.txt", get(robots_handler))
            .route("/rd", get(redirect_handler))
            .route("/redirect", get(redirect_handler))
            .route("/trakt/{*path}", get(trakt_handler))
            .route("/themoviedb/{*path}", get(themoviedb_handler))
            .route("/{platform}", get(platform_array_handler))
            .route("/{platform}/{id}", get(platform_lookup_handler))
            .fallback(not_found_handler)
            .method_not_allowed_fallback(method_not_allowed_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
