use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use idsmoe_core::{KeyValueStore, StorageError};
use idsmoe_gateway::model::{ErrorResponse, HeartbeatResponse};
use idsmoe_gateway::{App, AppState, Settings};
use idsmoe_storage::InMemoryStore;
use serde_json::Value;
use tower::ServiceExt;

fn seeded_store() -> InMemoryStore {
    InMemoryStore::from_iter([
        ("myanimelist/1", "1"),
        ("anilist/1", "1"),
        ("kitsu/1", "1"),
        (
            "1",
            r#"{"title":"Cowboy Bebop","myanimelist":1,"anilist":1,"kitsu":"1"}"#,
        ),
        ("themoviedb/movie/11", "2"),
        ("trakt/movies/7", "2"),
        (
            "2",
            r#"{"title":"Perfect Blue","themoviedb":11,"trakt":7,"trakt_type":"movies"}"#,
        ),
        ("trakt/shows/30857/seasons/1", "3"),
        (
            "3",
            r#"{"title":"Frieren","trakt":30857,"trakt_type":"shows","trakt_season":1}"#,
        ),
        ("last_updated", "1700000000"),
    ])
}

/// A store whose backend is always down.
struct UnavailableStore;

#[async_trait]
impl KeyValueStore for UnavailableStore {
    async fn get(&self, _key: &str) -> idsmoe_core::error::Result<Option<String>> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }
}

fn app_over(store: Arc<dyn KeyValueStore>) -> Router {
    let settings = Settings::builder()
        .dataset_base_url("https://data.example/db")
        .homepage_url("https://home.example")
        .build();
    App::router(AppState::new(store, settings))
}

fn app_with(store: InMemoryStore) -> Router {
    app_over(Arc::new(store))
}

fn app() -> Router {
    app_with(seeded_store())
}

async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn error_body(response: Response) -> ErrorResponse {
    serde_json::from_str(&body_text(response).await).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn test_raw_redirect_returns_target_url_as_text() {
    let response = get(app(), "/rd?from=mal&id=1&to=anilist&raw=true").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "https://anilist.co/anime/1");
}

#[tokio::test]
async fn test_redirect_without_target_sends_to_source_page() {
    let response = get(app(), "/redirect?platform=kitsu&mediaid=1").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "https://kitsu.app/anime/1");
}

#[tokio::test]
async fn test_redirect_rejects_one_way_source() {
    let response = get(app(), "/rd?platform=kurozora&id=1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = error_body(response).await;
    assert_eq!(body.error, "Invalid platform source");
    assert_eq!(body.code, 400);
}

#[tokio::test]
async fn test_redirect_requires_platform_and_id() {
    let response = get(app(), "/rd?id=1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await.error, "Invalid platform");

    let response = get(app(), "/rd?platform=mal").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await.error, "Invalid platform ID");
}

#[tokio::test]
async fn test_redirect_reports_missing_target_field_with_title() {
    let response = get(app(), "/rd?platform=mal&id=1&target=trakt").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = error_body(response).await;
    assert_eq!(
        body.message,
        "Cowboy Bebop does not exist on trakt using myanimelist with ID 1"
    );
}

#[tokio::test]
async fn test_redirect_miss_is_not_found() {
    let response = get(app(), "/rd?platform=anilist&id=999&target=mal").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        error_body(response).await.message,
        "Platform anilist with ID 999 not found"
    );
}

#[tokio::test]
async fn test_platform_lookup_returns_record() {
    let response = get(app(), "/MAL/1.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let record: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(record["title"], "Cowboy Bebop");
    assert_eq!(record["kitsu"], "1");
}

#[tokio::test]
async fn test_platform_lookup_miss() {
    let response = get(app(), "/anilist/404").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = error_body(response).await;
    assert_eq!(body.error, "Not found");
    assert_eq!(body.message, "Platform anilist with ID 404 not found");
}

#[tokio::test]
async fn test_platform_array_redirects_to_dataset() {
    let response = get(app(), "/mal()").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "https://data.example/db/myanimelist.json");

    let response = get(app(), "/anilist").await;
    assert_eq!(location(&response), "https://data.example/db/anilist_object.json");

    let response = get(app(), "/aa").await;
    assert_eq!(location(&response), "https://data.example/db/animeapi.json");
}

#[tokio::test]
async fn test_platform_array_rejects_unknown_platform() {
    let response = get(app(), "/nowhere").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(response).await.message,
        "Platform nowhere not found, please check if it is a valid platform"
    );
}

#[tokio::test]
async fn test_themoviedb_movie_lookup() {
    let response = get(app(), "/themoviedb/movie/11").await;

    assert_eq!(response.status(), StatusCode::OK);
    let record: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(record["title"], "Perfect Blue");
}

#[tokio::test]
async fn test_themoviedb_rejects_tv() {
    let response = get(app(), "/themoviedb/tv/1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(response).await.message,
        "Currently, only `movie` are supported"
    );

    let response = get(app(), "/themoviedb/movie").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_trakt_lookup_with_season_and_singular_type() {
    let response = get(app(), "/trakt/show/30857/seasons/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let record: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(record["title"], "Frieren");

    let response = get(app(), "/trakt/movie/7").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_trakt_rejects_season_zero_and_short_paths() {
    let response = get(app(), "/trakt/shows/30857/seasons/0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await.error, "Invalid season ID");

    let response = get(app(), "/trakt/shows").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(response).await.message,
        "Invalid Trakt URL format"
    );
}

#[tokio::test]
async fn test_trakt_miss_mentions_season() {
    let response = get(app(), "/trakt/shows/30857/seasons/2").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        error_body(response).await.message,
        "Media type shows with ID 30857 and season ID 2 not found"
    );
}

#[tokio::test]
async fn test_heartbeat_ok() {
    let response = get(app(), "/heartbeat").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: HeartbeatResponse = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body.status, "OK");
    assert_eq!(body.code, 200);
    assert!(body.request_time.ends_with('s'));
    assert!(body.request_epoch > 0.0);
}

#[tokio::test]
async fn test_heartbeat_fails_on_empty_store() {
    let response = get(app_with(InMemoryStore::new()), "/ping").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = error_body(response).await;
    assert_eq!(body.error, "Internal server error");
    assert_eq!(body.message, "Redis data is corrupted or unavailable");
}

#[tokio::test]
async fn test_heartbeat_fails_on_mismatched_record() {
    let store = InMemoryStore::from_iter([
        ("myanimelist/1", "1"),
        ("1", r#"{"myanimelist":2}"#),
    ]);
    let response = get(app_with(store), "/heartbeat").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        error_body(response).await.message,
        "Data integrity check failed"
    );
}

#[tokio::test]
async fn test_heartbeat_fails_when_store_is_down() {
    let response = get(app_over(Arc::new(UnavailableStore)), "/heartbeat").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        error_body(response).await.message,
        "Redis data is corrupted or unavailable"
    );
}

#[tokio::test]
async fn test_store_outage_on_redirect_is_internal_error() {
    let response = get(app_over(Arc::new(UnavailableStore)), "/rd?platform=mal&id=1").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = error_body(response).await;
    assert_eq!(body.error, "Internal server error");
    assert_eq!(body.code, 500);
}

#[tokio::test]
async fn test_store_outage_on_lookup_routes_is_not_found() {
    let cases = [
        ("/anilist/1", "Platform anilist not found or not supported"),
        ("/trakt/shows/1", "Trakt data not found"),
        ("/themoviedb/movie/1", "TMDB data not found"),
    ];

    for (uri, message) in cases {
        let response = get(app_over(Arc::new(UnavailableStore)), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri: {uri}");
        let body = error_body(response).await;
        assert_eq!(body.error, "Not found", "uri: {uri}");
        assert_eq!(body.message, message, "uri: {uri}");
    }
}

#[tokio::test]
async fn test_corrupt_data_is_internal_error_on_every_route() {
    let store = Arc::new(InMemoryStore::from_iter([
        ("anilist/1", "not-a-number"),
        ("trakt/shows/1", "4"),
        ("themoviedb/movie/1", "4"),
        ("4", "[1, 2]"),
    ]));
    let uris = [
        "/anilist/1",
        "/trakt/shows/1",
        "/themoviedb/movie/1",
        "/rd?platform=anilist&id=1",
    ];

    for uri in uris {
        let response = get(app_over(store.clone()), uri).await;
        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "uri: {uri}"
        );
        assert_eq!(error_body(response).await.error, "Internal server error");
    }
}

#[tokio::test]
async fn test_undecodable_path_gets_error_body() {
    let response = get(app(), "/mal/%FF").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = error_body(response).await;
    assert_eq!(body.error, "Invalid request");
    assert_eq!(body.code, 400);
    assert!(body.message.contains("id"), "message: {}", body.message);
}

#[tokio::test]
async fn test_unknown_platform_case_does_not_matter() {
    let lower = error_body(get(app(), "/foo/1").await).await;
    let upper = error_body(get(app(), "/FOO/1").await).await;

    assert_eq!(lower.message, "Platform foo with ID 1 not found");
    assert_eq!(upper.message, lower.message);
}

#[tokio::test]
async fn test_updated_formats_timestamp() {
    let response = get(app(), "/updated").await;
    assert_eq!(body_text(response).await, "Updated on 11/14/2023 22:13:20 UTC");

    let response = get(app_with(InMemoryStore::new()), "/updated").await;
    assert_eq!(
        body_text(response).await,
        "Updated endpoint - timestamp not available"
    );
}

#[tokio::test]
async fn test_static_routes() {
    let response = get(app(), "/").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "https://home.example");

    let response = get(app(), "/robots.txt").await;
    assert_eq!(body_text(response).await, "User-agent: *\nDisallow:");
}

#[tokio::test]
async fn test_unknown_path_and_method() {
    let response = get(app(), "/a/b/c/d").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_body(response).await.message, "Endpoint not found");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/heartbeat")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(error_body(response).await.error, "Method not allowed");
}
