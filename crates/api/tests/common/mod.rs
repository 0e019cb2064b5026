#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use cinedex_api::catalog::MovieCatalog;
use cinedex_api::config::ServerConfig;
use cinedex_api::router::build_app_router;
use cinedex_api::state::AppState;
use cinedex_core::store::{IdAssignment, MovieStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        id_assignment: IdAssignment::Monotonic,
        seed_path: None,
    }
}

/// Fresh state around an empty catalog.
///
/// Routers built from clones of the same state share one catalog, so a test
/// can issue several requests against the same data.
pub fn test_state() -> AppState {
    test_state_with(IdAssignment::Monotonic)
}

/// Like [`test_state`], with the given identifier policy.
pub fn test_state_with(id_assignment: IdAssignment) -> AppState {
    let config = ServerConfig {
        id_assignment,
        ..test_config()
    };
    AppState {
        catalog: Arc::new(MovieCatalog::new(MovieStore::with_id_assignment(
            config.id_assignment,
        ))),
        config: Arc::new(config),
    }
}

/// Build the full application router with all middleware layers.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(state: AppState) -> Router {
    let config = test_config();
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Request body for a movie with the fields the catalog queries look at.
pub fn movie_body(title: &str, category: &str, genres: &[&str], release_date: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "",
        "category": category,
        "genres": genres,
        "release_date": release_date,
        "director": "Someone",
        "actors": [],
        "rating": 7.0,
        "poster_url": "",
    })
}

/// Create a movie through the API and return its identifier.
pub async fn create_movie(state: &AppState, body: serde_json::Value) -> u64 {
    let response = post_json(build_test_app(state.clone()), "/api/v1/movies", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_u64().unwrap()
}
