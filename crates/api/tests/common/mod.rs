#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use sakila_api::config::ServerConfig;
use sakila_api::router::build_app_router;
use sakila_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, with the production middleware
/// stack, around the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, &test_config())
}

/// Same as [`build_test_app`] with a caller-supplied `ServerConfig`.
pub fn build_test_app_with_config(pool: PgPool, config: &ServerConfig) -> Router {
    build_app_router(AppState { pool }, config)
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body through the router.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    put_raw(app, uri, Some("application/json"), body.to_string()).await
}

/// Send a PUT request with an arbitrary body and optional content type.
pub async fn put_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<String>,
) -> Response<Body> {
    let mut builder = Request::builder().method(Method::PUT).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body.into())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Extract sorted `title` values from a JSON array of `{title}` objects.
pub fn sorted_titles(json: &serde_json::Value) -> Vec<String> {
    let mut titles: Vec<String> = json
        .as_array()
        .expect("response should be a JSON array")
        .iter()
        .map(|row| row["title"].as_str().unwrap().to_string())
        .collect();
    titles.sort();
    titles
}
