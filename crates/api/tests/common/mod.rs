#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use cinedex_api::auth::jwt::{generate_token, JwtConfig};
use cinedex_api::config::{DatabaseConfig, ServerConfig};
use cinedex_api::router::build_app_router;
use cinedex_api::state::AppState;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 5,
            statement_timeout_ms: 5000,
        },
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
        },
    }
}

/// Build the full application router, with the production middleware stack,
/// over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

/// Mint a token signed with the test secret.
pub fn token(roles: &[&str]) -> String {
    generate_token(
        "test-user",
        roles,
        300,
        &JwtConfig {
            secret: TEST_SECRET.to_string(),
        },
    )
    .unwrap()
}

/// Token for a caller without elevated roles.
pub fn public_token() -> String {
    token(&["USER"])
}

pub fn admin_token() -> String {
    token(&["ADMIN"])
}

/// Send an unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET with `Authorization: Bearer <token>`.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Ids of the objects in a JSON array field.
pub fn ids(json: &serde_json::Value, field: &str) -> Vec<i64> {
    json[field]
        .as_array()
        .unwrap_or_else(|| panic!("`{field}` should be an array: {json}"))
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}
