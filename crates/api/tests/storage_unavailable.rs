//! Behaviour when the database cannot be reached.
//!
//! The pool is lazy and points at a closed port, so any request that gets as
//! far as a query fails on connection acquisition.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use cinedex_api::router::build_app_router;
use cinedex_api::state::AppState;
use common::{body_json, get, get_auth, public_token};
use sqlx::postgres::PgPoolOptions;

fn unreachable_app() -> Router {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("postgres://cinedex@127.0.0.1:1/cinedex")
        .unwrap();
    build_app_router(AppState {
        pool,
        config: Arc::new(common::test_config()),
    })
}

#[tokio::test]
async fn validation_runs_before_storage() {
    let response = get_auth(unreachable_app(), "/movie/search?limit=11", &public_token()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["result"]["name"], "INVALID_LIMIT");
}

#[tokio::test]
async fn non_integer_paging_is_rejected_before_storage() {
    let cases = [
        ("/movie/search?limit=99999999999999999999", "INVALID_LIMIT"),
        ("/movie/search?limit=", "INVALID_LIMIT"),
        ("/movie/search?limit=abc", "INVALID_LIMIT"),
        ("/movie/search?page=abc", "INVALID_PAGE"),
        ("/person/search?limit=abc", "INVALID_LIMIT"),
    ];

    for (uri, name) in cases {
        let response = get_auth(unreachable_app(), uri, &public_token()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["result"]["name"], name, "{uri}");
    }
}

#[tokio::test]
async fn storage_failure_is_a_sanitized_500() {
    let response = get_auth(unreachable_app(), "/movie/search", &public_token()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["result"]["name"], "INTERNAL_ERROR");
    assert!(!json.to_string().contains("127.0.0.1"));
}

#[tokio::test]
async fn health_reports_degraded() {
    let response = get(unreachable_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}
