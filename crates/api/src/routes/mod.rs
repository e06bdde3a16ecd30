pub mod health;
pub mod movie;
pub mod person;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// ```text
/// /movie/search                          movie search
/// /movie/search/person/{person_id}       movies a person is cast in
/// /movie/{movie_id}                      movie with genres and cast
///
/// /person/search                         person search
/// /person/{person_id}                    person profile
/// ```
///
/// Every catalog route requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movie", movie::router())
        .nest("/person", person::router())
}
