use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movie`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(movie::search))
        .route("/search/person/{person_id}", get(movie::search_by_person))
        .route("/{movie_id}", get(movie::get_by_id))
}
