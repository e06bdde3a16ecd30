use axum::routing::get;
use axum::Router;

use crate::handlers::person;
use crate::state::AppState;

/// Routes mounted at `/person`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(person::search))
        .route("/{person_id}", get(person::get_by_id))
}
