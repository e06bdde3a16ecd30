//! Handlers for the person endpoints.

use axum::extract::State;
use cinedex_core::results::{require_row, require_rows, MoviesResult};
use cinedex_core::types::DbId;
use cinedex_db::models::person::PersonSearchParams;
use cinedex_db::query;
use cinedex_db::repositories::PersonRepo;

use crate::error::AppResult;
use crate::extract::{PathParam, QueryParams};
use crate::middleware::auth::AuthUser;
use crate::response::{PersonPayload, PersonsPayload, ResultResponse};
use crate::state::AppState;

/// GET /person/search
pub async fn search(
    State(state): State<AppState>,
    user: AuthUser,
    QueryParams(params): QueryParams<PersonSearchParams>,
) -> AppResult<ResultResponse<PersonsPayload>> {
    let visibility = user.context.visibility();
    let statement = query::person::search(&params, visibility)?;

    let persons = PersonRepo::search(&state.pool, &statement).await?;
    tracing::debug!(
        subject = %user.subject,
        ?visibility,
        count = persons.len(),
        "Person search"
    );
    let persons = require_rows(persons, MoviesResult::NoPersonsFoundWithinSearch)?;

    Ok(ResultResponse::new(
        MoviesResult::PersonsFoundWithinSearch,
        PersonsPayload { persons },
    ))
}

/// GET /person/{person_id}
///
/// Requires an authenticated caller but applies no visibility filter.
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    PathParam(person_id): PathParam<DbId>,
) -> AppResult<ResultResponse<PersonPayload>> {
    let person = PersonRepo::find_by_id(&state.pool, person_id).await?;
    tracing::debug!(
        subject = %user.subject,
        person_id,
        found = person.is_some(),
        "Person detail"
    );
    let person = require_row(person, MoviesResult::NoPersonWithIdFound)?;

    Ok(ResultResponse::new(
        MoviesResult::PersonWithIdFound,
        PersonPayload { person },
    ))
}
