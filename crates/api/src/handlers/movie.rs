//! Handlers for the movie endpoints.
//!
//! Each handler validates and builds its statement before touching the pool,
//! so an invalid parameter never costs a query.

use axum::extract::State;
use cinedex_core::results::{require_row, require_rows, MoviesResult};
use cinedex_core::types::DbId;
use cinedex_db::models::movie::{MovieByPersonParams, MovieSearchParams};
use cinedex_db::query;
use cinedex_db::repositories::MovieRepo;

use crate::error::AppResult;
use crate::extract::{PathParam, QueryParams};
use crate::middleware::auth::AuthUser;
use crate::response::{MovieDetailPayload, MoviesPayload, ResultResponse};
use crate::state::AppState;

/// GET /movie/search
pub async fn search(
    State(state): State<AppState>,
    user: AuthUser,
    QueryParams(params): QueryParams<MovieSearchParams>,
) -> AppResult<ResultResponse<MoviesPayload>> {
    let visibility = user.context.visibility();
    let statement = query::movie::search(&params, visibility)?;

    let movies = MovieRepo::search(&state.pool, &statement).await?;
    tracing::debug!(subject = %user.subject, ?visibility, count = movies.len(), "Movie search");
    let movies = require_rows(movies, MoviesResult::NoMoviesFoundWithinSearch)?;

    Ok(ResultResponse::new(
        MoviesResult::MoviesFoundWithinSearch,
        MoviesPayload { movies },
    ))
}

/// GET /movie/search/person/{person_id}
pub async fn search_by_person(
    State(state): State<AppState>,
    user: AuthUser,
    PathParam(person_id): PathParam<DbId>,
    QueryParams(params): QueryParams<MovieByPersonParams>,
) -> AppResult<ResultResponse<MoviesPayload>> {
    let visibility = user.context.visibility();
    let statement = query::movie::search_by_person(person_id, &params, visibility)?;

    let movies = MovieRepo::search(&state.pool, &statement).await?;
    tracing::debug!(
        subject = %user.subject,
        person_id,
        ?visibility,
        count = movies.len(),
        "Movies by person"
    );
    let movies = require_rows(movies, MoviesResult::NoMoviesWithPersonIdFound)?;

    Ok(ResultResponse::new(
        MoviesResult::MoviesWithPersonIdFound,
        MoviesPayload { movies },
    ))
}

/// GET /movie/{movie_id}
///
/// Genres and cast are fetched concurrently once the movie itself is known
/// to exist; both may be empty.
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    PathParam(movie_id): PathParam<DbId>,
) -> AppResult<ResultResponse<MovieDetailPayload>> {
    let visibility = user.context.visibility();

    let movie = MovieRepo::find_by_id(&state.pool, movie_id, visibility).await?;
    let movie = require_row(movie, MoviesResult::NoMovieWithIdFound)?;

    let (genres, persons) = tokio::try_join!(
        MovieRepo::list_genres(&state.pool, movie_id, visibility),
        MovieRepo::list_persons(&state.pool, movie_id, visibility),
    )?;
    tracing::debug!(
        subject = %user.subject,
        movie_id,
        genres = genres.len(),
        persons = persons.len(),
        "Movie detail"
    );

    Ok(ResultResponse::new(
        MoviesResult::MovieWithIdFound,
        MovieDetailPayload {
            movie,
            genres,
            persons,
        },
    ))
}
