//! Movie statements: search, search by cast member, detail, genres, cast.

use cinedex_core::error::CoreError;
use cinedex_core::roles::Visibility;
use cinedex_core::search::{contains_pattern, Listing, MovieSortField};
use cinedex_core::types::DbId;

use super::{BuiltQuery, SelectBuilder, SqlValue};
use crate::models::movie::{MovieByPersonParams, MovieSearchParams};

/// Columns of the summary view used by both search endpoints.
const MOVIE_SUMMARY_COLUMNS: &str = "\
    m.id, m.title, m.year, d.name AS director, m.rating, \
    m.backdrop_path, m.poster_path, m.hidden";

/// Columns of the detail view.
const MOVIE_DETAIL_COLUMNS: &str = "\
    m.id, m.title, m.year, d.name AS director, m.rating, \
    m.num_votes, m.budget, m.revenue, m.overview, \
    m.backdrop_path, m.poster_path, m.hidden";

const DIRECTOR_JOIN: &str = "JOIN person d ON d.id = m.director_id";
const GENRE_JOIN: &str = "JOIN movie_genre mg ON mg.movie_id = m.id JOIN genre g ON g.id = mg.genre_id";

/// Column backing each sortable field. `m.id` breaks ties.
fn sort_column(field: MovieSortField) -> &'static str {
    match field {
        MovieSortField::Title => "m.title",
        MovieSortField::Rating => "m.rating",
        MovieSortField::Year => "m.year",
    }
}

fn apply_listing(select: &mut SelectBuilder, listing: &Listing<MovieSortField>) {
    select
        .order_by(sort_column(listing.sort.field), listing.sort.direction)
        .order_by("m.id", Default::default())
        .paginate(listing.paging);
}

// ---------------------------------------------------------------------------
// Filter slots
// ---------------------------------------------------------------------------

/// One optional movie-search filter. Each present filter adds exactly one
/// predicate; the genre slot also pulls in the genre junction.
#[derive(Debug, Clone, PartialEq)]
pub enum MovieFilter {
    Title(String),
    Genre(String),
    Director(String),
    Year(i32),
}

impl MovieFilter {
    /// Present filters in their fixed application order.
    pub fn from_params(params: &MovieSearchParams) -> Vec<MovieFilter> {
        let mut filters = Vec::new();
        if let Some(title) = &params.title {
            filters.push(MovieFilter::Title(title.clone()));
        }
        if let Some(genre) = &params.genre {
            filters.push(MovieFilter::Genre(genre.clone()));
        }
        if let Some(director) = &params.director {
            filters.push(MovieFilter::Director(director.clone()));
        }
        if let Some(year) = params.year {
            filters.push(MovieFilter::Year(year));
        }
        filters
    }

    pub fn apply(&self, select: &mut SelectBuilder) {
        match self {
            MovieFilter::Title(title) => {
                select.bind_predicate("m.title", "LIKE", SqlValue::Text(contains_pattern(title)));
            }
            MovieFilter::Genre(genre) => {
                // A movie in several matching genres would otherwise repeat.
                select.distinct().join(GENRE_JOIN).bind_predicate(
                    "g.name",
                    "LIKE",
                    SqlValue::Text(contains_pattern(genre)),
                );
            }
            MovieFilter::Director(director) => {
                select.bind_predicate(
                    "d.name",
                    "LIKE",
                    SqlValue::Text(contains_pattern(director)),
                );
            }
            MovieFilter::Year(year) => {
                select.bind_predicate("m.year", "=", SqlValue::Integer(i64::from(*year)));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

/// `GET /movie/search`.
///
/// Fails with the matching invalid-parameter code before any SQL is built.
pub fn search(
    params: &MovieSearchParams,
    visibility: Visibility,
) -> Result<BuiltQuery, CoreError> {
    let listing = Listing::<MovieSortField>::resolve(
        params.order_by.as_deref(),
        params.direction.as_deref(),
        params.limit.as_deref(),
        params.page.as_deref(),
    )?;

    let mut select = SelectBuilder::new(MOVIE_SUMMARY_COLUMNS, "movie m");
    select.join(DIRECTOR_JOIN);
    for filter in MovieFilter::from_params(params) {
        filter.apply(&mut select);
    }
    select.restrict_visibility(visibility);
    apply_listing(&mut select, &listing);

    Ok(select.build())
}

/// `GET /movie/search/person/{personId}`: movies the person is cast in.
pub fn search_by_person(
    person_id: DbId,
    params: &MovieByPersonParams,
    visibility: Visibility,
) -> Result<BuiltQuery, CoreError> {
    let listing = Listing::<MovieSortField>::resolve(
        params.order_by.as_deref(),
        params.direction.as_deref(),
        params.limit.as_deref(),
        params.page.as_deref(),
    )?;

    let mut select = SelectBuilder::new(MOVIE_SUMMARY_COLUMNS, "movie_person mp");
    select
        .join("JOIN movie m ON m.id = mp.movie_id")
        .join(DIRECTOR_JOIN)
        .bind_predicate("mp.person_id", "=", SqlValue::Integer(person_id))
        .restrict_visibility(visibility);
    apply_listing(&mut select, &listing);

    Ok(select.build())
}

/// Core fields of `GET /movie/{movieId}`.
pub fn detail(movie_id: DbId, visibility: Visibility) -> BuiltQuery {
    let mut select = SelectBuilder::new(MOVIE_DETAIL_COLUMNS, "movie m");
    select
        .join(DIRECTOR_JOIN)
        .bind_predicate("m.id", "=", SqlValue::Integer(movie_id))
        .restrict_visibility(visibility);
    select.build()
}

/// Genres of one movie, by name.
pub fn genres(movie_id: DbId, visibility: Visibility) -> BuiltQuery {
    let mut select = SelectBuilder::new("g.id, g.name", "genre g");
    select
        .distinct()
        .join("JOIN movie_genre mg ON mg.genre_id = g.id")
        .join("JOIN movie m ON m.id = mg.movie_id")
        .bind_predicate("m.id", "=", SqlValue::Integer(movie_id))
        .restrict_visibility(visibility)
        .order_by_raw("g.name ASC")
        .order_by_raw("g.id ASC");
    select.build()
}

/// Cast of one movie, most popular first.
pub fn persons(movie_id: DbId, visibility: Visibility) -> BuiltQuery {
    let mut select = SelectBuilder::new("p.id, p.name, p.popularity", "person p");
    select
        .distinct()
        .join("JOIN movie_person mp ON mp.person_id = p.id")
        .join("JOIN movie m ON m.id = mp.movie_id")
        .bind_predicate("m.id", "=", SqlValue::Integer(movie_id))
        .restrict_visibility(visibility)
        .order_by_raw("p.popularity DESC NULLS LAST")
        .order_by_raw("p.id ASC");
    select.build()
}
