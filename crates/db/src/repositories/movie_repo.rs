//! Repository for the `movie` table and its genre and cast junctions.

use cinedex_core::roles::Visibility;
use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::Genre;
use crate::models::movie::Movie;
use crate::models::person::Person;
use crate::query::{self, BuiltQuery};

/// Read access to movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Run a movie listing built by [`query::movie::search`] or
    /// [`query::movie::search_by_person`].
    pub async fn search(pool: &PgPool, statement: &BuiltQuery) -> Result<Vec<Movie>, sqlx::Error> {
        tracing::trace!(sql = %statement, params = statement.params.len(), "movie search");
        statement.query_as::<Movie>().fetch_all(pool).await
    }

    /// Find a movie by id. Hidden movies are `None` for public callers.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        visibility: Visibility,
    ) -> Result<Option<Movie>, sqlx::Error> {
        query::movie::detail(id, visibility)
            .query_as::<Movie>()
            .fetch_optional(pool)
            .await
    }

    /// Genres attached to a movie, ordered by name.
    pub async fn list_genres(
        pool: &PgPool,
        movie_id: DbId,
        visibility: Visibility,
    ) -> Result<Vec<Genre>, sqlx::Error> {
        query::movie::genres(movie_id, visibility)
            .query_as::<Genre>()
            .fetch_all(pool)
            .await
    }

    /// Cast of a movie, most popular first.
    pub async fn list_persons(
        pool: &PgPool,
        movie_id: DbId,
        visibility: Visibility,
    ) -> Result<Vec<Person>, sqlx::Error> {
        query::movie::persons(movie_id, visibility)
            .query_as::<Person>()
            .fetch_all(pool)
            .await
    }
}
