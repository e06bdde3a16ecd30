//! Repository for the `person` table.

use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::person::PersonSearchModel;
use crate::query::{self, BuiltQuery};

pub struct PersonRepo;

impl PersonRepo {
    /// Run a statement built by [`query::person::search`].
    pub async fn search(
        pool: &PgPool,
        statement: &BuiltQuery,
    ) -> Result<Vec<PersonSearchModel>, sqlx::Error> {
        tracing::trace!(sql = %statement, params = statement.params.len(), "person search");
        statement.query_as::<PersonSearchModel>().fetch_all(pool).await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PersonSearchModel>, sqlx::Error> {
        query::person::detail(id)
            .query_as::<PersonSearchModel>()
            .fetch_optional(pool)
            .await
    }
}
