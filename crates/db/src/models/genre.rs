//! Genre reference data.

use cinedex_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `genre` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}
