//! Person entity models and search parameter DTOs.

use cinedex_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cast member as nested in a movie detail response.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
}

/// Full person profile returned by person search and person detail.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSearchModel {
    pub id: DbId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<String>,
}

/// Query string of `GET /person/search`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSearchParams {
    pub name: Option<String>,
    /// Exact date match, `YYYY-MM-DD`.
    pub birthday: Option<Date>,
    pub movie_title: Option<String>,
    pub order_by: Option<String>,
    pub direction: Option<String>,
    /// Raw text; checked against the page-size tiers by the query builder.
    pub limit: Option<String>,
    /// Raw text; 1-based.
    pub page: Option<String>,
}
