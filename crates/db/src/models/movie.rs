//! Movie entity model and search parameter DTOs.

use cinedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie joined with its director's name.
///
/// Search queries select the summary columns only; the detail query also
/// selects `num_votes`, `budget`, `revenue` and `overview`. Columns a query
/// does not select decode as `None` and are left out of the JSON.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub rating: f64,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_votes: Option<i64>,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<i64>,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<i64>,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    pub hidden: bool,
}

/// Query string of `GET /movie/search`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSearchParams {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub order_by: Option<String>,
    pub direction: Option<String>,
    /// Raw text; checked against the page-size tiers by the query builder.
    pub limit: Option<String>,
    /// Raw text; 1-based.
    pub page: Option<String>,
}

/// Query string of `GET /movie/search/person/{personId}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieByPersonParams {
    pub order_by: Option<String>,
    pub direction: Option<String>,
    /// Raw text; checked against the page-size tiers by the query builder.
    pub limit: Option<String>,
    /// Raw text; 1-based.
    pub page: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> Movie {
        Movie {
            id: 10,
            title: "Dunkirk".into(),
            year: 2017,
            director: "Christopher Nolan".into(),
            rating: 7.8,
            num_votes: None,
            budget: None,
            revenue: None,
            overview: None,
            backdrop_path: None,
            poster_path: Some("/dunkirk.jpg".into()),
            hidden: false,
        }
    }

    #[test]
    fn absent_fields_are_omitted() {
        let json = serde_json::to_value(summary()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 10,
                "title": "Dunkirk",
                "year": 2017,
                "director": "Christopher Nolan",
                "rating": 7.8,
                "posterPath": "/dunkirk.jpg",
                "hidden": false,
            })
        );
    }

    #[test]
    fn search_params_use_camel_case() {
        let params: MovieSearchParams =
            serde_json::from_value(serde_json::json!({ "orderBy": "year", "limit": "25" })).unwrap();
        assert_eq!(params.order_by.as_deref(), Some("year"));
        assert_eq!(params.limit.as_deref(), Some("25"));
        assert!(params.title.is_none());
    }
}
