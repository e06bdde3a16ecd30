//! Response envelope types for API handlers.
//!
//! Every response has the shape `{ "result": { code, name, message, status }, ...payload }`.
//! Successful handlers return [`ResultResponse`]; failures are rendered by
//! [`crate::error::AppError`] with the same `result` object and no payload.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cinedex_core::results::MoviesResult;
use cinedex_db::models::genre::Genre;
use cinedex_db::models::movie::Movie;
use cinedex_db::models::person::{Person, PersonSearchModel};
use serde::Serialize;

/// The `result` object of the envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultBody {
    pub code: u16,
    pub name: &'static str,
    pub message: String,
    /// HTTP status of the response carrying this body.
    pub status: u16,
}

impl From<MoviesResult> for ResultBody {
    fn from(result: MoviesResult) -> Self {
        Self {
            code: result.code(),
            name: result.name(),
            message: result.message().to_string(),
            status: result.http_status(),
        }
    }
}

/// `{ "result": ..., <payload fields> }` with the catalog entry's HTTP status.
#[derive(Debug, Serialize)]
pub struct ResultResponse<T: Serialize> {
    #[serde(skip)]
    status: StatusCode,
    pub result: ResultBody,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> ResultResponse<T> {
    pub fn new(result: MoviesResult, payload: T) -> Self {
        Self {
            status: StatusCode::from_u16(result.http_status()).unwrap_or(StatusCode::OK),
            result: result.into(),
            payload,
        }
    }
}

impl<T: Serialize> IntoResponse for ResultResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct MoviesPayload {
    pub movies: Vec<Movie>,
}

#[derive(Debug, Serialize)]
pub struct MovieDetailPayload {
    pub movie: Movie,
    pub genres: Vec<Genre>,
    pub persons: Vec<Person>,
}

#[derive(Debug, Serialize)]
pub struct PersonsPayload {
    pub persons: Vec<PersonSearchModel>,
}

#[derive(Debug, Serialize)]
pub struct PersonPayload {
    pub person: PersonSearchModel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_fields_sit_beside_result() {
        let response = ResultResponse::new(
            MoviesResult::PersonsFoundWithinSearch,
            PersonsPayload { persons: vec![] },
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "result": {
                    "code": 2050,
                    "name": "PERSONS_FOUND_WITHIN_SEARCH",
                    "message": "Persons with the given search parameters found",
                    "status": 200,
                },
                "persons": [],
            })
        );
    }

    #[test]
    fn status_follows_catalog_entry() {
        let response = ResultResponse::new(
            MoviesResult::MovieWithIdFound,
            MoviesPayload { movies: vec![] },
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
