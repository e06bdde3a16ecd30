//! Result-code catalog for the movies service.
//!
//! Every response carries exactly one entry from this catalog: a success
//! code naming what was found, or a failure code naming which parameter was
//! rejected or which lookup came back empty. Clients switch on the numeric
//! code; the name and message are informational.

use std::fmt;

use crate::error::CoreError;

/// Broad class of a catalog entry. Decides the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    InvalidParameter,
    NotFound,
}

impl Outcome {
    pub fn http_status(self) -> u16 {
        match self {
            Outcome::Success => 200,
            Outcome::InvalidParameter => 400,
            Outcome::NotFound => 404,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoviesResult {
    InvalidOrderBy,
    InvalidDirection,
    InvalidLimit,
    InvalidPage,
    MoviesFoundWithinSearch,
    NoMoviesFoundWithinSearch,
    MovieWithIdFound,
    NoMovieWithIdFound,
    MoviesWithPersonIdFound,
    NoMoviesWithPersonIdFound,
    PersonsFoundWithinSearch,
    NoPersonsFoundWithinSearch,
    PersonWithIdFound,
    NoPersonWithIdFound,
}

impl MoviesResult {
    pub const ALL: [MoviesResult; 14] = [
        MoviesResult::InvalidOrderBy,
        MoviesResult::InvalidDirection,
        MoviesResult::InvalidLimit,
        MoviesResult::InvalidPage,
        MoviesResult::MoviesFoundWithinSearch,
        MoviesResult::NoMoviesFoundWithinSearch,
        MoviesResult::MovieWithIdFound,
        MoviesResult::NoMovieWithIdFound,
        MoviesResult::MoviesWithPersonIdFound,
        MoviesResult::NoMoviesWithPersonIdFound,
        MoviesResult::PersonsFoundWithinSearch,
        MoviesResult::NoPersonsFoundWithinSearch,
        MoviesResult::PersonWithIdFound,
        MoviesResult::NoPersonWithIdFound,
    ];

    /// Numeric wire code.
    pub fn code(self) -> u16 {
        match self {
            MoviesResult::InvalidOrderBy => 2000,
            MoviesResult::InvalidDirection => 2001,
            MoviesResult::InvalidLimit => 2002,
            MoviesResult::InvalidPage => 2003,
            MoviesResult::MoviesFoundWithinSearch => 2010,
            MoviesResult::NoMoviesFoundWithinSearch => 2011,
            MoviesResult::MovieWithIdFound => 2020,
            MoviesResult::NoMovieWithIdFound => 2021,
            MoviesResult::MoviesWithPersonIdFound => 2030,
            MoviesResult::NoMoviesWithPersonIdFound => 2031,
            MoviesResult::PersonsFoundWithinSearch => 2050,
            MoviesResult::NoPersonsFoundWithinSearch => 2051,
            MoviesResult::PersonWithIdFound => 2060,
            MoviesResult::NoPersonWithIdFound => 2061,
        }
    }

    /// Stable upper-snake-case name.
    pub fn name(self) -> &'static str {
        match self {
            MoviesResult::InvalidOrderBy => "INVALID_ORDER_BY",
            MoviesResult::InvalidDirection => "INVALID_DIRECTION",
            MoviesResult::InvalidLimit => "INVALID_LIMIT",
            MoviesResult::InvalidPage => "INVALID_PAGE",
            MoviesResult::MoviesFoundWithinSearch => "MOVIES_FOUND_WITHIN_SEARCH",
            MoviesResult::NoMoviesFoundWithinSearch => "NO_MOVIES_FOUND_WITHIN_SEARCH",
            MoviesResult::MovieWithIdFound => "MOVIE_WITH_ID_FOUND",
            MoviesResult::NoMovieWithIdFound => "NO_MOVIE_WITH_ID_FOUND",
            MoviesResult::MoviesWithPersonIdFound => "MOVIES_WITH_PERSON_ID_FOUND",
            MoviesResult::NoMoviesWithPersonIdFound => "NO_MOVIES_WITH_PERSON_ID_FOUND",
            MoviesResult::PersonsFoundWithinSearch => "PERSONS_FOUND_WITHIN_SEARCH",
            MoviesResult::NoPersonsFoundWithinSearch => "NO_PERSONS_FOUND_WITHIN_SEARCH",
            MoviesResult::PersonWithIdFound => "PERSON_WITH_ID_FOUND",
            MoviesResult::NoPersonWithIdFound => "NO_PERSON_WITH_ID_FOUND",
        }
    }

    /// Human-readable message sent alongside the code.
    pub fn message(self) -> &'static str {
        match self {
            MoviesResult::InvalidOrderBy => "Invalid orderBy value",
            MoviesResult::InvalidDirection => "Invalid direction value",
            MoviesResult::InvalidLimit => "Invalid limit value",
            MoviesResult::InvalidPage => "Invalid page value",
            MoviesResult::MoviesFoundWithinSearch => "Movies with the given search parameters found",
            MoviesResult::NoMoviesFoundWithinSearch => {
                "No movies found with the given search parameters"
            }
            MoviesResult::MovieWithIdFound => "Movie with the given id found",
            MoviesResult::NoMovieWithIdFound => "No movie found with the given id",
            MoviesResult::MoviesWithPersonIdFound => "Movies with the given person id found",
            MoviesResult::NoMoviesWithPersonIdFound => "No movies found with the given person id",
            MoviesResult::PersonsFoundWithinSearch => {
                "Persons with the given search parameters found"
            }
            MoviesResult::NoPersonsFoundWithinSearch => {
                "No persons found with the given search parameters"
            }
            MoviesResult::PersonWithIdFound => "Person with the given id found",
            MoviesResult::NoPersonWithIdFound => "No person found with the given id",
        }
    }

    pub fn outcome(self) -> Outcome {
        match self {
            MoviesResult::InvalidOrderBy
            | MoviesResult::InvalidDirection
            | MoviesResult::InvalidLimit
            | MoviesResult::InvalidPage => Outcome::InvalidParameter,
            MoviesResult::NoMoviesFoundWithinSearch
            | MoviesResult::NoMovieWithIdFound
            | MoviesResult::NoMoviesWithPersonIdFound
            | MoviesResult::NoPersonsFoundWithinSearch
            | MoviesResult::NoPersonWithIdFound => Outcome::NotFound,
            MoviesResult::MoviesFoundWithinSearch
            | MoviesResult::MovieWithIdFound
            | MoviesResult::MoviesWithPersonIdFound
            | MoviesResult::PersonsFoundWithinSearch
            | MoviesResult::PersonWithIdFound => Outcome::Success,
        }
    }

    pub fn http_status(self) -> u16 {
        self.outcome().http_status()
    }

    /// Wrap a failure entry into the matching [`CoreError`] variant.
    ///
    /// Success entries are not errors; wrapping one is a programming mistake
    /// and surfaces as [`CoreError::Internal`].
    pub fn into_error(self) -> CoreError {
        match self.outcome() {
            Outcome::InvalidParameter => CoreError::InvalidParameter(self),
            Outcome::NotFound => CoreError::NotFound(self),
            Outcome::Success => {
                CoreError::Internal(format!("{} is not a failure code", self.name()))
            }
        }
    }
}

impl fmt::Display for MoviesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

// ---------------------------------------------------------------------------
// Absent-row mapping
// ---------------------------------------------------------------------------

/// Turn an absent single-row lookup into the given not-found code.
pub fn require_row<T>(row: Option<T>, missing: MoviesResult) -> Result<T, CoreError> {
    row.ok_or_else(|| missing.into_error())
}

/// Turn an empty result set into the given not-found code.
///
/// Search endpoints treat "no rows" as a domain outcome rather than an
/// empty success.
pub fn require_rows<T>(rows: Vec<T>, missing: MoviesResult) -> Result<Vec<T>, CoreError> {
    if rows.is_empty() {
        Err(missing.into_error())
    } else {
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn codes_and_names_are_unique() {
        let codes: HashSet<u16> = MoviesResult::ALL.iter().map(|r| r.code()).collect();
        let names: HashSet<&str> = MoviesResult::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(codes.len(), MoviesResult::ALL.len());
        assert_eq!(names.len(), MoviesResult::ALL.len());
    }

    #[test]
    fn failures_are_client_errors() {
        for result in MoviesResult::ALL {
            let status = result.http_status();
            match result.outcome() {
                Outcome::Success => assert_eq!(status, 200, "{result}"),
                Outcome::InvalidParameter => assert_eq!(status, 400, "{result}"),
                Outcome::NotFound => assert_eq!(status, 404, "{result}"),
            }
            assert!(status < 500, "{result} must never map to a server error");
        }
    }

    #[test]
    fn invalid_parameter_codes() {
        for result in [
            MoviesResult::InvalidOrderBy,
            MoviesResult::InvalidDirection,
            MoviesResult::InvalidLimit,
            MoviesResult::InvalidPage,
        ] {
            assert_eq!(result.outcome(), Outcome::InvalidParameter);
            assert_matches!(result.into_error(), CoreError::InvalidParameter(r) if r == result);
        }
    }

    #[test]
    fn not_found_codes_wrap_as_not_found() {
        assert_matches!(
            MoviesResult::NoPersonWithIdFound.into_error(),
            CoreError::NotFound(MoviesResult::NoPersonWithIdFound)
        );
    }

    #[test]
    fn success_code_is_not_an_error() {
        assert_matches!(
            MoviesResult::MovieWithIdFound.into_error(),
            CoreError::Internal(_)
        );
    }

    #[test]
    fn require_row_maps_absent_to_not_found() {
        let found = require_row(Some(7), MoviesResult::NoMovieWithIdFound).unwrap();
        assert_eq!(found, 7);

        let err = require_row::<i32>(None, MoviesResult::NoMovieWithIdFound).unwrap_err();
        assert_matches!(err, CoreError::NotFound(MoviesResult::NoMovieWithIdFound));
        assert_eq!(err.result(), Some(MoviesResult::NoMovieWithIdFound));
    }

    #[test]
    fn require_rows_maps_empty_to_not_found() {
        let rows = require_rows(vec![1, 2], MoviesResult::NoMoviesFoundWithinSearch).unwrap();
        assert_eq!(rows, vec![1, 2]);

        let err =
            require_rows::<i32>(Vec::new(), MoviesResult::NoMoviesFoundWithinSearch).unwrap_err();
        assert_matches!(err, CoreError::NotFound(MoviesResult::NoMoviesFoundWithinSearch));
    }

    #[test]
    fn display_includes_name_and_code() {
        assert_eq!(
            MoviesResult::InvalidLimit.to_string(),
            "INVALID_LIMIT (2002)"
        );
    }
}
