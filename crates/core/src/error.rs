use crate::results::MoviesResult;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A request parameter failed its allow-list. Raised before any query runs.
    #[error("Invalid parameter: {}", .0.message())]
    InvalidParameter(MoviesResult),

    /// No row matched the search or the requested id.
    #[error("Not found: {}", .0.message())]
    NotFound(MoviesResult),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// The catalog entry this error carries, if any.
    pub fn result(&self) -> Option<MoviesResult> {
        match self {
            CoreError::InvalidParameter(result) | CoreError::NotFound(result) => Some(*result),
            CoreError::Unauthorized(_) | CoreError::Internal(_) => None,
        }
    }
}
