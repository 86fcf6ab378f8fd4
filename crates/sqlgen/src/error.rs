//! Error types for sqlgen

use thiserror::Error;

/// Result type alias for sqlgen operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types for statement formatting
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SqlError {
    /// A required input was missing or empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SqlError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
