//! Error types shared by every selection operation.

use thiserror::Error;

/// Failure signal returned by the selection operations.
///
/// The two kinds are kept apart on purpose: `InvalidArgument` is a bad call,
/// `NotFound` is a well-formed query with nothing to return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The collection or the comparator was not supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The collection is empty, the rank is out of range, or no element qualifies.
    #[error("no such element: {0}")]
    NotFound(String),
}

impl Error {
    /// Builds an `InvalidArgument` error from a message.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Builds a `NotFound` error from a message.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Error::NotFound(msg.into())
    }

    /// Returns `true` for a missing collection or comparator.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Returns `true` when the query had nothing to return.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Result type for selection operations
pub type Result<T> = std::result::Result<T, Error>;
