/// Error handling for the author store
///
/// This module provides the single error type returned by every fallible
/// operation in the crate. Validation failures are classified by what went
/// wrong with the input; store failures wrap the underlying driver error
/// without losing the original cause.
///
/// # Example
///
/// ```
/// use author_store::error::AuthorError;
///
/// let err = AuthorError::OutOfRange("author email must be at most 128 bytes".to_string());
/// assert_eq!(err.to_string(), "out of range: author email must be at most 128 bytes");
/// ```

use thiserror::Error;

/// Unified error type for validation and persistence failures
#[derive(Debug, Error)]
pub enum AuthorError {
    /// Input was empty, insecure, or otherwise malformed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input length or format fell outside the documented bounds
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Input was the wrong kind of value (e.g. a byte form of the wrong width)
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// The backing store failed: connectivity loss or a constraint violation.
    ///
    /// The original driver error is preserved as the source.
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl AuthorError {
    /// Returns true if this is a store error caused by a unique-key
    /// constraint violation (duplicate email or username).
    ///
    /// # Example
    ///
    /// ```
    /// use author_store::error::AuthorError;
    ///
    /// let err = AuthorError::InvalidArgument("author username is empty".to_string());
    /// assert!(!err.is_unique_violation());
    /// ```
    pub fn is_unique_violation(&self) -> bool {
        match self {
            AuthorError::Store(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }
}
