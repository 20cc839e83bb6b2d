//! Error types for Matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Matriz operations.
///
/// The structure classifier raises `DimensionMismatch` synchronously whenever
/// a square-only predicate is invoked on a non-square matrix; constructors
/// raise it when the supplied data does not fit the requested shape.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "square matrix".to_string(),
///     actual: "2x3".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrizError {
    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for MatrizError {}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
