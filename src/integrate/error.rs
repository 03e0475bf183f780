//! Error types for numerical integration operations.

use thiserror::Error;

/// Result type for integration operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur while integrating sampled data.
///
/// Every variant is a caller contract violation detected before any
/// arithmetic runs. The `Display` text of each variant is fixed; the fields
/// are carried for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntegrateError {
    /// Abscissas and ordinates have different lengths.
    #[error("integrate: slice length mismatch")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// Fewer than two samples were supplied.
    #[error("integrate: input data too small")]
    InputTooSmall { len: usize },

    /// Abscissas are out of order: `x[index] > x[index + 1]`, or a tie under
    /// strict ordering.
    #[error("integrate: input must be sorted")]
    NotSorted { index: usize },
}
