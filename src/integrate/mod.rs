//! Numerical integration of sampled data.
//!
//! # Quadrature Methods
//!
//! - [`trapezoid`] - Composite trapezoidal rule over (x, y) samples
//! - [`trapezoid_with`] - Trapezoidal rule with explicit [`TrapezoidOptions`]
//! - [`trapezoid_uniform`] - Trapezoidal rule for uniformly spaced samples
//! - [`cumulative_trapezoid`] - Running trapezoidal integral
//!
//! # Input Contract
//!
//! Sampled-data routines require `x` and `y` of equal length, at least two
//! samples, and `x` in non-decreasing order. Violations are reported as
//! [`IntegrateError`] before any arithmetic is done:
//!
//! | Error | Message |
//! |-------|---------|
//! | [`IntegrateError::LengthMismatch`] | `integrate: slice length mismatch` |
//! | [`IntegrateError::InputTooSmall`] | `integrate: input data too small` |
//! | [`IntegrateError::NotSorted`] | `integrate: input must be sorted` |
//!
//! # Example
//!
//! ```
//! use quadrature::integrate::{IntegrateError, trapezoid};
//!
//! let x = [0.0, 0.5, 1.0];
//! let y = [0.0, 0.25, 1.0]; // y = x^2
//! let result = trapezoid(&x, &y)?;
//! assert!((result - 0.375).abs() < 1e-12);
//! # Ok::<(), IntegrateError>(())
//! ```

pub mod error;
pub mod quadrature;

// Re-export error types
pub use error::{IntegrateError, IntegrateResult};

// Re-export quadrature functions
pub use quadrature::{
    MIN_SAMPLES, SampleOrdering, TrapezoidOptions, cumulative_trapezoid, trapezoid,
    trapezoid_uniform, trapezoid_with, validate_samples,
};
