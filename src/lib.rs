//! quadrature - Numerical integration of sampled data
//!
//! quadrature computes definite integrals from discrete (x, y) samples using
//! the composite trapezoidal rule. Inputs are plain `f64` slices; every
//! routine is a pure function that either validates its input and returns a
//! value, or returns an [`IntegrateError`] without doing any arithmetic.
//!
//! # Modules
//!
//! - [`integrate`] - Trapezoidal quadrature and its error types
//! - [`common`] - Sample grid helpers
//!
//! # Example
//!
//! ```
//! use quadrature::{span, trapezoid};
//!
//! // Integrate sin(x) over [0, pi]
//! let x = span(10_001, 0.0, std::f64::consts::PI).unwrap();
//! let y: Vec<f64> = x.iter().map(|xi| xi.sin()).collect();
//!
//! let result = trapezoid(&x, &y).unwrap();
//! assert!((result - 2.0).abs() < 1e-7);
//! ```

pub mod common;
pub mod integrate;

// Re-export main types for convenience
pub use common::span;
pub use integrate::{
    IntegrateError, IntegrateResult, SampleOrdering, TrapezoidOptions, cumulative_trapezoid,
    trapezoid, trapezoid_uniform, trapezoid_with, validate_samples,
};
