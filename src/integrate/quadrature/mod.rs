//! Numerical quadrature over sampled data.
//!
//! This module computes definite integrals from discrete (x, y) samples.
//!
//! # Available Methods
//!
//! | Method | Use Case | Accuracy |
//! |--------|----------|----------|
//! | [`trapezoid`] | Sampled data, any sorted spacing | O(h²) |
//! | [`trapezoid_with`] | As above, with [`TrapezoidOptions`] | O(h²) |
//! | [`trapezoid_uniform`] | Sampled data, uniform spacing | O(h²) |
//! | [`cumulative_trapezoid`] | Running integral of sampled data | O(h²) |

mod samples;
mod trapezoid;

pub use samples::{MIN_SAMPLES, SampleOrdering, validate_samples};
pub use trapezoid::{
    TrapezoidOptions, cumulative_trapezoid, trapezoid, trapezoid_uniform, trapezoid_with,
};
