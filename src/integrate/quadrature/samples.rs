//! Validation of sampled (x, y) data.
//!
//! All sampled-data quadrature routines share the same input contract. The
//! checks run in a fixed order so that input violating several conditions
//! always reports the same error:
//!
//! 1. `x` and `y` have the same length
//! 2. there are at least two samples
//! 3. `x` is ordered according to [`SampleOrdering`]

use std::cmp::Ordering;

use crate::integrate::error::{IntegrateError, IntegrateResult};

/// Minimum number of samples needed to form one segment.
pub const MIN_SAMPLES: usize = 2;

/// Ordering required of the abscissas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SampleOrdering {
    /// `x[i] <= x[i + 1]`. Repeated abscissas form zero-width segments.
    #[default]
    NonDecreasing,
    /// `x[i] < x[i + 1]`. Repeated abscissas are rejected.
    StrictlyIncreasing,
}

impl SampleOrdering {
    /// Whether `a` may be directly followed by `b`.
    ///
    /// Comparisons involving NaN are never treated as inversions.
    #[inline]
    pub fn admits(self, a: f64, b: f64) -> bool {
        match (self, a.partial_cmp(&b)) {
            (_, None | Some(Ordering::Less)) => true,
            (Self::NonDecreasing, Some(Ordering::Equal)) => true,
            _ => false,
        }
    }
}

/// Check that `x` and `y` form a valid sample set.
///
/// # Errors
///
/// - [`IntegrateError::LengthMismatch`] if the slices differ in length
/// - [`IntegrateError::InputTooSmall`] if there are fewer than two samples
/// - [`IntegrateError::NotSorted`] at the first adjacent pair of `x` that
///   `ordering` does not admit
///
/// # Example
///
/// ```
/// use quadrature::integrate::{IntegrateError, SampleOrdering, validate_samples};
///
/// let x = [0.0, 1.0, 1.0, 2.0];
/// let y = [1.0, 2.0, 3.0, 4.0];
/// assert!(validate_samples(&x, &y, SampleOrdering::NonDecreasing).is_ok());
/// assert_eq!(
///     validate_samples(&x, &y, SampleOrdering::StrictlyIncreasing),
///     Err(IntegrateError::NotSorted { index: 1 })
/// );
/// ```
pub fn validate_samples(x: &[f64], y: &[f64], ordering: SampleOrdering) -> IntegrateResult<()> {
    if x.len() != y.len() {
        return Err(IntegrateError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    if x.len() < MIN_SAMPLES {
        return Err(IntegrateError::InputTooSmall { len: x.len() });
    }

    match x.windows(2).position(|w| !ordering.admits(w[0], w[1])) {
        Some(index) => Err(IntegrateError::NotSorted { index }),
        None => Ok(()),
    }
}
