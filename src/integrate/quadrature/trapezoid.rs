//! Trapezoidal rule for numerical integration.
//!
//! The trapezoidal rule approximates the integral by summing trapezoid areas
//! between consecutive samples. It has O(h²) accuracy for smooth functions.
//!
//! Segments are summed left to right by ascending index, so identical inputs
//! always produce identical results.

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::quadrature::samples::{MIN_SAMPLES, SampleOrdering, validate_samples};

/// Options for trapezoidal integration of sampled data.
#[derive(Debug, Clone, Default)]
pub struct TrapezoidOptions {
    /// Ordering required of the abscissas (default: non-decreasing)
    pub ordering: SampleOrdering,
}

impl TrapezoidOptions {
    /// Options that reject repeated abscissas.
    pub fn strict() -> Self {
        Self {
            ordering: SampleOrdering::StrictlyIncreasing,
        }
    }
}

/// Area of the trapezoid between `(x0, y0)` and `(x1, y1)`.
#[inline]
fn segment_area(x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    0.5 * (x1 - x0) * (y0 + y1)
}

/// Integrate using the composite trapezoidal rule.
///
/// Computes the definite integral of `y` over the span of `x`. This is
/// suitable for sampled data where you have discrete (x, y) pairs.
///
/// Repeated abscissas are allowed and form zero-width segments that add
/// nothing to the result. NaN and infinite values are not special-cased and
/// propagate into the result.
///
/// # Arguments
///
/// * `x` - Sample points, non-decreasing
/// * `y` - Function values at sample points (must be same length as `x`)
///
/// # Errors
///
/// Checked in this order, before any arithmetic:
/// - [`IntegrateError::LengthMismatch`] if `x` and `y` differ in length
/// - [`IntegrateError::InputTooSmall`] if there are fewer than 2 points
/// - [`IntegrateError::NotSorted`] if any `x[i] > x[i + 1]`
///
/// # Example
///
/// ```
/// use quadrature::common::span;
/// use quadrature::integrate::trapezoid;
///
/// // Area under 1 / (1 + x^2) on [0, 1] is pi / 4
/// let x = span(401, 0.0, 1.0).unwrap();
/// let y: Vec<f64> = x.iter().map(|&xi| 1.0 / (1.0 + xi * xi)).collect();
///
/// let area = trapezoid(&x, &y).unwrap();
/// assert!((area - std::f64::consts::FRAC_PI_4).abs() < 1e-5);
/// ```
pub fn trapezoid(x: &[f64], y: &[f64]) -> IntegrateResult<f64> {
    trapezoid_with(x, y, &TrapezoidOptions::default())
}

/// Integrate using the composite trapezoidal rule with explicit options.
///
/// Behaves like [`trapezoid`], validating `x` against `options.ordering`.
///
/// # Example
///
/// ```
/// use quadrature::integrate::{IntegrateError, TrapezoidOptions, trapezoid_with};
///
/// let x = [0.0, 1.0, 1.0, 2.0];
/// let y = [1.0, 1.0, 1.0, 1.0];
///
/// assert_eq!(trapezoid_with(&x, &y, &TrapezoidOptions::default()), Ok(2.0));
/// assert_eq!(
///     trapezoid_with(&x, &y, &TrapezoidOptions::strict()),
///     Err(IntegrateError::NotSorted { index: 1 })
/// );
/// ```
pub fn trapezoid_with(x: &[f64], y: &[f64], options: &TrapezoidOptions) -> IntegrateResult<f64> {
    validate_samples(x, y, options.ordering)?;

    let mut integral = 0.0;
    for i in 1..x.len() {
        integral += segment_area(x[i - 1], x[i], y[i - 1], y[i]);
    }

    Ok(integral)
}

/// Integrate using the trapezoidal rule with uniform spacing.
///
/// A convenience function when sample points are uniformly spaced.
///
/// # Arguments
///
/// * `y` - Function values at sample points
/// * `dx` - Spacing between consecutive sample points
///
/// # Errors
///
/// - [`IntegrateError::InputTooSmall`] if `y` has fewer than 2 points
/// - [`IntegrateError::NotSorted`] if `dx` is negative
///
/// # Example
///
/// ```
/// use quadrature::integrate::trapezoid_uniform;
///
/// // Samples of e^x taken every 0.125 on [0, 2]
/// let y: Vec<f64> = (0..17).map(|i| (0.125 * i as f64).exp()).collect();
///
/// let area = trapezoid_uniform(&y, 0.125).unwrap();
/// assert!((area - (2.0_f64.exp() - 1.0)).abs() < 0.02);
///
/// // A zero step collapses every segment.
/// assert_eq!(trapezoid_uniform(&y, 0.0).unwrap(), 0.0);
/// ```
pub fn trapezoid_uniform(y: &[f64], dx: f64) -> IntegrateResult<f64> {
    let n = y.len();

    if n < MIN_SAMPLES {
        return Err(IntegrateError::InputTooSmall { len: n });
    }

    if dx < 0.0 {
        return Err(IntegrateError::NotSorted { index: 0 });
    }

    // dx * (y[0]/2 + y[1] + ... + y[n-2] + y[n-1]/2)
    let mut sum = 0.5 * (y[0] + y[n - 1]);
    for yi in &y[1..n - 1] {
        sum += *yi;
    }

    Ok(dx * sum)
}

/// Compute the cumulative integral using the trapezoidal rule.
///
/// Element `i` of the result is the integral from `x[0]` to `x[i]`, so the
/// first element is always 0 and the last equals [`trapezoid`] on the same
/// input.
///
/// # Errors
///
/// Same as [`trapezoid`].
///
/// # Example
///
/// ```
/// use quadrature::integrate::cumulative_trapezoid;
///
/// // Distance covered under a piecewise-linear speed profile
/// let t = [0.0, 2.0, 2.0, 5.0];
/// let v = [0.0, 4.0, 4.0, 4.0];
///
/// let distance = cumulative_trapezoid(&t, &v).unwrap();
/// assert_eq!(distance, vec![0.0, 4.0, 4.0, 16.0]);
/// ```
pub fn cumulative_trapezoid(x: &[f64], y: &[f64]) -> IntegrateResult<Vec<f64>> {
    validate_samples(x, y, SampleOrdering::NonDecreasing)?;

    let mut result = Vec::with_capacity(x.len());
    result.push(0.0);

    let mut cumsum = 0.0;
    for i in 1..x.len() {
        cumsum += segment_area(x[i - 1], x[i], y[i - 1], y[i]);
        result.push(cumsum);
    }

    Ok(result)
}
