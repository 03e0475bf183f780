//! Evenly spaced sample grids.

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::quadrature::MIN_SAMPLES;

/// Return `n` evenly spaced points from `lo` to `hi`.
///
/// Point `i` is `lo + step * i` with `step = (hi - lo) / (n - 1)`, except the
/// last point, which is set to `hi` so both endpoints are exact.
///
/// # Errors
///
/// Returns [`IntegrateError::InputTooSmall`] if `n < 2`.
///
/// # Example
///
/// ```
/// use quadrature::common::span;
///
/// let x = span(5, 0.0, 1.0).unwrap();
/// assert_eq!(x, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn span(n: usize, lo: f64, hi: f64) -> IntegrateResult<Vec<f64>> {
    if n < MIN_SAMPLES {
        return Err(IntegrateError::InputTooSmall { len: n });
    }

    let step = (hi - lo) / (n - 1) as f64;
    let mut points: Vec<f64> = (0..n).map(|i| lo + step * i as f64).collect();
    points[n - 1] = hi;
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_span_endpoints() {
        let x = span(1001, -1.0, 1.0).unwrap();
        assert_eq!(x.len(), 1001);
        assert_eq!(x[0], -1.0);
        assert_eq!(x[1000], 1.0);
        assert_abs_diff_eq!(x[500], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_span_last_point_is_exact() {
        // lo + step * (n - 1) rounds to just below 1.0 on this grid.
        let n = 1_000_000;
        let x = span(n, 0.0, 1.0).unwrap();
        assert_eq!(x[0], 0.0);
        assert_eq!(x[n - 1], 1.0);
        assert!(x[n - 2] < x[n - 1]);

        for (lo, hi) in [(-1.0, 1.0), (0.0, PI), (0.0, 2.0 * PI), (0.0, 0.5 * PI)] {
            let x = span(n, lo, hi).unwrap();
            assert_eq!(x[0], lo);
            assert_eq!(x[n - 1], hi);
        }
    }

    #[test]
    fn test_span_sorted() {
        let x = span(10, 0.0, PI).unwrap();
        assert!(x.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_span_degenerate_range() {
        let x = span(3, 2.0, 2.0).unwrap();
        assert_eq!(x, vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_span_too_small() {
        assert_eq!(span(1, 0.0, 1.0), Err(IntegrateError::InputTooSmall { len: 1 }));
        assert_eq!(span(0, 0.0, 1.0), Err(IntegrateError::InputTooSmall { len: 0 }));
    }
}
