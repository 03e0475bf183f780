//! End-to-end checks of trapezoidal quadrature through the public API.

use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use quadrature::{IntegrateError, span, trapezoid};

const N: usize = 1_000_000;
const TOL: f64 = 1e-12;

fn integrate_fn(x: &[f64], f: impl Fn(f64) -> f64) -> f64 {
    let y: Vec<f64> = x.iter().map(|&xi| f(xi)).collect();
    trapezoid(x, &y).unwrap()
}

#[test]
fn test_literal_cases_unit_interval() {
    let x = span(N, 0.0, 1.0).unwrap();

    assert_abs_diff_eq!(integrate_fn(&x, |x| x), 0.5, epsilon = TOL);
    assert_abs_diff_eq!(integrate_fn(&x, |x| x + 10.0), 10.5, epsilon = TOL);
    assert_abs_diff_eq!(integrate_fn(&x, |x| 3.0 * x * x + 10.0), 11.0, epsilon = TOL);
    assert_abs_diff_eq!(
        integrate_fn(&x, f64::exp),
        1.7182818284591876,
        epsilon = TOL
    );
}

#[test]
fn test_literal_cases_odd_and_periodic() {
    let x = span(N, -1.0, 1.0).unwrap();
    assert_abs_diff_eq!(integrate_fn(&x, |x| x), 0.0, epsilon = TOL);

    let x = span(N, 0.0, PI).unwrap();
    assert_abs_diff_eq!(integrate_fn(&x, f64::cos), 0.0, epsilon = TOL);

    let x = span(N, 0.0, 2.0 * PI).unwrap();
    assert_abs_diff_eq!(integrate_fn(&x, f64::cos), 0.0, epsilon = TOL);
    assert_abs_diff_eq!(integrate_fn(&x, f64::sin), 0.0, epsilon = TOL);
}

#[test]
fn test_literal_cases_dense_sine() {
    let x = span(N * 10, 0.0, PI).unwrap();
    assert_abs_diff_eq!(integrate_fn(&x, f64::sin), 2.0, epsilon = TOL);

    let x = span(N * 10, 0.0, 0.5 * PI).unwrap();
    assert_abs_diff_eq!(integrate_fn(&x, f64::sin), 1.0, epsilon = TOL);
}

#[test]
fn test_error_handling() {
    let length_ten = span(10, -1.0, 1.0).unwrap();
    let length_one = [1.0];
    let unsorted = [2.0, 1.0];

    for (x, y, message) in [
        (
            &length_ten[..],
            &length_one[..],
            "integrate: slice length mismatch",
        ),
        (
            &length_one[..],
            &length_one[..],
            "integrate: input data too small",
        ),
        (&unsorted[..], &unsorted[..], "integrate: input must be sorted"),
    ] {
        let err = trapezoid(x, y).unwrap_err();
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn test_error_kinds() {
    let length_ten = span(10, -1.0, 1.0).unwrap();
    assert!(matches!(
        trapezoid(&length_ten, &[1.0]),
        Err(IntegrateError::LengthMismatch { x_len: 10, y_len: 1 })
    ));
    assert!(matches!(
        trapezoid(&[1.0], &[1.0]),
        Err(IntegrateError::InputTooSmall { len: 1 })
    ));
    assert!(matches!(
        trapezoid(&[2.0, 1.0], &[2.0, 1.0]),
        Err(IntegrateError::NotSorted { index: 0 })
    ));
}
