use std::f64::consts::FRAC_PI_2;

use crate::approximationerror::{ApproximationError, Result};
use crate::math::polynomial::odd_polynomial;

// Degree-13 odd fit shared by arcsin and arccos on the interior of
// [-0.76, 0.76]. The x¹¹ and x¹³ coefficients sit above their Taylor
// values (63/2816 and 231/13312) to compensate the series' slow
// convergence toward the interval edge.
const ARCSIN_COEFS: [f64; 7] = [
    0.02208533653846153846153846153846,
    0.02734375,
    0.03038194444444444444444444444444,
    0.04464285714285714285714285714286,
    0.075,
    0.16666666666666666666666666666667,
    1.0,
];

// Degree-11 odd fit of arcsinh on [-1, 1].
const ARCSINH_COEFS: [f64; 6] = [
    -0.01811079545454545454545454545455,
    0.03602430555555555555555555555556,
    -0.04553571428571428571428571428571,
    0.075,
    -0.16666666666666666666666666666667,
    1.0,
];

// Osculating-circle model for the shoulder intervals [0.76, 1] and
// [-1, -0.76]: the circle (x + 0.28)² + (y - 1.61)² = 1.64 matches
// arcsin's curvature where its derivative blows up and the polynomial
// fit degrades.
const SHOULDER_CENTER_X: f64 = 0.28;
const SHOULDER_CENTER_Y: f64 = 1.61;
const SHOULDER_RADIUS_SQ: f64 = 1.64;

fn positive_shoulder(x: f64) -> f64 {
    SHOULDER_CENTER_Y - (SHOULDER_RADIUS_SQ - (x + SHOULDER_CENTER_X).powi(2)).sqrt()
}

fn negative_shoulder(x: f64) -> f64 {
    -SHOULDER_CENTER_Y + (SHOULDER_RADIUS_SQ - (x - SHOULDER_CENTER_X).powi(2)).sqrt()
}

/// Inverse sine. Odd polynomial on `[-0.76, 0.76)`, circular-arc
/// correction on the shoulders up to `±1`.
///
/// # Errors
/// [`ApproximationError::Domain`] when the input lies outside `[-1, 1]`.
pub fn arcsin(x: f64) -> Result<f64> {
    if (-0.76..0.76).contains(&x) {
        Ok(odd_polynomial(&ARCSIN_COEFS, x))
    } else if (0.76..=1.0).contains(&x) {
        Ok(positive_shoulder(x))
    } else if (-1.0..=-0.76).contains(&x) {
        Ok(negative_shoulder(x))
    } else {
        Err(ApproximationError::Domain {
            function: "arcsin",
            input: x,
        })
    }
}

/// Inverse cosine, as `π/2` minus the [`arcsin`] rules; the two
/// functions stay complementary on every sub-interval.
///
/// # Errors
/// [`ApproximationError::Domain`] when the input lies outside `[-1, 1]`.
pub fn arccos(x: f64) -> Result<f64> {
    if -0.76 < x && x < 0.76 {
        Ok(FRAC_PI_2 - odd_polynomial(&ARCSIN_COEFS, x))
    } else if (0.76..=1.0).contains(&x) {
        Ok(FRAC_PI_2 - positive_shoulder(x))
    } else if (-1.0..=-0.76).contains(&x) {
        Ok(FRAC_PI_2 - negative_shoulder(x))
    } else {
        Err(ApproximationError::Domain {
            function: "arccos",
            input: x,
        })
    }
}

/// Inverse hyperbolic sine. Odd polynomial on `[-1, 1]`, the identity
/// `ln(x + sqrt(x² + 1))` outside. Total over finite reals.
pub fn arcsinh(x: f64) -> f64 {
    if (-1.0..=1.0).contains(&x) {
        odd_polynomial(&ARCSINH_COEFS, x)
    } else {
        (x + (x * x + 1.0).sqrt()).ln()
    }
}
