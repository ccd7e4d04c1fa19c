use crate::math::angle::{normalize_radian, normalize_radian_tan};
use crate::math::polynomial::{even_polynomial, odd_polynomial};

// Degree-12 even fit of cos around zero, valid over the whole reduced
// interval (-π, π].
const COS_COEFS: [f64; 7] = [
    2.087675698786809897921009032120143e-9,
    -2.755731922398589065255731922398589e-7,
    2.480158730158730158730158730158715e-5,
    -0.00138888888888888888888888888889,
    0.04166666666666666666666666666667,
    -0.5,
    1.0,
];

// Degree-11 odd fit of sin around zero.
const SIN_COEFS: [f64; 6] = [
    -2.50521083854417187750521083854417e-8,
    2.75573192239858906525573192239859e-6,
    -0.00019841269841269841269841269841,
    0.00833333333333333333333333333333,
    -0.16666666666666666666666666666667,
    1.0,
];

// Degree-7 odd fit of tan, trusted only on [-0.8, 0.8] of the reduced
// angle; the x⁵ and x⁷ coefficients are adjusted to hold the error
// down where the true tangent starts to steepen.
const TAN_COEFS: [f64; 4] = [
    0.11460317460317460317460317460317,
    0.10666666666666666666666666666667,
    0.33333333333333333333333333333333,
    1.0,
];

/// Cosine. Total: angle reduction folds any finite input into the
/// fitted interval.
pub fn cos(x: f64) -> f64 {
    even_polynomial(&COS_COEFS, normalize_radian(x))
}

/// Sine. Total, like [`cos`].
pub fn sin(x: f64) -> f64 {
    odd_polynomial(&SIN_COEFS, normalize_radian(x))
}

/// Tangent. Polynomial where the reduced angle lands in `[-0.8, 0.8]`,
/// exact implementation otherwise (the fit degrades quickly toward the
/// poles at `±π/2`).
pub fn tan(x: f64) -> f64 {
    let reduced = normalize_radian_tan(x);
    if (-0.8..=0.8).contains(&reduced) {
        odd_polynomial(&TAN_COEFS, reduced)
    } else {
        x.tan()
    }
}
