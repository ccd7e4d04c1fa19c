use crate::math::polynomial::{even_polynomial, odd_polynomial};

// Degree-6 even fit of cosh on [-1, 1]. The p³ coefficient is nudged
// above 1/6! to absorb the truncated tail of the series.
const COSH_COEFS: [f64; 4] = [
    0.00138988888888888888888888888889,
    0.04166666666666666666666666666667,
    0.5,
    1.0,
];

// Degree-5 odd fit of sinh on [-1, 1].
const SINH_COEFS: [f64; 3] = [
    0.00833333333333333333333333333333,
    0.16666666666666666666666666666667,
    1.0,
];

// Degree-7 odd fit of tanh on [-1, 1].
const TANH_COEFS: [f64; 4] = [
    -0.03809523809523809523809523809524,
    0.13333333333333333333333333333333,
    -0.33333333333333333333333333333333,
    1.0,
];

/// Hyperbolic cosine. Polynomial on `[-1, 1]`, exact outside.
pub fn cosh(x: f64) -> f64 {
    if (-1.0..=1.0).contains(&x) {
        even_polynomial(&COSH_COEFS, x)
    } else {
        x.cosh()
    }
}

/// Hyperbolic sine. Polynomial on `[-1, 1]`, exact outside.
pub fn sinh(x: f64) -> f64 {
    if (-1.0..=1.0).contains(&x) {
        odd_polynomial(&SINH_COEFS, x)
    } else {
        x.sinh()
    }
}

/// Hyperbolic tangent. Polynomial on `[-1, 1]`, exact outside.
pub fn tanh(x: f64) -> f64 {
    if (-1.0..=1.0).contains(&x) {
        odd_polynomial(&TANH_COEFS, x)
    } else {
        x.tanh()
    }
}
