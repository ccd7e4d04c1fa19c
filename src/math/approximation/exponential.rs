use std::f64::consts::LN_2;

use crate::math::polynomial::horner;

// Degree-4 fit of e^x on [-1, 1]. The cubic coefficient is raised
// above its Taylor value (1/6) so the truncation error stays balanced
// across the interval instead of growing toward the endpoints.
const EXP_COEFS: [f64; 5] = [
    0.045454545454545454545454545455,
    0.168067226890756302521008403361,
    0.5,
    1.0,
    1.0,
];

/// `e^x`. Polynomial on `[-1, 1]`, exact implementation outside.
pub fn exp(x: f64) -> f64 {
    if (-1.0..=1.0).contains(&x) {
        horner(&EXP_COEFS, x)
    } else {
        x.exp()
    }
}

/// `2^x`, via `2^x = e^(x ln 2)`: the input is scaled by `ln 2` and
/// fed to the same polynomial as [`exp`].
pub fn exp2(x: f64) -> f64 {
    if (-1.0..=1.0).contains(&x) {
        horner(&EXP_COEFS, LN_2 * x)
    } else {
        x.exp2()
    }
}

/// `e^x - 1`. Same polynomial as [`exp`] minus one on the trusted
/// interval, exact implementation outside.
pub fn expm1(x: f64) -> f64 {
    if (-1.0..=1.0).contains(&x) {
        horner(&EXP_COEFS, x) - 1.0
    } else {
        x.exp_m1()
    }
}
