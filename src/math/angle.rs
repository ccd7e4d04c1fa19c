use std::f64::consts::{FRAC_PI_2, PI};

const TWO_PI: f64 = 2.0 * PI;

/// Reduces an angle modulo `2π` into `(-π, π]`.
///
/// Pre-step for the sine and cosine models, whose polynomial fits hold
/// only near zero. Total over finite reals.
pub fn normalize_radian(x: f64) -> f64 {
    let mut normalized = x.rem_euclid(TWO_PI);
    if normalized > PI {
        normalized -= TWO_PI;
    }
    normalized
}

/// Reduces an angle modulo `π` into `(-π/2, π/2]`, exploiting the
/// smaller period of the tangent.
pub fn normalize_radian_tan(x: f64) -> f64 {
    let mut normalized = x.rem_euclid(PI);
    if normalized > FRAC_PI_2 {
        normalized -= PI;
    }
    normalized
}
