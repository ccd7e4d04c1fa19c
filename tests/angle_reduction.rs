//! Range and periodicity tests for the angle reduction helpers.

use std::f64::consts::{FRAC_PI_2, PI};

use approxcalc::math::angle::{normalize_radian, normalize_radian_tan};
use approxcalc::math::approximation::trigonometric;

const TWO_PI: f64 = 2.0 * PI;

#[test]
fn normalize_radian_lands_in_the_canonical_interval() {
    for &x in &[
        0.0, 1.0, -1.0, 3.0, -3.0, 7.0, -7.0, 100.0, -100.0, 12345.6, -9876.5,
    ] {
        let reduced = normalize_radian(x);
        assert!(
            -PI < reduced && reduced <= PI,
            "normalize_radian({}) = {} outside (-π, π]",
            x,
            reduced
        );
    }
}

#[test]
fn normalize_radian_is_identity_inside_the_interval() {
    for &x in &[0.0, 0.5, -0.5, 3.0, -3.0] {
        assert_eq!(normalize_radian(x), x);
    }
}

#[test]
fn normalize_radian_shifts_by_whole_periods() {
    let reduced = normalize_radian(7.0);
    assert!((reduced - (7.0 - TWO_PI)).abs() < 1e-12);

    let reduced = normalize_radian(-1.0);
    assert!((reduced - (-1.0)).abs() < 1e-12);
}

#[test]
fn normalize_radian_tan_lands_in_the_half_interval() {
    for &x in &[0.0, 1.0, -1.0, 2.0, -2.0, 50.0, -50.0, 1234.5] {
        let reduced = normalize_radian_tan(x);
        assert!(
            -FRAC_PI_2 < reduced && reduced <= FRAC_PI_2,
            "normalize_radian_tan({}) = {} outside (-π/2, π/2]",
            x,
            reduced
        );
    }
}

#[test]
fn cos_is_periodic_through_reduction() {
    for &x in &[0.0, 0.3, -0.7, 1.5, 2.9, -2.2] {
        let base = trigonometric::cos(x);
        for k in -3i32..=5 {
            let shifted = trigonometric::cos(x + TWO_PI * f64::from(k));
            assert!(
                (base - shifted).abs() < 1e-9,
                "cos({} + 2π·{}) = {} drifted from {}",
                x,
                k,
                shifted,
                base
            );
        }
    }
}

#[test]
fn sin_is_periodic_through_reduction() {
    for &x in &[0.0, 0.3, -0.7, 1.5, -2.2] {
        let base = trigonometric::sin(x);
        for k in -3i32..=5 {
            let shifted = trigonometric::sin(x + TWO_PI * f64::from(k));
            assert!((base - shifted).abs() < 1e-9);
        }
    }
}

#[test]
fn tan_is_periodic_with_period_pi() {
    for &x in &[0.0, 0.3, -0.5, 0.7] {
        let base = trigonometric::tan(x);
        for k in -2i32..=3 {
            let shifted = trigonometric::tan(x + PI * f64::from(k));
            assert!(
                (base - shifted).abs() < 1e-6,
                "tan({} + π·{}) = {} drifted from {}",
                x,
                k,
                shifted,
                base
            );
        }
    }
}
