/// Nested (Horner) evaluation of a polynomial whose coefficients are
/// given from the highest degree down to the constant term.
pub fn horner(coefs: &[f64], x: f64) -> f64 {
    let mut result = coefs[0];
    for &beta in &coefs[1..] {
        result = f64::mul_add(result, x, beta);
    }
    result
}

/// Odd polynomial `x * P(x²)`, with `coefs` the coefficients of `P`.
pub fn odd_polynomial(coefs: &[f64], x: f64) -> f64 {
    x * horner(coefs, x * x)
}

/// Even polynomial `P(x²)`.
pub fn even_polynomial(coefs: &[f64], x: f64) -> f64 {
    horner(coefs, x * x)
}
