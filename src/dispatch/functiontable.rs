use crate::approximationerror::{ApproximationError, Result};
use crate::math::approximation::{exponential, hyperbolic, inverse, trigonometric};

use super::functionid::FunctionId;

/// A scalar function defined for every finite real input.
pub type TotalFunction = fn(f64) -> f64;

/// A scalar function with a restricted valid domain.
pub type FallibleFunction = fn(f64) -> Result<f64>;

/// One binding per function name: an explicit strategy object in place
/// of the reference implementation's patched global namespace. Two
/// canonical tables exist, [`FunctionTable::approximate`] and
/// [`FunctionTable::exact`]; callers may also assemble mixed tables.
#[derive(Clone, Copy)]
pub struct FunctionTable {
    pub exp: TotalFunction,
    pub exp2: TotalFunction,
    pub expm1: TotalFunction,
    pub sin: TotalFunction,
    pub sinh: TotalFunction,
    pub tan: TotalFunction,
    pub tanh: TotalFunction,
    pub cos: TotalFunction,
    pub cosh: TotalFunction,
    pub arcsin: FallibleFunction,
    pub arccos: FallibleFunction,
    pub arcsinh: TotalFunction,
}

// Both tables check the [-1, 1] domain of arcsin/arccos, so the error
// surface does not depend on which strategy is active.

fn exact_arcsin(x: f64) -> Result<f64> {
    if (-1.0..=1.0).contains(&x) {
        Ok(x.asin())
    } else {
        Err(ApproximationError::Domain {
            function: "arcsin",
            input: x,
        })
    }
}

fn exact_arccos(x: f64) -> Result<f64> {
    if (-1.0..=1.0).contains(&x) {
        Ok(x.acos())
    } else {
        Err(ApproximationError::Domain {
            function: "arccos",
            input: x,
        })
    }
}

impl FunctionTable {
    /// Bindings to the piecewise approximation models.
    pub fn approximate() -> FunctionTable {
        FunctionTable {
            exp: exponential::exp,
            exp2: exponential::exp2,
            expm1: exponential::expm1,
            sin: trigonometric::sin,
            sinh: hyperbolic::sinh,
            tan: trigonometric::tan,
            tanh: hyperbolic::tanh,
            cos: trigonometric::cos,
            cosh: hyperbolic::cosh,
            arcsin: inverse::arcsin,
            arccos: inverse::arccos,
            arcsinh: inverse::arcsinh,
        }
    }

    /// Bindings to the exact implementations of the host numeric
    /// stack (the `f64` inherent methods).
    pub fn exact() -> FunctionTable {
        FunctionTable {
            exp: f64::exp,
            exp2: f64::exp2,
            expm1: f64::exp_m1,
            sin: f64::sin,
            sinh: f64::sinh,
            tan: f64::tan,
            tanh: f64::tanh,
            cos: f64::cos,
            cosh: f64::cosh,
            arcsin: exact_arcsin,
            arccos: exact_arccos,
            arcsinh: f64::asinh,
        }
    }

    /// Uniform dispatch by function identifier.
    ///
    /// # Errors
    /// [`ApproximationError::Domain`] from `arcsin`/`arccos`; every
    /// other function is total.
    pub fn evaluate(&self, id: FunctionId, x: f64) -> Result<f64> {
        match id {
            FunctionId::Exp => Ok((self.exp)(x)),
            FunctionId::Exp2 => Ok((self.exp2)(x)),
            FunctionId::Expm1 => Ok((self.expm1)(x)),
            FunctionId::Sin => Ok((self.sin)(x)),
            FunctionId::Sinh => Ok((self.sinh)(x)),
            FunctionId::Tan => Ok((self.tan)(x)),
            FunctionId::Tanh => Ok((self.tanh)(x)),
            FunctionId::Cos => Ok((self.cos)(x)),
            FunctionId::Cosh => Ok((self.cosh)(x)),
            FunctionId::Arcsin => (self.arcsin)(x),
            FunctionId::Arccos => (self.arccos)(x),
            FunctionId::Arcsinh => Ok((self.arcsinh)(x)),
        }
    }
}
