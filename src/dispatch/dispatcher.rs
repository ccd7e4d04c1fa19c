use nalgebra::allocator::Allocator;
use nalgebra::storage::Storage;
use nalgebra::{DefaultAllocator, Dim, Matrix, OMatrix};
use tracing::debug;

use crate::approximationerror::Result;
use crate::array::elementwise;
use crate::configuration::Configuration;

use super::functionid::FunctionId;
use super::functiontable::FunctionTable;

/// Routes the twelve transcendental function names to either the
/// approximation models or the exact implementations.
///
/// The exact bindings are captured at construction; [`Dispatcher::off`]
/// restores them bit-identically. A `Dispatcher` is a plain value with
/// no global state: callers own it and pass it to the code that needs
/// it, choosing the strategy explicitly instead of patching a shared
/// namespace.
pub struct Dispatcher {
    active: FunctionTable,
    exact: FunctionTable,
    approximate_mode: bool,
}

impl Dispatcher {
    /// Starts with the exact bindings active.
    pub fn new() -> Dispatcher {
        let exact = FunctionTable::exact();
        Dispatcher {
            active: exact,
            exact,
            approximate_mode: false,
        }
    }

    /// Like [`Dispatcher::new`], logging the configured environment
    /// label once at construction.
    pub fn with_configuration(configuration: &Configuration) -> Dispatcher {
        configuration.log_environment();
        Dispatcher::new()
    }

    /// Activates the approximation bindings.
    pub fn on(&mut self) {
        self.active = FunctionTable::approximate();
        self.approximate_mode = true;
        debug!("approximation bindings activated");
    }

    /// Restores the exact bindings captured at construction.
    pub fn off(&mut self) {
        self.active = self.exact;
        self.approximate_mode = false;
        debug!("exact bindings restored");
    }

    pub fn is_approximate(&self) -> bool {
        self.approximate_mode
    }

    /// Evaluates one function by identifier under the active strategy.
    ///
    /// # Errors
    /// Domain errors from `arcsin`/`arccos`.
    pub fn evaluate(&self, id: FunctionId, x: f64) -> Result<f64> {
        self.active.evaluate(id, x)
    }

    /// Element-wise [`Dispatcher::evaluate`] over a slice, fail-fast.
    ///
    /// # Errors
    /// The first failing element, with its index.
    pub fn evaluate_slice(&self, id: FunctionId, values: &[f64]) -> Result<Vec<f64>> {
        elementwise::try_map_slice(|x| self.active.evaluate(id, x), values)
    }

    /// Element-wise [`Dispatcher::evaluate`] over a `nalgebra` matrix
    /// or vector, shape preserved, fail-fast.
    ///
    /// # Errors
    /// The first failing element, with its column-major linear index.
    pub fn evaluate_matrix<R, C, S>(
        &self,
        id: FunctionId,
        values: &Matrix<f64, R, C, S>,
    ) -> Result<OMatrix<f64, R, C>>
    where
        R: Dim,
        C: Dim,
        S: Storage<f64, R, C>,
        DefaultAllocator: Allocator<R, C>,
    {
        elementwise::try_map_matrix(|x| self.active.evaluate(id, x), values)
    }

    pub fn exp(&self, x: f64) -> f64 {
        (self.active.exp)(x)
    }

    pub fn exp2(&self, x: f64) -> f64 {
        (self.active.exp2)(x)
    }

    pub fn expm1(&self, x: f64) -> f64 {
        (self.active.expm1)(x)
    }

    pub fn sin(&self, x: f64) -> f64 {
        (self.active.sin)(x)
    }

    pub fn sinh(&self, x: f64) -> f64 {
        (self.active.sinh)(x)
    }

    pub fn tan(&self, x: f64) -> f64 {
        (self.active.tan)(x)
    }

    pub fn tanh(&self, x: f64) -> f64 {
        (self.active.tanh)(x)
    }

    pub fn cos(&self, x: f64) -> f64 {
        (self.active.cos)(x)
    }

    pub fn cosh(&self, x: f64) -> f64 {
        (self.active.cosh)(x)
    }

    /// # Errors
    /// [`crate::approximationerror::ApproximationError::Domain`] when
    /// the input lies outside `[-1, 1]`.
    pub fn arcsin(&self, x: f64) -> Result<f64> {
        (self.active.arcsin)(x)
    }

    /// # Errors
    /// [`crate::approximationerror::ApproximationError::Domain`] when
    /// the input lies outside `[-1, 1]`.
    pub fn arccos(&self, x: f64) -> Result<f64> {
        (self.active.arccos)(x)
    }

    pub fn arcsinh(&self, x: f64) -> f64 {
        (self.active.arcsinh)(x)
    }
}
