use nalgebra::allocator::Allocator;
use nalgebra::storage::Storage;
use nalgebra::{DefaultAllocator, Dim, Matrix, OMatrix};

use crate::approximationerror::{ApproximationError, Result};

/// Applies a total scalar model to every element of a slice.
pub fn map_slice<F>(function: F, values: &[f64]) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    values.iter().map(|&x| function(x)).collect()
}

/// Element-wise application of a fallible scalar model.
///
/// Fail-fast policy: the first failing element aborts the whole map
/// and no partial result is returned.
///
/// # Errors
/// [`ApproximationError::Element`] wrapping the underlying domain
/// error, with the index of the offending element.
pub fn try_map_slice<F>(function: F, values: &[f64]) -> Result<Vec<f64>>
where
    F: Fn(f64) -> Result<f64>,
{
    values
        .iter()
        .enumerate()
        .map(|(index, &x)| {
            function(x).map_err(|error| ApproximationError::Element {
                index,
                source: Box::new(error),
            })
        })
        .collect()
}

/// Shape-preserving element-wise application over a `nalgebra` matrix
/// or vector, static or dynamic dimensions alike.
pub fn map_matrix<F, R, C, S>(function: F, values: &Matrix<f64, R, C, S>) -> OMatrix<f64, R, C>
where
    F: Fn(f64) -> f64,
    R: Dim,
    C: Dim,
    S: Storage<f64, R, C>,
    DefaultAllocator: Allocator<R, C>,
{
    values.map(function)
}

/// Fail-fast variant of [`map_matrix`] for fallible models. The
/// reported index is the column-major linear position, matching
/// `nalgebra`'s iteration order.
///
/// # Errors
/// [`ApproximationError::Element`] for the first failing element.
pub fn try_map_matrix<F, R, C, S>(
    function: F,
    values: &Matrix<f64, R, C, S>,
) -> Result<OMatrix<f64, R, C>>
where
    F: Fn(f64) -> Result<f64>,
    R: Dim,
    C: Dim,
    S: Storage<f64, R, C>,
    DefaultAllocator: Allocator<R, C>,
{
    let (nrows, ncols) = values.shape_generic();
    let mut result = OMatrix::<f64, R, C>::zeros_generic(nrows, ncols);
    for (index, (target, &x)) in result.iter_mut().zip(values.iter()).enumerate() {
        *target = function(x).map_err(|error| ApproximationError::Element {
            index,
            source: Box::new(error),
        })?;
    }
    Ok(result)
}
