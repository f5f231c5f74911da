use nalgebra::DVector;

use crate::error::{CurveError, Result};

use super::FloatingPoint;

/// Squared euclidean distance between two control points
/// No square root is taken, which is enough for coincidence checks
/// # Example
/// ```
/// use deboor::prelude::*;
/// use nalgebra::DVector;
/// let a = DVector::from_vec(vec![0., 0.]);
/// let b = DVector::from_vec(vec![3., 4.]);
/// assert_eq!(distance_squared(&a, &b), 25.);
/// ```
pub fn distance_squared<T: FloatingPoint>(a: &DVector<T>, b: &DVector<T>) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (x, y)| acc + (*x - *y) * (*x - *y))
}

/// Returns the shared dimension of a control net
/// Fails if the net is empty-dimensional or mixes dimensions
pub fn uniform_dimension<T: FloatingPoint>(points: &[DVector<T>]) -> Result<usize> {
    let dim = points.first().map(|p| p.len()).unwrap_or(0);
    if dim == 0 {
        return Err(CurveError::DimensionZero);
    }
    match points.iter().find(|p| p.len() != dim) {
        Some(p) => Err(CurveError::DimensionMismatch {
            actual: p.len(),
            expected: dim,
        }),
        None => Ok(dim),
    }
}

/// Linear blend of two control points `(1 - alpha) * a + alpha * b`
pub(crate) fn blend<T: FloatingPoint>(a: &DVector<T>, b: &DVector<T>, alpha: T) -> DVector<T> {
    a * (T::one() - alpha) + b * alpha
}
