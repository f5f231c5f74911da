use crate::error::{CurveError, Result};
use crate::knot::KnotVector;
use crate::misc::FloatingPoint;

/// Default knot spacing of a freshly constructed curve
/// Every layout spans the parameter range `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryMode {
    /// Uniformly spaced knots, the curve does not touch its end control points
    Opened,
    /// Uniform interior knots with `order` copies of the first and last knot
    #[default]
    Clamped,
    /// Sequence of bezier segments, every knot value repeats `order` times
    Beziers,
}

impl BoundaryMode {
    /// Build the default knot vector with `len` knots for a curve of `degree`
    /// # Example
    /// ```
    /// use deboor::prelude::*;
    /// let knots = BoundaryMode::Clamped.knots::<f64>(11, 3).unwrap();
    /// assert_eq!(
    ///     knots.to_vec(),
    ///     vec![0., 0., 0., 0., 0.25, 0.5, 0.75, 1., 1., 1., 1.]
    /// );
    /// ```
    pub fn knots<T: FloatingPoint>(&self, len: usize, degree: usize) -> Result<KnotVector<T>> {
        let order = degree + 1;
        let mut knots = Vec::new();
        knots.try_reserve_exact(len)?;

        match self {
            BoundaryMode::Opened => {
                let fac = T::one() / T::from_usize_lossy(len - 1);
                knots.extend((0..len).map(|i| T::from_usize_lossy(i) * fac));
            }
            BoundaryMode::Clamped => {
                let fac = T::one() / T::from_usize_lossy(len - 2 * degree - 1);
                knots.extend((0..len).map(|i| {
                    if i < order {
                        T::zero()
                    } else if i >= len - order {
                        T::one()
                    } else {
                        T::from_usize_lossy(i - degree) * fac
                    }
                }));
            }
            BoundaryMode::Beziers => {
                if len % order != 0 {
                    return Err(CurveError::InvalidKnotCountForBezierSegmentation {
                        knots: len,
                        order,
                    });
                }
                let fac = T::one() / T::from_usize_lossy(len / order - 1);
                knots.extend((0..len).map(|i| T::from_usize_lossy(i / order) * fac));
            }
        }

        Ok(KnotVector::new(knots))
    }
}
