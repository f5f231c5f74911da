//! Cubic interpolation of a sequence of points.
//!
//! Two layouts are produced:
//! - a smooth clamped cubic whose interior knots are the point parameters
//!   ([`BSplineCurve::try_interpolate_cubic`])
//! - a natural cubic spline written as concatenated bezier segments
//!   ([`BSplineCurve::try_interpolate_cubic_beziers`])
//!
//! [`BSplineCurve::try_interpolate_cubic`]: crate::curve::BSplineCurve::try_interpolate_cubic
//! [`BSplineCurve::try_interpolate_cubic_beziers`]: crate::curve::BSplineCurve::try_interpolate_cubic_beziers

mod beziers;
mod cubic;

use nalgebra::DVector;

use crate::error::{CurveError, Result};
use crate::misc::{uniform_dimension, FloatingPoint};

/// Degree of every interpolated curve
pub(crate) const CUBIC: usize = 3;

/// Minimum number of points accepted by the interpolators
pub(crate) const MIN_POINTS: usize = 4;

/// Check the input of an interpolation and return the dimension of the points
fn validate_points<T: FloatingPoint>(points: &[DVector<T>]) -> Result<usize> {
    if points.len() < MIN_POINTS {
        return Err(CurveError::TooFewPoints {
            actual: points.len(),
            required: MIN_POINTS,
        });
    }
    uniform_dimension(points)
}
