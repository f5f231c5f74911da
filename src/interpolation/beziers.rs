use nalgebra::DVector;

use crate::curve::{BSplineCurve, BoundaryMode};
use crate::error::Result;
use crate::misc::FloatingPoint;

use super::{validate_points, CUBIC};

impl<T: FloatingPoint> BSplineCurve<T> {
    /// Interpolate the points with a natural cubic spline made of bezier segments
    /// Segment `i` joins `points[i]` and `points[i + 1]` on `[i / (m - 1), (i + 1) / (m - 1)]`.
    /// Neighboring segments share a knot of full multiplicity and two equal control points,
    /// [`BSplineCurve::clean`] merges them.
    ///
    /// # Example
    /// ```
    /// use deboor::prelude::*;
    /// use nalgebra::DVector;
    /// use approx::assert_relative_eq;
    ///
    /// let points = vec![
    ///     DVector::from_vec(vec![0., 0.]),
    ///     DVector::from_vec(vec![1., 2.]),
    ///     DVector::from_vec(vec![3., 2.]),
    ///     DVector::from_vec(vec![4., 0.]),
    /// ];
    /// let curve = BSplineCurve::try_interpolate_cubic_beziers(&points).unwrap();
    /// assert_eq!(curve.control_points().len(), 12);
    /// assert_relative_eq!(curve.try_point_at(1. / 3.).unwrap()[0], 1., epsilon = 1e-12);
    /// assert_relative_eq!(curve.try_point_at(1. / 3.).unwrap()[1], 2., epsilon = 1e-12);
    /// ```
    pub fn try_interpolate_cubic_beziers(points: &[DVector<T>]) -> Result<Self> {
        let dim = validate_points(points)?;
        let m = points.len();
        let moments = natural_moments(points, dim);

        let third = T::one() / T::from_usize_lossy(3);
        let sixth = T::one() / T::from_usize_lossy(6);
        let two = T::from_usize_lossy(2);

        let mut control_points = Vec::new();
        control_points.try_reserve_exact((m - 1) * (CUBIC + 1))?;
        for i in 0..(m - 1) {
            let (p0, p1) = (&points[i], &points[i + 1]);
            let (m0, m1) = (&moments[i], &moments[i + 1]);
            let chord = p1 - p0;
            let start_tangent = &chord - (m0 * two + m1) * sixth;
            let end_tangent = &chord + (m0 + m1 * two) * sixth;

            control_points.push(p0.clone());
            control_points.push(p0 + start_tangent * third);
            control_points.push(p1 - end_tangent * third);
            control_points.push(p1.clone());
        }

        let knots = BoundaryMode::Beziers.knots(control_points.len() + CUBIC + 1, CUBIC)?;
        Ok(Self::new_unchecked(CUBIC, control_points, knots))
    }
}

/// Second derivatives of the natural cubic spline through uniformly spaced points
/// Solves `M[i-1] + 4 M[i] + M[i+1] = 6 (P[i+1] - 2 P[i] + P[i-1])` with `M[0] = M[m-1] = 0`
/// by the Thomas algorithm.
fn natural_moments<T: FloatingPoint>(points: &[DVector<T>], dim: usize) -> Vec<DVector<T>> {
    let m = points.len();
    let four = T::from_usize_lossy(4);
    let six = T::from_usize_lossy(6);
    let two = T::from_usize_lossy(2);

    let mut moments = vec![DVector::<T>::zeros(dim); m];
    if m < 3 {
        return moments;
    }

    // forward sweep over the interior unknowns 1..=m-2
    let mut upper = vec![T::zero(); m];
    let mut rhs = vec![DVector::<T>::zeros(dim); m];
    for i in 1..(m - 1) {
        let d = (&points[i + 1] - &points[i] * two + &points[i - 1]) * six;
        let denom = four - upper[i - 1];
        upper[i] = T::one() / denom;
        rhs[i] = (d - &rhs[i - 1]) / denom;
    }

    // back substitution, moments[m - 1] stays zero
    for i in (1..(m - 1)).rev() {
        moments[i] = &rhs[i] - &moments[i + 1] * upper[i];
    }
    moments
}
