use nalgebra::{DMatrix, DVector};

use crate::curve::{BSplineCurve, KnotStyle};
use crate::error::{CurveError, Result};
use crate::knot::KnotVector;
use crate::misc::FloatingPoint;

use super::{validate_points, CUBIC};

impl<T: FloatingPoint> BSplineCurve<T> {
    /// Interpolate the points with a clamped cubic curve, uniformly parameterized
    /// # Example
    /// ```
    /// use deboor::prelude::*;
    /// use nalgebra::DVector;
    /// use approx::assert_relative_eq;
    ///
    /// let points = vec![
    ///     DVector::from_vec(vec![-1.0, -1.0]),
    ///     DVector::from_vec(vec![1.0, -1.0]),
    ///     DVector::from_vec(vec![1.0, 1.0]),
    ///     DVector::from_vec(vec![-1.0, 1.0]),
    ///     DVector::from_vec(vec![-1.0, 2.0]),
    /// ];
    /// let curve = BSplineCurve::try_interpolate_cubic(&points).unwrap();
    /// assert_eq!(curve.degree(), 3);
    /// assert_eq!(curve.control_points().len(), 7);
    ///
    /// for (i, p) in points.iter().enumerate() {
    ///     let u = i as f64 / 4.;
    ///     assert_relative_eq!(curve.try_point_at(u).unwrap(), p.clone(), epsilon = 1e-10);
    /// }
    /// ```
    pub fn try_interpolate_cubic(points: &[DVector<T>]) -> Result<Self> {
        Self::try_interpolate_cubic_with_style(points, KnotStyle::default())
    }

    /// Interpolate the points with a clamped cubic curve
    /// The points are parameterized by `knot_style` and become the interior knots,
    /// the curvature vanishes at both ends.
    ///
    /// # Failures
    /// - fewer than four points, or points without a common non-zero dimension
    /// - two consecutive points share a parameter
    /// - the linear system is singular
    pub fn try_interpolate_cubic_with_style(
        points: &[DVector<T>],
        knot_style: KnotStyle,
    ) -> Result<Self> {
        let dim = validate_points(points)?;
        let params = knot_style.parameterize(points);
        if let Some(index) = params.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CurveError::DivisionByZero { index: index + 1 });
        }

        let m = points.len();
        let t0 = params[0];
        let t1 = params[m - 1];

        let mut knots = Vec::new();
        knots.try_reserve_exact(m + 2 * CUBIC)?;
        knots.extend(std::iter::repeat(t0).take(CUBIC + 1));
        knots.extend_from_slice(&params[1..(m - 1)]);
        knots.extend(std::iter::repeat(t1).take(CUBIC + 1));
        let knots = KnotVector::new(knots);

        // position rows at every parameter plus two curvature rows next to the ends
        let n = m + 2;
        let mut rows = vec![(t0, 0)];
        rows.push((t0, 2));
        rows.extend(params[1..(m - 1)].iter().map(|u| (*u, 0)));
        rows.push((t1, 2));
        rows.push((t1, 0));

        let mut m_a = DMatrix::<T>::zeros(n, n);
        for (row, (u, derivative)) in rows.iter().enumerate() {
            let span = knots.find_knot_span_index(n - 1, CUBIC, *u);
            let ders = knots.derivative_basis_functions(span, *u, CUBIC, *derivative);
            for (j, value) in ders[*derivative].iter().enumerate() {
                m_a[(row, span - CUBIC + j)] = *value;
            }
        }

        let zero = DVector::<T>::zeros(dim);
        let rhs = std::iter::once(&points[0])
            .chain(std::iter::once(&zero))
            .chain(points[1..(m - 1)].iter())
            .chain(std::iter::once(&zero))
            .chain(std::iter::once(&points[m - 1]))
            .collect::<Vec<_>>();

        let m_b = DMatrix::<T>::from_fn(n, dim, |i, j| rhs[i][j]);
        let m_x = m_a.lu().solve(&m_b).ok_or(CurveError::SingularSystem)?;

        let control_points = m_x
            .row_iter()
            .map(|row| DVector::from_iterator(dim, row.iter().copied()))
            .collect();

        Ok(Self::new_unchecked(CUBIC, control_points, knots))
    }
}
