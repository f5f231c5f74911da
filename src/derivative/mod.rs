use crate::curve::BSplineCurve;
use crate::error::{CurveError, Result};
use crate::knot::KnotVector;
use crate::misc::FloatingPoint;

impl<T: FloatingPoint> BSplineCurve<T> {
    /// Create the derivative curve, one degree lower
    /// The curve must not contain an interior knot of multiplicity `order`,
    /// run [`BSplineCurve::clean`] first on curves built from bezier segments.
    ///
    /// # Failures
    /// - the curve has degree zero
    /// - a knot span used as divisor has zero width
    ///
    /// # Example
    /// ```
    /// use deboor::prelude::*;
    /// use nalgebra::DVector;
    /// use approx::assert_relative_eq;
    ///
    /// // straight line from (0, 0) to (3, 6) as a clamped quadratic
    /// let curve = BSplineCurve::try_from_parts(
    ///     2,
    ///     vec![
    ///         DVector::from_vec(vec![0., 0.]),
    ///         DVector::from_vec(vec![1.5, 3.]),
    ///         DVector::from_vec(vec![3., 6.]),
    ///     ],
    ///     vec![0., 0., 0., 1., 1., 1.],
    /// ).unwrap();
    /// let derivative = curve.try_derive().unwrap();
    /// assert_eq!(derivative.degree(), 1);
    /// let tangent = derivative.try_point_at(0.3).unwrap();
    /// assert_relative_eq!(tangent[0], 3.);
    /// assert_relative_eq!(tangent[1], 6.);
    /// ```
    pub fn try_derive(&self) -> Result<Self> {
        let degree = self.degree();
        if degree == 0 {
            return Err(CurveError::CurveDegreeZero);
        }

        let order = self.order();
        let knots = self.knots();
        let deg = T::from_usize_lossy(degree);

        let control_points = self
            .control_points()
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let span = knots[i + order] - knots[i + 1];
                if span == T::zero() {
                    return Err(CurveError::DivisionByZero { index: i + 1 });
                }
                Ok((&pair[1] - &pair[0]) * (deg / span))
            })
            .collect::<Result<Vec<_>>>()?;

        let knots = KnotVector::new(knots.as_slice()[1..(knots.len() - 1)].to_vec());
        Ok(Self::new_unchecked(degree - 1, control_points, knots))
    }

    /// Create the `n`th derivative curve
    /// `n == 0` returns a copy of the curve.
    pub fn try_derive_nth(&self, n: usize) -> Result<Self> {
        (0..n).try_fold(self.clone(), |curve, _| curve.try_derive())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::DVector;

    use crate::prelude::*;

    fn curve() -> BSplineCurve<f64> {
        let mut curve = BSplineCurve::try_new(3, 2, 7, BoundaryMode::Clamped).unwrap();
        curve
            .set_control_points(vec![
                DVector::from_vec(vec![-1.75, -1.0]),
                DVector::from_vec(vec![-1.5, -0.5]),
                DVector::from_vec(vec![-1.5, 0.0]),
                DVector::from_vec(vec![-1.25, 0.5]),
                DVector::from_vec(vec![-0.75, 0.75]),
                DVector::from_vec(vec![0.0, 0.5]),
                DVector::from_vec(vec![0.5, 0.0]),
            ])
            .unwrap();
        curve
    }

    #[test]
    fn derivative_lowers_degree() {
        let curve = curve();
        let derivative = curve.try_derive().unwrap();
        assert_eq!(derivative.degree(), curve.degree() - 1);
        assert_eq!(derivative.control_points().len(), 6);
        assert_eq!(derivative.knots().len(), 9);
        assert_eq!(derivative.knots_domain(), curve.knots_domain());
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let curve = curve();
        let derivative = curve.try_derive().unwrap();
        let h = 1e-6;
        for u in [0.1, 0.3, 0.55, 0.8, 0.95] {
            let ahead = curve.try_point_at(u + h).unwrap();
            let behind = curve.try_point_at(u - h).unwrap();
            let expected = (ahead - behind) / (2. * h);
            let tangent = derivative.try_point_at(u).unwrap();
            assert_relative_eq!(tangent, expected, epsilon = 1e-5);
        }
    }

    #[test]
    fn degree_zero_has_no_derivative() {
        let curve = BSplineCurve::<f64>::try_new(0, 2, 3, BoundaryMode::Clamped).unwrap();
        assert_eq!(curve.try_derive(), Err(CurveError::CurveDegreeZero));

        let linear = BSplineCurve::<f64>::try_new(1, 2, 3, BoundaryMode::Clamped).unwrap();
        let constant = linear.try_derive().unwrap();
        assert_eq!(constant.degree(), 0);
        assert_eq!(constant.try_derive(), Err(CurveError::CurveDegreeZero));
    }

    #[test]
    fn full_multiplicity_interior_knot_cannot_be_derived() {
        let curve = BSplineCurve::<f64>::try_new(3, 2, 8, BoundaryMode::Beziers).unwrap();
        assert_eq!(
            curve.try_derive(),
            Err(CurveError::DivisionByZero { index: 4 })
        );
    }

    #[test]
    fn nth_derivative() {
        let curve = curve();
        assert_eq!(curve.try_derive_nth(0).unwrap(), curve);
        assert_eq!(curve.try_derive_nth(3).unwrap().degree(), 0);
        assert_eq!(curve.try_derive_nth(4), Err(CurveError::CurveDegreeZero));
    }
}
