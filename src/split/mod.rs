use crate::curve::BSplineCurve;
use crate::error::{CurveError, Result};
use crate::knot::KnotVector;
use crate::misc::FloatingPoint;

/// Split the object into two objects with the given option
pub trait Split
where
    Self: Sized,
{
    type Option;
    fn try_split(&self, option: Self::Option) -> Result<(Self, Self)>;
}

impl<T: FloatingPoint> Split for BSplineCurve<T> {
    type Option = T;

    /// Split the curve into two curves before and after the parameter
    /// `u` must lie strictly inside the curve domain.
    /// # Example
    /// ```
    /// use deboor::prelude::*;
    /// use nalgebra::DVector;
    /// use approx::assert_relative_eq;
    ///
    /// let curve = BSplineCurve::try_interpolate_cubic(&[
    ///     DVector::from_vec(vec![0., 0.]),
    ///     DVector::from_vec(vec![1., 1.]),
    ///     DVector::from_vec(vec![2., 0.]),
    ///     DVector::from_vec(vec![3., 1.]),
    /// ]).unwrap();
    /// let (left, right) = curve.try_split(0.5).unwrap();
    /// assert_eq!(left.knots_domain().1, 0.5);
    /// assert_eq!(right.knots_domain().0, 0.5);
    /// assert_relative_eq!(
    ///     left.try_point_at(0.5).unwrap(),
    ///     right.try_point_at(0.5).unwrap(),
    ///     epsilon = 1e-12
    /// );
    /// ```
    fn try_split(&self, u: T) -> Result<(Self, Self)> {
        let (min, max) = self.knots_domain();
        if u <= min || u >= max {
            return Err(CurveError::ParameterOutOfDomain);
        }

        let order = self.order();
        let s = self.knots().multiplicity_of(u);
        let refined = self.try_insert_knot(u, order - s)?;

        let end = refined
            .knots()
            .span_index(u)
            .ok_or(CurveError::ParameterOutOfDomain)?;
        let first = end + 1 - order;

        let knots = refined.knots().as_slice();
        let control_points = refined.control_points();
        let left = Self::new_unchecked(
            self.degree(),
            control_points[..first].to_vec(),
            KnotVector::new(knots[..(first + order)].to_vec()),
        );
        let right = Self::new_unchecked(
            self.degree(),
            control_points[first..].to_vec(),
            KnotVector::new(knots[first..].to_vec()),
        );
        Ok((left, right))
    }
}
