use nalgebra::DVector;

use crate::curve::BSplineCurve;
use crate::error::{CurveError, Result};
use crate::knot::KnotVector;
use crate::misc::{blend, FloatingPoint};

impl<T: FloatingPoint> BSplineCurve<T> {
    /// Insert the knot `u` `count` times and return the refined curve
    /// The refined curve has `count` more control points and describes the same shape.
    ///
    /// # Failures
    /// - `u` is outside of the curve domain
    /// - the multiplicity of `u` would exceed the order of the curve
    ///
    /// # Example
    /// ```
    /// use deboor::prelude::*;
    /// use nalgebra::DVector;
    /// use approx::assert_relative_eq;
    ///
    /// let curve = BSplineCurve::try_from_parts(
    ///     2,
    ///     vec![
    ///         DVector::from_vec(vec![0., 0.]),
    ///         DVector::from_vec(vec![1., 2.]),
    ///         DVector::from_vec(vec![3., 2.]),
    ///         DVector::from_vec(vec![4., 0.]),
    ///     ],
    ///     vec![0., 0., 0., 0.5, 1., 1., 1.],
    /// ).unwrap();
    /// let refined = curve.try_insert_knot(0.25, 2).unwrap();
    /// assert_eq!(refined.control_points().len(), 6);
    /// assert_eq!(refined.knots().multiplicity_of(0.25), 2);
    ///
    /// let before = curve.try_point_at(0.7).unwrap();
    /// let after = refined.try_point_at(0.7).unwrap();
    /// assert_relative_eq!(before, after, epsilon = 1e-12);
    /// ```
    pub fn try_insert_knot(&self, u: T, count: usize) -> Result<Self> {
        if !self.contains_parameter(u) {
            return Err(CurveError::ParameterOutOfDomain);
        }

        let order = self.order();
        let multiplicity = self.knots().multiplicity_of(u) + count;
        if multiplicity > order {
            return Err(CurveError::MultiplicityExceedsOrder {
                multiplicity,
                order,
            });
        }

        let mut control_points = self.control_points().to_vec();
        let mut knots = self.knots().clone();
        for _ in 0..count {
            (control_points, knots) = insert_knot_once(self.degree(), &control_points, &knots, u)?;
        }

        #[cfg(feature = "log")]
        log::trace!(
            "inserted knot {:?} {} time(s), {} control points",
            u,
            count,
            control_points.len()
        );

        Ok(Self::new_unchecked(self.degree(), control_points, knots))
    }

    /// Insert every knot of `knots_to_insert` once
    /// Repeated values raise the multiplicity accordingly.
    pub fn try_refine_knots(&self, knots_to_insert: &[T]) -> Result<Self> {
        knots_to_insert
            .iter()
            .try_fold(self.clone(), |curve, u| curve.try_insert_knot(*u, 1))
    }
}

/// One pass of Boehm's knot insertion
/// Control points left of the affected span are kept, the affected ones are blended
/// and the rest shift by one.
fn insert_knot_once<T: FloatingPoint>(
    degree: usize,
    control_points: &[DVector<T>],
    knots: &KnotVector<T>,
    u: T,
) -> Result<(Vec<DVector<T>>, KnotVector<T>)> {
    let k = knots.span_index(u).ok_or(CurveError::ParameterOutOfDomain)?;
    let s = knots.multiplicity_of(u);
    let n = control_points.len();

    let mut refined = Vec::new();
    refined.try_reserve_exact(n + 1)?;
    refined.extend((0..=n).map(|i| {
        if i + degree <= k {
            control_points[i].clone()
        } else if i + s <= k {
            let span = knots[i + degree] - knots[i];
            let alpha = if span == T::zero() {
                T::zero()
            } else {
                (u - knots[i]) / span
            };
            blend(&control_points[i - 1], &control_points[i], alpha)
        } else {
            control_points[i - 1].clone()
        }
    }));

    let mut next = Vec::new();
    next.try_reserve_exact(knots.len() + 1)?;
    next.extend_from_slice(&knots.as_slice()[..=k]);
    next.push(u);
    next.extend_from_slice(&knots.as_slice()[(k + 1)..]);

    Ok((refined, KnotVector::new(next)))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::DVector;
    use rand::Rng;

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
    fn insertion_preserves_shape() {
        let curve = curve();
        let mut rng = rand::rng();
        for u in [0.1, 0.25, 0.4, 0.75, 0.99] {
            let refined = curve.try_insert_knot(u, 1).unwrap();
            assert_eq!(refined.control_points().len(), 8);
            assert_eq!(refined.knots().len(), 12);
            for _ in 0..32 {
                let t: f64 = rng.random_range(0.0..=1.0);
                let a = curve.try_point_at(t).unwrap();
                let b = refined.try_point_at(t).unwrap();
                assert_relative_eq!(a, b, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn insertion_up_to_order_interpolates_curve_point() {
        let curve = curve();
        let refined = curve.try_insert_knot(0.4, 3).unwrap();
        let expected = curve.try_point_at(0.4).unwrap();
        let net = refined.try_evaluate(0.4).unwrap();
        assert_eq!(net.multiplicity(), 3);
        assert_eq!(net.insertions(), 0);
        assert_relative_eq!(net.point(), &expected, epsilon = 1e-12);
    }

    #[test]
    fn insertion_beyond_order_fails() {
        let curve = curve();
        assert_eq!(
            curve.try_insert_knot(0.25, 4),
            Err(CurveError::MultiplicityExceedsOrder {
                multiplicity: 5,
                order: 4
            })
        );
        assert!(curve.try_insert_knot(0.0, 1).is_err());
        assert!(curve.try_insert_knot(0.25, 3).is_ok());
    }

    #[test]
    fn insertion_outside_domain_fails() {
        let curve = curve();
        assert_eq!(
            curve.try_insert_knot(1.5, 1),
            Err(CurveError::ParameterOutOfDomain)
        );
    }

    #[test]
    fn insertion_without_count_is_a_copy() {
        let curve = curve();
        assert_eq!(curve.try_insert_knot(0.3, 0).unwrap(), curve);
    }

    #[test]
    fn refine_many_knots() {
        let curve = curve();
        let refined = curve.try_refine_knots(&[0.1, 0.6, 0.6, 0.9]).unwrap();
        assert_eq!(refined.control_points().len(), 11);
        assert_eq!(refined.knots().multiplicity_of(0.6), 2);
        for t in [0.0, 0.05, 0.33, 0.6, 0.8, 1.0] {
            assert_relative_eq!(
                curve.try_point_at(t).unwrap(),
                refined.try_point_at(t).unwrap(),
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn opened_curve_refinement() {
        let mut curve = BSplineCurve::try_new(2, 1, 5, BoundaryMode::Opened).unwrap();
        curve
            .set_control_points(
                [0., 2., -1., 3., 1.]
                    .iter()
                    .map(|v| DVector::from_vec(vec![*v]))
                    .collect(),
            )
            .unwrap();
        let (min, max) = curve.knots_domain();
        let refined = curve.try_insert_knot((min + max) / 2., 2).unwrap();
        for t in [min, 0.4, 0.5, 0.6, max] {
            assert_relative_eq!(
                curve.try_point_at(t).unwrap(),
                refined.try_point_at(t).unwrap(),
                epsilon = 1e-10
            );
        }
    }
}
