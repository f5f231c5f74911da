pub mod clean_option;
pub use clean_option::*;

use crate::curve::BSplineCurve;
use crate::knot::KnotVector;
use crate::misc::{distance_squared, FloatingPoint};

impl<T: FloatingPoint> BSplineCurve<T> {
    /// Remove redundant knots of full multiplicity with the default options
    /// See [`BSplineCurve::clean_with_options`].
    pub fn clean(&self) -> Self {
        self.clean_with_options(&CleanOptions::default())
    }

    /// Remove redundant knots of full multiplicity
    /// An interior knot repeated `order` times whose neighboring control points coincide
    /// loses one copy together with the duplicated control point. The shape of the curve is kept
    /// and the result can be derived. Cleaning a clean curve returns an equal curve.
    ///
    /// # Example
    /// ```
    /// use deboor::prelude::*;
    /// use nalgebra::DVector;
    ///
    /// let points = vec![
    ///     DVector::from_vec(vec![0., 0.]),
    ///     DVector::from_vec(vec![1., 2.]),
    ///     DVector::from_vec(vec![3., 2.]),
    ///     DVector::from_vec(vec![4., 0.]),
    /// ];
    /// let curve = BSplineCurve::try_interpolate_cubic_beziers(&points).unwrap();
    /// assert!(curve.try_derive().is_err());
    ///
    /// let cleaned = curve.clean_with_options(&CleanOptions::default().with_tolerance(1e-9));
    /// assert_eq!(cleaned.control_points().len(), 10);
    /// assert_eq!(cleaned.knots().max_multiplicity(), 4);
    /// assert!(cleaned.try_derive().is_ok());
    /// ```
    pub fn clean_with_options(&self, options: &CleanOptions<T>) -> Self {
        let order = self.order();
        let mut control_points = self.control_points().to_vec();
        let mut knots = self.knots().to_vec();

        let mut start = 0;
        while start < knots.len() {
            let knot = knots[start];
            let multiplicity = knots[start..].iter().take_while(|k| **k == knot).count();
            let end = start + multiplicity - 1;

            let interior = start > 0 && end < knots.len() - 1;
            if multiplicity == order
                && interior
                && control_points.len() > order
                && distance_squared(&control_points[start - 1], &control_points[start])
                    < options.tolerance
            {
                control_points.remove(start);
                knots.remove(end);

                #[cfg(feature = "log")]
                log::trace!(
                    "removed knot {:?} at {}, {} control points left",
                    knot,
                    end,
                    control_points.len()
                );

                // the shortened run is scanned again and skipped
                continue;
            }

            start = end + 1;
        }

        Self::new_unchecked(self.degree(), control_points, KnotVector::new(knots))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::DVector;

    use crate::prelude::*;

    fn points() -> Vec<DVector<f64>> {
        vec![
            DVector::from_vec(vec![-1.0, -1.0]),
            DVector::from_vec(vec![1.0, -1.0]),
            DVector::from_vec(vec![1.0, 1.0]),
            DVector::from_vec(vec![-1.0, 1.0]),
            DVector::from_vec(vec![-1.0, 2.0]),
            DVector::from_vec(vec![1.0, 2.5]),
        ]
    }

    #[test]
    fn clean_bezier_segments() {
        let curve = BSplineCurve::try_interpolate_cubic_beziers(&points()).unwrap();
        assert!(matches!(
            curve.try_derive(),
            Err(CurveError::DivisionByZero { .. })
        ));

        let cleaned = curve.clean();
        assert_eq!(cleaned.degree(), 3);
        assert_eq!(cleaned.control_points().len(), 16);
        assert_eq!(cleaned.knots().len(), 20);
        assert_eq!(cleaned.knots_domain(), curve.knots_domain());

        for i in 0..=40 {
            let u = i as f64 / 40.;
            assert_relative_eq!(
                cleaned.try_point_at(u).unwrap(),
                curve.try_point_at(u).unwrap(),
                epsilon = 1e-12
            );
        }

        let derivative = cleaned.try_derive().unwrap();
        assert_eq!(derivative.degree(), 2);
    }

    #[test]
    fn clean_is_idempotent() {
        let curve = BSplineCurve::try_interpolate_cubic_beziers(&points()).unwrap();
        let once = curve.clean();
        let twice = once.clean();
        assert_eq!(once, twice);

        let smooth = BSplineCurve::try_interpolate_cubic(&points()).unwrap();
        assert_eq!(smooth.clean(), smooth);
    }

    #[test]
    fn boundary_runs_are_kept() {
        let mut curve = BSplineCurve::try_new(3, 2, 7, BoundaryMode::Clamped).unwrap();
        curve
            .set_control_points(vec![
                DVector::from_vec(vec![0.0, 0.0]),
                DVector::from_vec(vec![0.0, 0.0]),
                DVector::from_vec(vec![1.0, 1.0]),
                DVector::from_vec(vec![2.0, 0.0]),
                DVector::from_vec(vec![3.0, 1.0]),
                DVector::from_vec(vec![4.0, 0.0]),
                DVector::from_vec(vec![4.0, 0.0]),
            ])
            .unwrap();
        assert_eq!(curve.clean(), curve);
    }

    #[test]
    fn distinct_neighbors_are_kept() {
        let mut curve = BSplineCurve::try_new(1, 1, 4, BoundaryMode::Beziers).unwrap();
        curve
            .set_control_points(
                [0.0, 1.0, 1.01, 2.0]
                    .iter()
                    .map(|v| DVector::from_vec(vec![*v]))
                    .collect(),
            )
            .unwrap();
        assert_eq!(curve.clean(), curve);

        let loose = curve.clean_with_options(&CleanOptions::default().with_tolerance(1e-3));
        assert_eq!(loose.control_points().len(), 3);
        assert_eq!(loose.knots().to_vec(), vec![0.0, 0.0, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn zero_curve_in_bezier_layout() {
        let curve = BSplineCurve::<f64>::try_new(2, 3, 9, BoundaryMode::Beziers).unwrap();
        let cleaned = curve.clean();
        assert_eq!(cleaned.control_points().len(), 7);
        assert_eq!(cleaned.knots().max_multiplicity(), 3);
        assert!(cleaned.try_derive().is_ok());
    }

    #[test]
    fn minimal_curve_is_kept() {
        let curve = BSplineCurve::try_from_parts(
            3,
            vec![DVector::from_vec(vec![0.0]); 4],
            vec![0.0, 0.5, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0],
        )
        .unwrap();
        assert_eq!(curve.clean(), curve);
    }
}
