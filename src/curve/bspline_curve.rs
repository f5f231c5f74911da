use nalgebra::{convert, DVector};
use simba::scalar::SupersetOf;

use crate::error::{CurveError, Result};
use crate::knot::KnotVector;
use crate::misc::{uniform_dimension, FloatingPoint};

use super::BoundaryMode;

/// B-spline curve representation
/// Control points are stored as dynamically sized vectors, so a single type covers
/// curves of any dimension with f32 or f64 scalar types
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BSplineCurve<T: FloatingPoint> {
    /// control points, every point has `dimension` coordinates
    control_points: Vec<DVector<T>>,
    degree: usize,
    /// knot vector for the curve
    /// the length of the knot vector is equal to the `# of control points + degree + 1`
    knots: KnotVector<T>,
}

impl<T: FloatingPoint> BSplineCurve<T> {
    /// Create a new curve with all control points at the origin
    /// and the default knot layout of `mode`
    /// # Failures
    /// - `dimension` is zero
    /// - the number of control points is not greater than the degree
    /// - `mode` is `Beziers` and the control points cannot be split into segments of `degree + 1`
    ///
    /// # Example
    /// ```
    /// use deboor::prelude::*;
    /// let curve = BSplineCurve::<f64>::try_new(3, 2, 7, BoundaryMode::Clamped).unwrap();
    /// assert_eq!(curve.order(), 4);
    /// assert_eq!(curve.knots().len(), 11);
    /// assert_eq!(curve.knots_domain(), (0., 1.));
    ///
    /// let err = BSplineCurve::<f64>::try_new(2, 0, 7, BoundaryMode::Opened).unwrap_err();
    /// assert_eq!(err, CurveError::DimensionZero);
    /// ```
    pub fn try_new(
        degree: usize,
        dimension: usize,
        control_points: usize,
        mode: BoundaryMode,
    ) -> Result<Self> {
        if dimension == 0 {
            return Err(CurveError::DimensionZero);
        }
        if degree >= control_points {
            return Err(CurveError::DegreeGreaterOrEqualControlPointCount {
                degree,
                control_points,
            });
        }

        let knots = mode.knots(control_points + degree + 1, degree)?;

        let mut points = Vec::new();
        points.try_reserve_exact(control_points)?;
        points.extend((0..control_points).map(|_| DVector::zeros(dimension)));

        Ok(Self {
            control_points: points,
            degree,
            knots,
        })
    }

    /// Create a curve from raw control points and knots
    /// # Failures
    /// - the control points are zero-dimensional or mix dimensions
    /// - the number of control points is not greater than the degree
    /// - the number of knots is not equal to the number of control points + the degree + 1
    /// - the knots decrease or a knot repeats more than `degree + 1` times
    ///
    /// # Example
    /// ```
    /// use deboor::prelude::*;
    /// use nalgebra::DVector;
    ///
    /// let control_points = vec![
    ///     DVector::from_vec(vec![0., 0.]),
    ///     DVector::from_vec(vec![1., 2.]),
    ///     DVector::from_vec(vec![3., 2.]),
    ///     DVector::from_vec(vec![4., 0.]),
    /// ];
    /// let knots = vec![0., 0., 0., 0.5, 1., 1., 1.];
    /// let curve = BSplineCurve::try_from_parts(2, control_points, knots);
    /// assert!(curve.is_ok());
    /// ```
    pub fn try_from_parts(
        degree: usize,
        control_points: Vec<DVector<T>>,
        knots: Vec<T>,
    ) -> Result<Self> {
        uniform_dimension(&control_points)?;
        if degree >= control_points.len() {
            return Err(CurveError::DegreeGreaterOrEqualControlPointCount {
                degree,
                control_points: control_points.len(),
            });
        }
        let knots = Self::validate_knots(degree, control_points.len(), knots)?;

        Ok(Self {
            control_points,
            degree,
            knots,
        })
    }

    /// Assemble a curve whose invariants are already guaranteed by the caller
    pub(crate) fn new_unchecked(
        degree: usize,
        control_points: Vec<DVector<T>>,
        knots: KnotVector<T>,
    ) -> Self {
        debug_assert!(degree < control_points.len());
        debug_assert_eq!(knots.len(), control_points.len() + degree + 1);
        Self {
            control_points,
            degree,
            knots,
        }
    }

    fn validate_knots(degree: usize, control_points: usize, knots: Vec<T>) -> Result<KnotVector<T>> {
        let expected = control_points + degree + 1;
        if knots.len() != expected {
            return Err(CurveError::InvalidKnotCount {
                actual: knots.len(),
                expected,
            });
        }
        let knots = KnotVector::try_new(knots)?;
        let multiplicity = knots.max_multiplicity();
        if multiplicity > degree + 1 {
            return Err(CurveError::MultiplicityExceedsOrder {
                multiplicity,
                order: degree + 1,
            });
        }
        Ok(knots)
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// `degree + 1`, the number of control points influencing a single span
    pub fn order(&self) -> usize {
        self.degree + 1
    }

    /// Number of coordinates of every control point
    pub fn dimension(&self) -> usize {
        self.control_points[0].len()
    }

    pub fn knots(&self) -> &KnotVector<T> {
        &self.knots
    }

    pub fn control_points(&self) -> &[DVector<T>] {
        &self.control_points
    }

    pub fn control_points_iter(&self) -> impl Iterator<Item = &DVector<T>> {
        self.control_points.iter()
    }

    /// Replace the whole control net
    /// The new net must have the same number of points and the same dimension
    pub fn set_control_points(&mut self, control_points: Vec<DVector<T>>) -> Result<()> {
        if control_points.len() != self.control_points.len() {
            return Err(CurveError::ControlPointCountMismatch {
                actual: control_points.len(),
                expected: self.control_points.len(),
            });
        }
        let dim = uniform_dimension(&control_points)?;
        if dim != self.dimension() {
            return Err(CurveError::DimensionMismatch {
                actual: dim,
                expected: self.dimension(),
            });
        }
        self.control_points = control_points;
        Ok(())
    }

    /// Replace the whole knot vector
    /// The new knots must keep the length, never decrease and repeat at most `order` times
    pub fn set_knots(&mut self, knots: Vec<T>) -> Result<()> {
        self.knots = Self::validate_knots(self.degree, self.control_points.len(), knots)?;
        Ok(())
    }

    /// Get the parameter range `(knots[degree], knots[n])` where the curve is defined
    pub fn knots_domain(&self) -> (T, T) {
        self.knots.domain(self.degree)
    }

    pub fn knots_domain_interval(&self) -> T {
        let (d0, d1) = self.knots_domain();
        d1 - d0
    }

    /// Check if `u` lies in the closed domain of the curve
    pub fn contains_parameter(&self, u: T) -> bool {
        let (min, max) = self.knots_domain();
        min <= u && u <= max
    }

    /// Check if the curve is clamped
    pub fn is_clamped(&self) -> bool {
        self.knots.is_clamped(self.degree)
    }

    /// Decompose the curve into its parts, `(degree, control points, knots)`
    pub fn into_parts(self) -> (usize, Vec<DVector<T>>, KnotVector<T>) {
        (self.degree, self.control_points, self.knots)
    }

    /// Cast the curve to a curve with another floating point type
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> BSplineCurve<F> {
        BSplineCurve {
            control_points: self
                .control_points
                .iter()
                .map(|p| p.map(convert))
                .collect(),
            degree: self.degree,
            knots: self.knots.cast(),
        }
    }
}
