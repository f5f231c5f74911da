pub mod de_boor_net;
pub use de_boor_net::*;

use nalgebra::DVector;

use crate::curve::BSplineCurve;
use crate::error::{CurveError, Result};
use crate::misc::{blend, FloatingPoint};

impl<T: FloatingPoint> BSplineCurve<T> {
    /// Evaluate the curve at `u` with De Boor's algorithm
    /// Knots are compared exactly when looking up the multiplicity of `u`.
    ///
    /// # Failures
    /// - `u` is outside of the curve domain
    /// - `u` occurs more than `order` times in the knot vector
    ///
    /// # Example
    /// ```
    /// use deboor::prelude::*;
    /// use nalgebra::DVector;
    /// use approx::assert_relative_eq;
    ///
    /// let mut curve = BSplineCurve::try_new(3, 2, 7, BoundaryMode::Clamped).unwrap();
    /// curve.set_control_points(vec![
    ///     DVector::from_vec(vec![-1.75, -1.0]),
    ///     DVector::from_vec(vec![-1.5, -0.5]),
    ///     DVector::from_vec(vec![-1.5, 0.0]),
    ///     DVector::from_vec(vec![-1.25, 0.5]),
    ///     DVector::from_vec(vec![-0.75, 0.75]),
    ///     DVector::from_vec(vec![0.0, 0.5]),
    ///     DVector::from_vec(vec![0.5, 0.0]),
    /// ]).unwrap();
    ///
    /// let net = curve.try_evaluate(0.4).unwrap();
    /// assert_eq!(net.index(), 4);
    /// assert_eq!(net.multiplicity(), 0);
    /// assert_eq!(net.insertions(), 3);
    /// assert_relative_eq!(net.point()[0], -1.338333, epsilon = 1e-4);
    /// assert_relative_eq!(net.point()[1], 0.288333, epsilon = 1e-4);
    /// ```
    pub fn try_evaluate(&self, u: T) -> Result<DeBoorNet<T>> {
        if !self.contains_parameter(u) {
            return Err(CurveError::ParameterOutOfDomain);
        }

        let knots = self.knots();
        let control_points = self.control_points();
        let degree = self.degree();
        let order = self.order();
        let n = control_points.len();

        let k = knots
            .span_index(u)
            .ok_or(CurveError::ParameterOutOfDomain)?;
        let s = knots.multiplicity_of(u);
        if s > order {
            return Err(CurveError::MultiplicityExceedsOrder {
                multiplicity: s,
                order,
            });
        }

        if s == order {
            // first knot of the run, the curve breaks between control points `first - 1` and `first`
            let first = k + 1 - s;
            let result = if first == 0 {
                DeBoorResult::Single(control_points[0].clone())
            } else if first >= n {
                DeBoorResult::Single(control_points[n - 1].clone())
            } else {
                DeBoorResult::Pair(
                    control_points[first - 1].clone(),
                    control_points[first].clone(),
                )
            };
            let points = result.iter().cloned().collect();
            return Ok(DeBoorNet::new(u, k, s, 0, points, result));
        }

        let insertions = degree - s;
        let lo = k - degree;
        let mut row: Vec<DVector<T>> = control_points[lo..=(k - s)].to_vec();
        let mut points = row.clone();

        for r in 1..=insertions {
            row = ((lo + r)..=(k - s))
                .map(|i| {
                    let span = knots[i + degree - r + 1] - knots[i];
                    let alpha = if span == T::zero() {
                        T::zero()
                    } else {
                        (u - knots[i]) / span
                    };
                    // row holds the points lo + r - 1 ..= k - s of the previous pass
                    let j = i - lo - r;
                    blend(&row[j], &row[j + 1], alpha)
                })
                .collect();
            points.extend(row.iter().cloned());
        }

        let result = DeBoorResult::Single(row[row.len() - 1].clone());
        Ok(DeBoorNet::new(u, k, s, insertions, points, result))
    }

    /// Evaluate the curve at `u` and return the point on it
    /// On a full-multiplicity interior knot the end point of the left segment is returned.
    pub fn try_point_at(&self, u: T) -> Result<DVector<T>> {
        self.try_evaluate(u).map(|net| net.into_result().first().clone())
    }

    /// Sample the curve at a given number of evenly spaced parameters between `start` and `end`
    pub fn try_sample_regular_range(
        &self,
        start: T,
        end: T,
        samples: usize,
    ) -> Result<Vec<DVector<T>>> {
        Ok(self
            .try_sample_regular_range_with_parameter(start, end, samples)?
            .into_iter()
            .map(|(_, p)| p)
            .collect())
    }

    /// Sample the curve at a given number of evenly spaced parameters between `start` and `end`
    /// Return the vector of tuples of parameter and point
    pub fn try_sample_regular_range_with_parameter(
        &self,
        start: T,
        end: T,
        samples: usize,
    ) -> Result<Vec<(T, DVector<T>)>> {
        if samples == 1 {
            return Ok(vec![(start, self.try_point_at(start)?)]);
        }

        let step = (end - start) / T::from_usize_lossy(samples.saturating_sub(1).max(1));
        (0..samples)
            .map(|i| {
                let t = if i + 1 == samples {
                    end
                } else {
                    start + T::from_usize_lossy(i) * step
                };
                self.try_point_at(t).map(|p| (t, p))
            })
            .collect()
    }

    /// Sample the whole domain of the curve at `samples` evenly spaced parameters
    pub fn try_sample_domain(&self, samples: usize) -> Result<Vec<DVector<T>>> {
        let (start, end) = self.knots_domain();
        self.try_sample_regular_range(start, end, samples)
    }
}
