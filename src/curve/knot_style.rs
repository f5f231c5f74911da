use itertools::Itertools;
use nalgebra::DVector;

use crate::misc::{distance_squared, FloatingPoint};

/// Parameterization of the points passed to the interpolator
/// https://en.wikipedia.org/wiki/Centripetal_Catmull%E2%80%93Rom_spline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KnotStyle {
    #[default]
    Uniform,
    Chordal,
    Centripetal,
}

impl KnotStyle {
    /// Assign a parameter in `[0, 1]` to every point
    /// Coincident consecutive points produce repeated parameters with the chordal styles
    pub fn parameterize<T: FloatingPoint>(&self, points: &[DVector<T>]) -> Vec<T> {
        let n = points.len();
        if n < 2 {
            return vec![T::zero(); n];
        }

        match self {
            KnotStyle::Uniform => {
                let last = T::from_usize_lossy(n - 1);
                (0..n).map(|i| T::from_usize_lossy(i) / last).collect()
            }
            KnotStyle::Chordal | KnotStyle::Centripetal => {
                let alpha = self.alpha::<T>();
                let mut params = Vec::with_capacity(n);
                params.push(T::zero());
                points
                    .iter()
                    .tuple_windows()
                    .map(|(a, b)| distance_squared(a, b).sqrt().powf(alpha))
                    .for_each(|d| {
                        let last = params[params.len() - 1];
                        params.push(last + d);
                    });

                let total = params[n - 1];
                if total > T::zero() {
                    params.iter_mut().for_each(|p| *p /= total);
                }
                params
            }
        }
    }

    fn alpha<T: FloatingPoint>(&self) -> T {
        match self {
            KnotStyle::Uniform => T::zero(),
            KnotStyle::Chordal => T::one(),
            KnotStyle::Centripetal => T::from_f64_lossy(0.5),
        }
    }
}
