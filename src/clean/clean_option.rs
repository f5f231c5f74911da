use crate::misc::FloatingPoint;

/// Options for cleaning a curve
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CleanOptions<T: FloatingPoint> {
    /// Squared distance below which two control points are considered coincident
    pub tolerance: T,
}

impl<T: FloatingPoint> Default for CleanOptions<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from_f64_lossy(1e-6),
        }
    }
}

impl<T: FloatingPoint> CleanOptions<T> {
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }
}
