use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Scalar type of knots and control point coordinates (f32, f64)
/// Mainly used to identify the type of the field in nalgebra
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Convert an f64 constant into the scalar type
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert a count or index into the scalar type
    fn from_usize_lossy(value: usize) -> Self {
        Self::from_f64_lossy(value as f64)
    }
}

impl FloatingPoint for f32 {
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }
}

impl FloatingPoint for f64 {
    fn from_f64_lossy(value: f64) -> Self {
        value
    }
}
