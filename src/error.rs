//! Error categories returned by curve construction and curve operations.

use thiserror::Error;

/// Errors that can occur while building or operating on a B-spline curve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Control points must have at least one coordinate.
    #[error("dimension of control points must be greater than zero")]
    DimensionZero,

    /// A curve needs more control points than its degree.
    #[error("degree {degree} must be less than the number of control points {control_points}")]
    DegreeGreaterOrEqualControlPointCount {
        degree: usize,
        control_points: usize,
    },

    /// A Bézier layout needs every segment to own `order` control points.
    #[error("{knots} knots cannot be split into bezier segments of order {order}")]
    InvalidKnotCountForBezierSegmentation { knots: usize, order: usize },

    /// The parameter lies outside of the curve domain.
    #[error("parameter is outside of the curve domain")]
    ParameterOutOfDomain,

    /// A knot would occur more often than the order of the curve.
    #[error("knot multiplicity {multiplicity} exceeds order {order}")]
    MultiplicityExceedsOrder { multiplicity: usize, order: usize },

    /// A curve of degree zero has no derivative.
    #[error("a curve of degree zero has no derivative")]
    CurveDegreeZero,

    /// A knot span used as divisor has zero width.
    #[error("zero width knot span at index {index}")]
    DivisionByZero { index: usize },

    /// Not enough points for the requested interpolation.
    #[error("too few points: got {actual}, need at least {required}")]
    TooFewPoints { actual: usize, required: usize },

    /// Buffers for the curve could not be allocated.
    #[error("failed to allocate curve storage")]
    AllocationFailure,

    /// The knot vector length does not match `control points + order`.
    #[error("invalid number of knots, got {actual}, expected {expected}")]
    InvalidKnotCount { actual: usize, expected: usize },

    /// Knots must be non-decreasing.
    #[error("knot vector is decreasing at index {index}")]
    DecreasingKnots { index: usize },

    /// All control points must share the curve dimension.
    #[error("control point dimension mismatch, got {actual}, expected {expected}")]
    DimensionMismatch { actual: usize, expected: usize },

    /// A replacement control net must keep the number of control points.
    #[error("invalid number of control points, got {actual}, expected {expected}")]
    ControlPointCountMismatch { actual: usize, expected: usize },

    /// The interpolation system could not be solved.
    #[error("interpolation system is singular")]
    SingularSystem,
}

impl From<std::collections::TryReserveError> for CurveError {
    fn from(_: std::collections::TryReserveError) -> Self {
        CurveError::AllocationFailure
    }
}

/// Result alias used by every fallible operation of the crate.
pub type Result<T> = std::result::Result<T, CurveError>;
