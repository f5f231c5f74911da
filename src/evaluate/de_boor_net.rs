use nalgebra::DVector;

use crate::misc::FloatingPoint;

/// Point(s) a De Boor evaluation resolves to
/// A parameter sitting on a full-multiplicity interior knot belongs to two segments,
/// so the evaluation yields the end of the left one and the start of the right one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeBoorResult<T: FloatingPoint> {
    Single(DVector<T>),
    Pair(DVector<T>, DVector<T>),
}

impl<T: FloatingPoint> DeBoorResult<T> {
    pub fn len(&self) -> usize {
        match self {
            DeBoorResult::Single(_) => 1,
            DeBoorResult::Pair(_, _) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The only point, or the left one of a pair
    pub fn first(&self) -> &DVector<T> {
        match self {
            DeBoorResult::Single(p) => p,
            DeBoorResult::Pair(p, _) => p,
        }
    }

    /// The only point, or the right one of a pair
    pub fn last(&self) -> &DVector<T> {
        match self {
            DeBoorResult::Single(p) => p,
            DeBoorResult::Pair(_, p) => p,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DVector<T>> {
        let (a, b) = match self {
            DeBoorResult::Single(p) => (p, None),
            DeBoorResult::Pair(p, q) => (p, Some(q)),
        };
        std::iter::once(a).chain(b)
    }
}

/// The De Boor triangle computed while evaluating a curve at a parameter
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeBoorNet<T: FloatingPoint> {
    parameter: T,
    index: usize,
    multiplicity: usize,
    insertions: usize,
    /// all points of the triangle, row by row, the initial control points first
    points: Vec<DVector<T>>,
    result: DeBoorResult<T>,
}

impl<T: FloatingPoint> DeBoorNet<T> {
    pub(crate) fn new(
        parameter: T,
        index: usize,
        multiplicity: usize,
        insertions: usize,
        points: Vec<DVector<T>>,
        result: DeBoorResult<T>,
    ) -> Self {
        Self {
            parameter,
            index,
            multiplicity,
            insertions,
            points,
            result,
        }
    }

    /// The evaluated parameter
    pub fn parameter(&self) -> T {
        self.parameter
    }

    /// Index of the last knot less than or equal to the parameter
    pub fn index(&self) -> usize {
        self.index
    }

    /// How often the parameter occurs in the knot vector
    pub fn multiplicity(&self) -> usize {
        self.multiplicity
    }

    /// Number of knot insertions needed to reach the curve point
    pub fn insertions(&self) -> usize {
        self.insertions
    }

    /// Number of coordinates of the computed points
    pub fn dimension(&self) -> usize {
        self.result.first().len()
    }

    pub fn points(&self) -> &[DVector<T>] {
        &self.points
    }

    pub fn result(&self) -> &DeBoorResult<T> {
        &self.result
    }

    /// The point on the curve, the left one if the parameter splits two segments
    pub fn point(&self) -> &DVector<T> {
        self.result.first()
    }

    pub fn into_result(self) -> DeBoorResult<T> {
        self.result
    }
}
