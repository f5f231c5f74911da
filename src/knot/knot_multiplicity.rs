/// A maximal run of equal knots in a knot vector.
#[derive(Clone, Debug, PartialEq)]
pub struct KnotMultiplicity<T> {
    knot: T,
    multiplicity: usize,
    /// index of the first knot of the run
    start: usize,
}

impl<T> KnotMultiplicity<T> {
    pub fn new(knot: T, multiplicity: usize, start: usize) -> Self {
        Self {
            knot,
            multiplicity,
            start,
        }
    }

    pub fn knot(&self) -> &T {
        &self.knot
    }

    pub fn multiplicity(&self) -> usize {
        self.multiplicity
    }

    /// Index of the first knot of the run
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index of the last knot of the run
    pub fn end(&self) -> usize {
        self.start + self.multiplicity - 1
    }
}
