#![allow(clippy::needless_range_loop)]

mod clean;
mod curve;
mod derivative;
mod error;
mod evaluate;
mod interpolation;
mod knot;
mod misc;
mod refine;
mod split;

pub use error::{CurveError, Result};

pub mod prelude {
    pub use crate::clean::*;
    pub use crate::curve::*;
    pub use crate::error::CurveError;
    pub use crate::evaluate::*;
    pub use crate::knot::*;
    pub use crate::misc::*;
    pub use crate::split::*;
}
