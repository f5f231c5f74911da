pub mod boundary_mode;
pub mod bspline_curve;
pub mod knot_style;
pub use boundary_mode::*;
pub use bspline_curve::*;
pub use knot_style::*;
