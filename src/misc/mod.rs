pub mod control_net;
pub mod floating_point;

pub use control_net::*;
pub use floating_point::*;
