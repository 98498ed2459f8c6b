pub mod config;

pub mod x_from_y;
pub mod y_from_x;

pub use config::{GapPredicate, Selector};
pub use x_from_y::{crossings, interpolate_x, XFromYCfg};
pub use y_from_x::{interpolate_y, interpolate_y_many, YFromXCfg};
