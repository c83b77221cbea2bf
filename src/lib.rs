pub mod cluster;
pub mod error;
pub mod interpolate;
pub mod math;
pub mod path;
pub mod sequence;
pub mod shape;

pub use error::{ChartGeomError, Result};
