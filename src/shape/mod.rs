mod arc;
mod area;
mod line;

pub use arc::{Arc, ArcSpec};
pub use area::Area;
pub use line::Line;

use std::f64::consts::FRAC_PI_2;

use crate::math::Point2;

/// Maps a record and its index to one coordinate.
pub type Accessor<T> = Box<dyn Fn(&T, usize) -> f64>;

/// Decides whether a record takes part in the shape.
pub type Predicate<T> = Box<dyn Fn(&T, usize) -> bool>;

/// How accessor output is turned into drawing coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// `(x, y)` is used as is.
    #[default]
    Cartesian,
    /// `(x, y)` is read as `(radius, angle)`, angle 0 at 12 o'clock and
    /// increasing clockwise.
    Radial,
}

impl Projection {
    /// Projects one accessor pair.
    #[must_use]
    pub fn project(self, x: f64, y: f64) -> Point2 {
        match self {
            Self::Cartesian => Point2::new(x, y),
            Self::Radial => {
                let a = y - FRAC_PI_2;
                Point2::new(x * a.cos(), x * a.sin())
            }
        }
    }
}

/// Splits `data` into maximal runs of consecutive defined records and hands
/// each run's indices to `f`.
fn for_each_defined_run<T>(
    data: &[T],
    defined: &dyn Fn(&T, usize) -> bool,
    mut f: impl FnMut(std::ops::Range<usize>),
) {
    let mut start = None;
    for (i, d) in data.iter().enumerate() {
        match (defined(d, i), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                f(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        f(s..data.len());
    }
}
