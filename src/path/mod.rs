mod builder;
mod surface;

pub use builder::{Join, PathBuilder};
pub use surface::DrawingSurface;

use crate::math::Point2;

/// Direction in which an [`DrawingInstruction::ArcTo`] sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    /// Towards increasing angles (clockwise on a y-down raster).
    Clockwise,
    /// Towards decreasing angles.
    CounterClockwise,
}

impl SweepDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    /// The canvas `anticlockwise` flag for this direction.
    #[must_use]
    pub fn is_anticlockwise(self) -> bool {
        self == Self::CounterClockwise
    }
}

/// A single low-level drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingInstruction {
    /// Starts a new sub-path at the point.
    MoveTo(Point2),
    /// Straight line to the point.
    LineTo(Point2),
    /// Cubic Bézier with two control points, ending at the last point.
    CubicTo(Point2, Point2, Point2),
    /// Quadratic Bézier with one control point, ending at the last point.
    QuadTo(Point2, Point2),
    /// Circular arc about `center`.
    ///
    /// If the current point is not the arc's start point, a straight line
    /// joins them first (canvas `arc` semantics).
    ArcTo {
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        sweep: SweepDirection,
    },
    /// Closes the current sub-path.
    ClosePath,
}

impl DrawingInstruction {
    /// The point this instruction leaves the pen at, if it moves the pen.
    #[must_use]
    pub fn end_point(&self) -> Option<Point2> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) | Self::CubicTo(_, _, p) | Self::QuadTo(_, p) => {
                Some(p)
            }
            Self::ArcTo {
                center,
                radius,
                end_angle,
                ..
            } => Some(Point2::new(
                center.x + radius * end_angle.cos(),
                center.y + radius * end_angle.sin(),
            )),
            Self::ClosePath => None,
        }
    }
}

/// An ordered, immutable sequence of drawing instructions.
///
/// Produced once by a shape generator and replayed by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathProgram {
    instructions: Vec<DrawingInstruction>,
}

impl PathProgram {
    /// Returns the instructions in order.
    #[must_use]
    pub fn instructions(&self) -> &[DrawingInstruction] {
        &self.instructions
    }

    /// Iterates over the instructions.
    pub fn iter(&self) -> std::slice::Iter<'_, DrawingInstruction> {
        self.instructions.iter()
    }

    /// Number of instructions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program draws nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of sub-paths (one per `MoveTo`).
    #[must_use]
    pub fn sub_path_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, DrawingInstruction::MoveTo(_)))
            .count()
    }

    /// Replays every instruction against `surface`.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        for instruction in &self.instructions {
            surface.apply(instruction);
        }
    }
}

impl<'a> IntoIterator for &'a PathProgram {
    type Item = &'a DrawingInstruction;
    type IntoIter = std::slice::Iter<'a, DrawingInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl IntoIterator for PathProgram {
    type Item = DrawingInstruction;
    type IntoIter = std::vec::IntoIter<DrawingInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}
