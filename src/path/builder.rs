use crate::math::Point2;

use super::{DrawingInstruction, PathProgram, SweepDirection};

/// How a traced segment attaches to whatever the builder already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    /// Start a new sub-path at the segment's first point.
    Move,
    /// Draw a straight line to the segment's first point.
    Line,
}

/// Accumulates drawing instructions for one [`PathProgram`].
///
/// Every shape generator threads a `&mut PathBuilder` through its helpers
/// and calls [`PathBuilder::build`] once at the end.
#[derive(Debug, Default)]
pub struct PathBuilder {
    instructions: Vec<DrawingInstruction>,
    current: Option<Point2>,
    sub_path_start: Option<Point2>,
}

impl PathBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing has been emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The pen position after the last instruction.
    #[must_use]
    pub fn current_point(&self) -> Option<Point2> {
        self.current
    }

    pub fn move_to(&mut self, p: Point2) {
        self.current = Some(p);
        self.sub_path_start = Some(p);
        self.instructions.push(DrawingInstruction::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point2) {
        self.current = Some(p);
        self.instructions.push(DrawingInstruction::LineTo(p));
    }

    /// Attaches to `p` with either a move or a line.
    pub fn join(&mut self, join: Join, p: Point2) {
        match join {
            Join::Move => self.move_to(p),
            Join::Line => self.line_to(p),
        }
    }

    /// Horizontal line to `x`, keeping the current y (0 on an empty path).
    pub fn horizontal_to(&mut self, x: f64) {
        let y = self.current.map_or(0.0, |p| p.y);
        self.line_to(Point2::new(x, y));
    }

    /// Vertical line to `y`, keeping the current x (0 on an empty path).
    pub fn vertical_to(&mut self, y: f64) {
        let x = self.current.map_or(0.0, |p| p.x);
        self.line_to(Point2::new(x, y));
    }

    pub fn cubic_to(&mut self, c1: Point2, c2: Point2, p: Point2) {
        self.current = Some(p);
        self.instructions.push(DrawingInstruction::CubicTo(c1, c2, p));
    }

    pub fn quad_to(&mut self, c: Point2, p: Point2) {
        self.current = Some(p);
        self.instructions.push(DrawingInstruction::QuadTo(c, p));
    }

    pub fn arc_to(
        &mut self,
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        sweep: SweepDirection,
    ) {
        let instruction = DrawingInstruction::ArcTo {
            center,
            radius,
            start_angle,
            end_angle,
            sweep,
        };
        self.current = instruction.end_point();
        self.instructions.push(instruction);
    }

    /// Closes the current sub-path; the pen returns to its start.
    pub fn close(&mut self) {
        self.current = self.sub_path_start;
        self.instructions.push(DrawingInstruction::ClosePath);
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> PathProgram {
        PathProgram {
            instructions: self.instructions,
        }
    }
}
