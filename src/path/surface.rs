use crate::math::Point2;

use super::DrawingInstruction;

/// A raster drawing context that a [`super::PathProgram`] can be replayed on.
///
/// The methods mirror the usual 2D canvas primitives.
pub trait DrawingSurface {
    fn move_to(&mut self, p: Point2);

    fn line_to(&mut self, p: Point2);

    fn bezier_curve_to(&mut self, c1: Point2, c2: Point2, p: Point2);

    fn quadratic_curve_to(&mut self, c: Point2, p: Point2);

    /// Adds a circular arc; `anticlockwise` selects decreasing angles.
    fn arc(
        &mut self,
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    );

    fn close_path(&mut self);

    /// Dispatches one instruction to the matching primitive.
    fn apply(&mut self, instruction: &DrawingInstruction) {
        match *instruction {
            DrawingInstruction::MoveTo(p) => self.move_to(p),
            DrawingInstruction::LineTo(p) => self.line_to(p),
            DrawingInstruction::CubicTo(c1, c2, p) => self.bezier_curve_to(c1, c2, p),
            DrawingInstruction::QuadTo(c, p) => self.quadratic_curve_to(c, p),
            DrawingInstruction::ArcTo {
                center,
                radius,
                start_angle,
                end_angle,
                sweep,
            } => self.arc(center, radius, start_angle, end_angle, sweep.is_anticlockwise()),
            DrawingInstruction::ClosePath => self.close_path(),
        }
    }
}
