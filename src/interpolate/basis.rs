use crate::math::Point2;
use crate::path::{Join, PathBuilder};

use super::linear::{linear, linear_closed};

/// B-spline to Bézier conversion weights for the first control point.
const B1: [f64; 4] = [0.0, 2.0 / 3.0, 1.0 / 3.0, 0.0];
/// Weights for the second control point.
const B2: [f64; 4] = [0.0, 1.0 / 3.0, 2.0 / 3.0, 0.0];
/// Weights for the on-curve end point.
const B3: [f64; 4] = [0.0, 1.0 / 6.0, 2.0 / 3.0, 1.0 / 6.0];

/// Sliding window of four consecutive control points.
struct Window([Point2; 4]);

impl Window {
    fn dot(&self, weights: [f64; 4]) -> Point2 {
        let mut x = 0.0;
        let mut y = 0.0;
        for (w, p) in weights.iter().zip(&self.0) {
            x += w * p.x;
            y += w * p.y;
        }
        Point2::new(x, y)
    }

    fn push(&mut self, p: Point2) {
        self.0.rotate_left(1);
        self.0[3] = p;
    }

    /// Emits the Bézier span for the current window.
    fn emit(&self, path: &mut PathBuilder) {
        path.cubic_to(self.dot(B1), self.dot(B2), self.dot(B3));
    }
}

/// Uniform cubic B-spline clamped to the end points.
pub(super) fn basis(points: &[Point2], path: &mut PathBuilder, join: Join) {
    let n = points.len();
    if n < 3 {
        linear(points, path, join);
        return;
    }
    let first = points[0];
    let last = points[n - 1];

    let mut window = Window([first, first, first, points[1]]);
    path.join(join, first);
    path.line_to(window.dot(B3));
    for &p in points[2..].iter().chain(std::iter::once(&last)) {
        window.push(p);
        window.emit(path);
    }
    path.line_to(last);
}

/// Uniform cubic B-spline that starts and ends inside the point hull.
pub(super) fn basis_open(points: &[Point2], path: &mut PathBuilder, join: Join) {
    if points.len() < 4 {
        linear(points, path, join);
        return;
    }
    let mut window = Window([Point2::origin(), points[0], points[1], points[2]]);
    path.join(join, window.dot(B3));
    for &p in &points[3..] {
        window.push(p);
        window.emit(path);
    }
}

/// Periodic uniform cubic B-spline.
pub(super) fn basis_closed(points: &[Point2], path: &mut PathBuilder, join: Join) {
    let n = points.len();
    if n < 3 {
        linear_closed(points, path, join);
        return;
    }
    let mut window = Window([points[0], points[1], points[2], points[3 % n]]);
    path.join(join, window.dot(B3));
    for i in 4..n + 4 {
        window.push(points[i % n]);
        window.emit(path);
    }
    path.close();
}

/// Straightens the points towards the chord from first to last by
/// `1 - tension`, then draws a clamped B-spline.
pub(super) fn bundle(points: &[Point2], tension: f64, path: &mut PathBuilder, join: Join) {
    let n = points.len().saturating_sub(1);
    if n == 0 {
        basis(points, path, join);
        return;
    }
    let first = points[0];
    let chord = points[n] - first;
    #[allow(clippy::cast_precision_loss)]
    let straightened: Vec<Point2> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let t = i as f64 / n as f64;
            let on_chord = first + chord * t;
            Point2::from(p.coords * tension + on_chord.coords * (1.0 - tension))
        })
        .collect();
    basis(&straightened, path, join);
}
