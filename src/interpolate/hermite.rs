use tracing::debug;

use crate::math::tangent::{cardinal_tangents, monotone_tangents};
use crate::math::{Point2, Vector2};
use crate::path::{Join, PathBuilder};

use super::linear::{linear, linear_closed};

/// Fraction of the end tangents used for the quadratic lead-in and lead-out.
const QUAD_TANGENT_WEIGHT: f64 = 2.0 / 3.0;

/// Cardinal spline through every point.
pub(super) fn cardinal(points: &[Point2], tension: f64, path: &mut PathBuilder, join: Join) {
    if points.len() < 3 {
        linear(points, path, join);
        return;
    }
    path.join(join, points[0]);
    hermite(points, &cardinal_tangents(points, tension), path);
}

/// Cardinal spline from the second to the second-to-last point, using the
/// end points only as tangent context.
pub(super) fn cardinal_open(points: &[Point2], tension: f64, path: &mut PathBuilder, join: Join) {
    let n = points.len();
    if n < 4 {
        linear(points, path, join);
        return;
    }
    path.join(join, points[1]);
    hermite(&points[1..n - 1], &cardinal_tangents(points, tension), path);
}

/// Periodic cardinal spline.
pub(super) fn cardinal_closed(points: &[Point2], tension: f64, path: &mut PathBuilder, join: Join) {
    let n = points.len();
    if n < 3 {
        linear_closed(points, path, join);
        return;
    }
    let mut ring = Vec::with_capacity(n + 1);
    ring.extend_from_slice(points);
    ring.push(points[0]);

    let mut context = Vec::with_capacity(n + 3);
    context.push(points[n - 1]);
    context.extend_from_slice(&ring);
    context.push(points[1]);

    path.join(join, points[0]);
    hermite(&ring, &cardinal_tangents(&context, tension), path);
    path.close();
}

/// Monotone cubic interpolation.
pub(super) fn monotone(points: &[Point2], path: &mut PathBuilder, join: Join) {
    if points.len() < 3 {
        linear(points, path, join);
        return;
    }
    path.join(join, points[0]);
    hermite(points, &monotone_tangents(points), path);
}

/// Emits Hermite spans through `points` with the given control offsets.
///
/// The pen must already be at `points[0]`. `tangents` either has one entry
/// per point, or two fewer; in the latter case the end spans are quadratics
/// and the tangents belong to the interior points. Any other pairing
/// redraws the points as straight lines.
fn hermite(points: &[Point2], tangents: &[Vector2], path: &mut PathBuilder) {
    let quad = points.len() == tangents.len() + 2;
    if tangents.is_empty() || !(quad || points.len() == tangents.len()) {
        debug!(
            points = points.len(),
            tangents = tangents.len(),
            "tangent count does not match points, drawing straight lines"
        );
        for p in &points[1..] {
            path.line_to(*p);
        }
        return;
    }

    let mut p0 = points[0];
    let mut p = points[1];
    let t0 = tangents[0];
    let mut t = t0;
    let mut pi = 1;

    if quad {
        path.quad_to(p - t0 * QUAD_TANGENT_WEIGHT, p);
        p0 = points[1];
        pi = 2;
    }

    if tangents.len() > 1 {
        t = tangents[1];
        p = points[pi];
        pi += 1;
        path.cubic_to(p0 + t0, p - t, p);
        for &next_t in &tangents[2..] {
            let prev = p;
            let prev_t = t;
            p = points[pi];
            t = next_t;
            path.cubic_to(prev + prev_t, p - t, p);
            pi += 1;
        }
    }

    if quad {
        path.quad_to(p + t * QUAD_TANGENT_WEIGHT, points[pi]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{DrawingInstruction, PathProgram};
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn run(points: &[Point2], f: impl FnOnce(&[Point2], &mut PathBuilder)) -> PathProgram {
        let mut path = PathBuilder::new();
        f(points, &mut path);
        path.build()
    }

    /// Evaluates a cubic Bézier at `t`.
    fn cubic_at(p0: Point2, c1: Point2, c2: Point2, p1: Point2, t: f64) -> Point2 {
        let u = 1.0 - t;
        Point2::from(
            p0.coords * (u * u * u)
                + c1.coords * (3.0 * u * u * t)
                + c2.coords * (3.0 * u * t * t)
                + p1.coords * (t * t * t),
        )
    }

    /// Non-decreasing points with some flat runs, evenly spaced in x or not.
    fn rising(rng: &mut StdRng, n: usize, even: bool) -> Vec<Point2> {
        let step: f64 = rng.gen_range(0.1..5.0);
        let mut x: f64 = rng.gen_range(-50.0..50.0);
        let mut y: f64 = rng.gen_range(-50.0..50.0);
        let x0 = x;
        (0..n)
            .map(|i| {
                let p = Point2::new(x, y);
                #[allow(clippy::cast_precision_loss)]
                let next = if even {
                    x0 + step * (i + 1) as f64
                } else {
                    x + rng.gen_range(0.05..5.0)
                };
                x = next;
                if !rng.gen_bool(0.2) {
                    y += rng.gen_range(0.0..10.0);
                }
                p
            })
            .collect()
    }

    /// The `(start, c1, c2, end)` of every cubic in a monotone path.
    fn cubic_spans(points: &[Point2]) -> Vec<[Point2; 4]> {
        let program = run(points, |p, path| monotone(p, path, Join::Move));
        let mut pen = points[0];
        program
            .iter()
            .skip(1)
            .map(|ins| {
                let DrawingInstruction::CubicTo(c1, c2, end) = *ins else {
                    panic!("monotone spans are cubic, got {ins:?}");
                };
                let span = [pen, c1, c2, end];
                pen = end;
                span
            })
            .collect()
    }

    #[test]
    fn cardinal_passes_through_every_point() {
        let points = pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.0), (4.0, 0.0)]);
        let program = run(&points, |p, path| cardinal(p, 0.5, path, Join::Move));
        let ends: Vec<Point2> = program.iter().filter_map(DrawingInstruction::end_point).collect();
        assert_eq!(ends, points);
    }

    #[test]
    fn cardinal_ends_are_quadratic() {
        let points = pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.0)]);
        let program = run(&points, |p, path| cardinal(p, 0.7, path, Join::Move));
        let ins = program.instructions();
        assert!(matches!(ins[1], DrawingInstruction::QuadTo(..)));
        assert!(matches!(ins[2], DrawingInstruction::CubicTo(..)));
        assert!(matches!(ins[3], DrawingInstruction::QuadTo(..)));
        assert_eq!(ins.len(), 4);
    }

    #[test]
    fn cardinal_three_points_is_two_quadratics() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let program = run(&points, |p, path| cardinal(p, 0.0, path, Join::Move));
        let ins = program.instructions();
        assert_eq!(ins.len(), 3);
        // Tangent at p1 is (p2 - p0) / 2 = (1, 0).
        let DrawingInstruction::QuadTo(c, end) = ins[1] else {
            panic!("expected quad");
        };
        assert_abs_diff_eq!(c.x, 1.0 - 2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.y, 1.0, epsilon = 1e-12);
        assert_eq!(end, points[1]);
        let DrawingInstruction::QuadTo(c, end) = ins[2] else {
            panic!("expected quad");
        };
        assert_abs_diff_eq!(c.x, 1.0 + 2.0 / 3.0, epsilon = 1e-12);
        assert_eq!(end, points[2]);
    }

    #[test]
    fn cardinal_open_starts_at_second_point() {
        let points = pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.0), (4.0, 0.0)]);
        let program = run(&points, |p, path| cardinal_open(p, 0.7, path, Join::Move));
        let ins = program.instructions();
        assert_eq!(ins[0], DrawingInstruction::MoveTo(points[1]));
        assert_eq!(ins.last().and_then(DrawingInstruction::end_point), Some(points[3]));
        assert!(ins[1..]
            .iter()
            .all(|i| matches!(i, DrawingInstruction::CubicTo(..))));
    }

    #[test]
    fn cardinal_closed_wraps_around() {
        let points = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let program = run(&points, |p, path| cardinal_closed(p, 0.7, path, Join::Move));
        let ins = program.instructions();
        // One cubic per edge, including the closing edge.
        let cubics = ins
            .iter()
            .filter(|i| matches!(i, DrawingInstruction::CubicTo(..)))
            .count();
        assert_eq!(cubics, points.len());
        assert_eq!(ins[ins.len() - 2].end_point(), Some(points[0]));
        assert_eq!(ins.last(), Some(&DrawingInstruction::ClosePath));
    }

    #[test]
    fn cardinal_closed_two_points_falls_back() {
        let points = pts(&[(0.0, 0.0), (10.0, 5.0)]);
        let closed = run(&points, |p, path| cardinal_closed(p, 0.3, path, Join::Move));
        let fallback = run(&points, |p, path| linear_closed(p, path, Join::Move));
        assert_eq!(closed, fallback);
        assert_eq!(closed.instructions().last(), Some(&DrawingInstruction::ClosePath));
    }

    #[test]
    fn mismatched_tangents_draw_lines() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0)]);
        let tangents = vec![Vector2::new(1.0, 0.0)];
        let mut path = PathBuilder::new();
        path.move_to(points[0]);
        hermite(&points, &tangents, &mut path);
        let program = path.build();
        let lines = program
            .iter()
            .filter(|i| matches!(i, DrawingInstruction::LineTo(_)))
            .count();
        assert_eq!(lines, 3);
    }

    #[test]
    fn monotone_never_decreases() {
        let points = pts(&[
            (0.0, 0.0),
            (1.0, 0.1),
            (2.0, 0.2),
            (3.0, 5.0),
            (4.0, 5.1),
            (5.0, 9.0),
            (6.0, 9.0),
            (7.0, 12.0),
        ]);
        let program = run(&points, |p, path| monotone(p, path, Join::Move));

        let mut pen = points[0];
        for ins in program.iter().skip(1) {
            let DrawingInstruction::CubicTo(c1, c2, end) = *ins else {
                panic!("monotone spans are cubic, got {ins:?}");
            };
            let mut last_y = pen.y;
            for k in 1..=32 {
                let y = cubic_at(pen, c1, c2, end, f64::from(k) / 32.0).y;
                assert!(y >= last_y - 1e-12, "y dropped from {last_y} to {y}");
                last_y = y;
            }
            pen = end;
        }
        assert_eq!(pen, points[points.len() - 1]);
    }

    #[test]
    fn random_evenly_spaced_data_never_decreases() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..2000 {
            let n = rng.gen_range(3..=12);
            let points = rising(&mut rng, n, true);
            let scale = 1.0 + points.iter().map(|p| p.y.abs()).fold(0.0, f64::max);
            for [p0, c1, c2, p1] in cubic_spans(&points) {
                let mut last_y = p0.y;
                for k in 1..=32 {
                    let y = cubic_at(p0, c1, c2, p1, f64::from(k) / 32.0).y;
                    assert!(
                        y >= last_y - 1e-9 * scale,
                        "y dropped from {last_y} to {y} in {points:?}"
                    );
                    last_y = y;
                }
            }
        }
    }

    #[test]
    fn random_uneven_spacing_bounds_the_overshoot() {
        let mut rng = StdRng::seed_from_u64(20_000);
        for _ in 0..2000 {
            let n = rng.gen_range(3..=12);
            let points = rising(&mut rng, n, false);
            let last = n - 1;
            let window = |i: usize| points[(i + 1).min(last)].x - points[i.saturating_sub(1)].x;
            let scale = 1.0 + points.iter().map(|p| p.y.abs()).fold(0.0, f64::max);
            let tol = 1e-9 * scale;

            for (i, [p0, c1, c2, p1]) in cubic_spans(&points).into_iter().enumerate() {
                assert_eq!(p1, points[i + 1]);
                assert!(p1.y >= p0.y);
                // Control offsets never point downhill and never rise above
                // a twelfth of the neighbour window.
                assert!(c1.y >= p0.y - tol && c1.y - p0.y <= window(i) / 12.0 + tol);
                assert!(p1.y >= c2.y - tol && p1.y - c2.y <= window(i + 1) / 12.0 + tol);

                for k in 0..=32 {
                    let y = cubic_at(p0, c1, c2, p1, f64::from(k) / 32.0).y;
                    if p0.y == p1.y {
                        assert_abs_diff_eq!(y, p0.y, epsilon = tol);
                    }
                    assert!(y <= p1.y + window(i) / 12.0 + tol, "{y} above {p1:?}");
                    assert!(y >= p0.y - window(i + 1) / 12.0 - tol, "{y} below {p0:?}");
                }
            }
        }
    }
}
