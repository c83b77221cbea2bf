//! Per-point tangents for Hermite curve fitting.

use super::{Point2, Vector2, EPSILON};

/// Above this value of `a² + b²` the Fritsch–Carlson tangents are pulled back
/// onto the circle of radius 3.
const OVERSHOOT_LIMIT: f64 = 9.0;

/// Computes cardinal spline tangents for the interior points of `points`.
///
/// Tangent `i` belongs to `points[i + 1]` and equals
/// `(1 - tension) / 2 * (points[i + 2] - points[i])`. With fewer than three
/// points the result is empty.
#[must_use]
pub fn cardinal_tangents(points: &[Point2], tension: f64) -> Vec<Vector2> {
    let a = (1.0 - tension) / 2.0;
    points
        .windows(3)
        .map(|w| (w[2] - w[0]) * a)
        .collect()
}

/// Computes monotonicity-preserving tangents (Fritsch–Carlson) for every
/// point in `points`.
///
/// The returned vectors are control-point offsets: a span from `p[i]` to
/// `p[i + 1]` uses `p[i] + t[i]` and `p[i + 1] - t[i + 1]` as its cubic
/// control points. With fewer than two points the result is empty.
///
/// Offsets are scaled by the x-width of each point's neighbour window, so
/// spans are monotone for evenly spaced points. With uneven spacing a span
/// can overshoot its end, by at most a twelfth of that window width.
#[must_use]
pub fn monotone_tangents(points: &[Point2]) -> Vec<Vector2> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let last = n - 1;

    let mut m = finite_differences(points);

    for i in 0..last {
        let d = slope(&points[i], &points[i + 1]);
        if d.abs() < EPSILON {
            m[i] = 0.0;
            m[i + 1] = 0.0;
        } else {
            let a = m[i] / d;
            let b = m[i + 1] / d;
            let s = a * a + b * b;
            if s > OVERSHOOT_LIMIT {
                let s = d * 3.0 / s.sqrt();
                m[i] = s * a;
                m[i + 1] = s * b;
            }
        }
    }

    (0..n)
        .map(|i| {
            let dx = points[(i + 1).min(last)].x - points[i.saturating_sub(1)].x;
            let s = dx / (6.0 * (1.0 + m[i] * m[i]));
            Vector2::new(nan_to_zero(s), nan_to_zero(m[i] * s))
        })
        .collect()
}

/// Slope of the secant from `p0` to `p1`.
fn slope(p0: &Point2, p1: &Point2) -> f64 {
    (p1.y - p0.y) / (p1.x - p0.x)
}

/// Initial tangent slopes: the mean of the adjacent secants, or the single
/// secant at either end.
fn finite_differences(points: &[Point2]) -> Vec<f64> {
    let last = points.len() - 1;
    let mut m = Vec::with_capacity(points.len());
    let mut d = slope(&points[0], &points[1]);
    m.push(d);
    for i in 1..last {
        let next = slope(&points[i], &points[i + 1]);
        m.push((d + next) / 2.0);
        d = next;
    }
    m.push(d);
    m
}

fn nan_to_zero(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v
    }
}
