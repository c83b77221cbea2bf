/// 2D circle and corner math for annular sectors.
///
/// Angles are measured from the positive x axis towards positive y. In a
/// y-down raster space that is clockwise on screen.
use super::{Point2, Vector2};

/// Returns the point at `angle` on the circle of `radius` around the origin.
#[must_use]
pub fn polar(radius: f64, angle: f64) -> Point2 {
    Point2::new(radius * angle.cos(), radius * angle.sin())
}

/// `asin` with its argument clamped to `[-1, 1]`.
///
/// Floating-point drift can push ratios such as `pad_radius / radius * sin(a)`
/// marginally past 1; this returns ±π/2 instead of NaN.
#[must_use]
pub fn asin_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

/// Intersection of the infinite line through `c`, `d` with the infinite line
/// through `a`, `b`.
///
/// Parallel lines produce non-finite coordinates; callers guard against
/// that case before relying on the result.
#[must_use]
pub fn line_intersection(c: &Point2, d: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let d21: Vector2 = d - c;
    let d43: Vector2 = b - a;
    let ua = (d43.x * (c.y - a.y) - d43.y * (c.x - a.x)) / (d43.y * d21.x - d43.x * d21.y);
    c + d21 * ua
}

/// A circle of radius `|rc|` tangent to both a sector edge and the sector's
/// arc of radius `r1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerTangent {
    /// Centre of the corner circle.
    pub center: Point2,
    /// Where the corner circle touches the straight edge.
    pub edge_point: Point2,
    /// Where the corner circle touches the main arc.
    pub arc_point: Point2,
}

/// Solves the rounded-corner circle at `p0` for the edge `p0 → p1`.
///
/// The edge is offset perpendicular by `rc` (towards the sector interior for
/// `clockwise`, mirrored otherwise); the corner centre is where the offset
/// line meets the circle of radius `r1 - rc` about the origin. Of the two
/// intersections, the one closer to the offset segment's midpoint is used.
/// A negative `rc` puts the corner circle outside the arc, which is what
/// inner corners need.
#[must_use]
pub fn corner_tangent(
    p0: &Point2,
    p1: &Point2,
    r1: f64,
    rc: f64,
    clockwise: bool,
) -> CornerTangent {
    let x01 = p0.x - p1.x;
    let y01 = p0.y - p1.y;
    let lo = (if clockwise { rc } else { -rc }) / x01.hypot(y01);
    let offset = Vector2::new(lo * y01, -lo * x01);

    let a = p0 + offset;
    let b = p1 + offset;
    let mid = Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let d2 = dx * dx + dy * dy;
    let r = r1 - rc;
    let det = a.x * b.y - b.x * a.y;
    let d = if dy < 0.0 { -1.0 } else { 1.0 } * (r * r * d2 - det * det).max(0.0).sqrt();

    let c0 = Point2::new((det * dy - dx * d) / d2, (-det * dx - dy * d) / d2);
    let c1 = Point2::new((det * dy + dx * d) / d2, (-det * dx + dy * d) / d2);

    let center = if (c0 - mid).norm_squared() > (c1 - mid).norm_squared() {
        c1
    } else {
        c0
    };

    CornerTangent {
        center,
        edge_point: center - offset,
        arc_point: Point2::from(center.coords * (r1 / r)),
    }
}
