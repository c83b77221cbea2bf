use std::f64::consts::{FRAC_PI_2, PI, TAU};

use tracing::{debug, trace};

use crate::math::arc_2d::{asin_clamped, corner_tangent, line_intersection, polar};
use crate::math::{Point2, EPSILON};
use crate::path::{PathBuilder, PathProgram, SweepDirection};

/// Corner radii at or below this are drawn as sharp joins.
const MIN_CORNER_RADIUS: f64 = 1e-3;

/// Parameters of an annular sector.
///
/// Angles are in radians with 0 at 12 o'clock, increasing clockwise on a
/// y-down raster.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArcSpec {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Angular gap left between adjacent sectors, split evenly on both sides.
    pub pad_angle: f64,
    /// Radius at which the pad gap is measured; defaults to
    /// `sqrt(inner² + outer²)`.
    pub pad_radius: Option<f64>,
    /// Requested corner rounding, clamped to half the radial thickness.
    pub corner_radius: f64,
}

impl ArcSpec {
    /// Creates an unpadded sector with sharp corners.
    #[must_use]
    pub fn new(inner_radius: f64, outer_radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle;
        self
    }

    #[must_use]
    pub fn pad_radius(mut self, pad_radius: f64) -> Self {
        self.pad_radius = Some(pad_radius);
        self
    }

    #[must_use]
    pub fn corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }
}

/// One boundary arc of the sector after padding.
#[derive(Debug, Clone, Copy)]
enum Edge {
    /// Arc of `radius` from `start` to `end` (canonical angles).
    Span { radius: f64, start: f64, end: f64 },
    /// The arc shrank to a single corner point.
    Point(Point2),
}

impl Edge {
    fn first(&self) -> Point2 {
        match *self {
            Self::Span { radius, start, .. } => polar(radius, start),
            Self::Point(p) => p,
        }
    }

    fn last(&self) -> Point2 {
        match *self {
            Self::Span { radius, end, .. } => polar(radius, end),
            Self::Point(p) => p,
        }
    }
}

/// Generates the closed outline of an annular sector.
#[derive(Debug, Clone)]
pub struct Arc {
    spec: ArcSpec,
}

impl Arc {
    /// Creates a new arc generator.
    #[must_use]
    pub fn new(spec: ArcSpec) -> Self {
        Self { spec }
    }

    /// Returns the sector parameters.
    #[must_use]
    pub fn spec(&self) -> &ArcSpec {
        &self.spec
    }

    /// The midpoint of the sector at mean radius and mean angle, as used for
    /// label placement.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        let r = (self.spec.inner_radius + self.spec.outer_radius) / 2.0;
        let a = (self.spec.start_angle + self.spec.end_angle) / 2.0 - FRAC_PI_2;
        polar(r, a)
    }

    /// Builds the sector outline.
    ///
    /// Never fails: degenerate padding collapses edges to points and
    /// oversized corner radii are clamped.
    #[must_use]
    pub fn generate(&self) -> PathProgram {
        let spec = &self.spec;
        let mut r0 = spec.inner_radius.max(0.0);
        let mut r1 = spec.outer_radius.max(0.0);
        if r1 < r0 {
            std::mem::swap(&mut r0, &mut r1);
        }
        let a0 = spec.start_angle - FRAC_PI_2;
        let a1 = spec.end_angle - FRAC_PI_2;
        let da = (a1 - a0).abs();
        let cw = a0 <= a1;
        let sweep = if cw {
            SweepDirection::Clockwise
        } else {
            SweepDirection::CounterClockwise
        };

        let mut path = PathBuilder::new();

        if da >= TAU - EPSILON {
            if r1 > 0.0 {
                full_circle(&mut path, r1, sweep);
            }
            if r0 > 0.0 {
                full_circle(&mut path, r0, sweep.reversed());
            }
            return path.build();
        }

        let (p0, p1) = self.pad_insets(r0, r1, cw);
        let dir = if cw { 1.0 } else { -1.0 };
        let mid = (a0 + a1) / 2.0;

        let outer = if r1 > 0.0 {
            edge(r1, a0 + p1, a1 - p1, p1, dir, mid)
        } else {
            Edge::Point(Point2::origin())
        };
        let inner = if r0 > 0.0 {
            edge(r0, a1 - p0, a0 + p0, p0, -dir, mid)
        } else {
            Edge::Point(Point2::origin())
        };

        let rc = ((r1 - r0) / 2.0).min(spec.corner_radius.max(0.0));
        if da > EPSILON && rc > MIN_CORNER_RADIUS {
            let (rc0, rc1) = limit_corner_radii(rc, r0, r1, da, &outer, &inner);
            rounded_outer(&mut path, &outer, &inner, r1, rc, rc1, sweep);
            rounded_inner(&mut path, &outer, &inner, r0, rc, rc0, sweep);
        } else {
            match outer {
                Edge::Span { radius, start, end } => {
                    path.move_to(outer.first());
                    path.arc_to(Point2::origin(), radius, start, end, sweep);
                }
                Edge::Point(p) => path.move_to(p),
            }
            match inner {
                Edge::Span { radius, start, end } => {
                    path.line_to(inner.first());
                    path.arc_to(Point2::origin(), radius, start, end, sweep.reversed());
                }
                Edge::Point(p) => path.line_to(p),
            }
        }
        path.close();
        path.build()
    }

    /// Angular insets `(inner, outer)` that keep a constant-width gap of
    /// `pad_radius * sin(pad_angle / 2)` on each side, signed so that they
    /// always move inward along the sweep.
    fn pad_insets(&self, r0: f64, r1: f64, cw: bool) -> (f64, f64) {
        let ap = self.spec.pad_angle / 2.0;
        if ap <= 0.0 {
            return (0.0, 0.0);
        }
        let rp = self
            .spec
            .pad_radius
            .unwrap_or_else(|| (r0 * r0 + r1 * r1).sqrt());
        let sign = if cw { 1.0 } else { -1.0 };
        let inset = |r: f64| {
            if r > 0.0 {
                sign * asin_clamped(rp / r * ap.sin())
            } else {
                0.0
            }
        };
        (inset(r0), inset(r1))
    }
}

/// Builds one boundary arc, collapsing it to the midpoint when padding
/// leaves no more than `EPSILON` of it.
fn edge(radius: f64, start: f64, end: f64, inset: f64, dir: f64, mid: f64) -> Edge {
    if inset != 0.0 && (end - start) * dir <= EPSILON {
        debug!(radius, "padding consumed the arc, collapsing to a point");
        Edge::Point(polar(radius, mid))
    } else {
        Edge::Span { radius, start, end }
    }
}

fn full_circle(path: &mut PathBuilder, r: f64, sweep: SweepDirection) {
    let turn = match sweep {
        SweepDirection::Clockwise => TAU,
        SweepDirection::CounterClockwise => -TAU,
    };
    path.move_to(Point2::new(0.0, r));
    path.arc_to(Point2::origin(), r, FRAC_PI_2, FRAC_PI_2 + turn, sweep);
    path.close();
}

/// Shrinks the corner radii of sectors narrower than a half turn so that
/// the corner circles fit between the two edges. Returns `(inner, outer)`.
fn limit_corner_radii(
    rc: f64,
    r0: f64,
    r1: f64,
    da: f64,
    outer: &Edge,
    inner: &Edge,
) -> (f64, f64) {
    if da >= PI {
        return (rc, rc);
    }
    let Edge::Span { .. } = outer else {
        return (rc, rc);
    };
    let c0 = outer.first();
    let c1 = outer.last();
    let apex = match inner {
        Edge::Point(p) => *p,
        Edge::Span { .. } => line_intersection(&c0, &inner.last(), &c1, &inner.first()),
    };
    let a = c0 - apex;
    let b = c1 - apex;
    let kc = 1.0 / ((a.dot(&b) / (a.norm() * b.norm())).acos() / 2.0).sin();
    let lc = apex.coords.norm();
    // f64::min ignores NaN, so a degenerate wedge keeps the requested radius.
    let rc0 = rc.min((r0 - lc) / (kc - 1.0)).max(0.0);
    let rc1 = rc.min((r1 - lc) / (kc + 1.0)).max(0.0);
    if rc0 < rc || rc1 < rc {
        trace!(rc, rc0, rc1, "corner radii limited by sector width");
    }
    (rc0, rc1)
}

fn rounded_outer(
    path: &mut PathBuilder,
    outer: &Edge,
    inner: &Edge,
    r1: f64,
    rc: f64,
    rc1: f64,
    sweep: SweepDirection,
) {
    let Edge::Span { radius, start, end } = *outer else {
        path.move_to(outer.first());
        return;
    };
    if rc1 <= MIN_CORNER_RADIUS {
        path.move_to(outer.first());
        path.arc_to(Point2::origin(), radius, start, end, sweep);
        return;
    }

    let cw = sweep == SweepDirection::Clockwise;
    let t30 = corner_tangent(&inner.last(), &outer.first(), r1, rc1, cw);
    let t12 = corner_tangent(&outer.last(), &inner.first(), r1, rc1, cw);

    path.move_to(t30.edge_point);
    if rc1 >= rc {
        arc_between(path, t30.center, rc1, t30.edge_point, t30.arc_point, sweep);
        let span = (end - start).abs();
        boundary_arc(path, r1, t30.arc_point, t12.arc_point, sweep, span);
        arc_between(path, t12.center, rc1, t12.arc_point, t12.edge_point, sweep);
    } else {
        // Both corner circles coincide: one arc spans the whole outer end.
        let center = nalgebra::center(&t30.center, &t12.center);
        arc_between(path, center, rc1, t30.edge_point, t12.edge_point, sweep);
    }
}

fn rounded_inner(
    path: &mut PathBuilder,
    outer: &Edge,
    inner: &Edge,
    r0: f64,
    rc: f64,
    rc0: f64,
    sweep: SweepDirection,
) {
    let Edge::Span { radius, start, end } = *inner else {
        path.line_to(inner.first());
        return;
    };
    if rc0 <= MIN_CORNER_RADIUS {
        path.line_to(inner.first());
        path.arc_to(Point2::origin(), radius, start, end, sweep.reversed());
        return;
    }

    let cw = sweep == SweepDirection::Clockwise;
    let t03 = corner_tangent(&outer.first(), &inner.last(), r0, -rc0, cw);
    let t21 = corner_tangent(&inner.first(), &outer.last(), r0, -rc0, cw);

    path.line_to(t21.edge_point);
    if rc0 >= rc {
        arc_between(path, t21.center, rc0, t21.edge_point, t21.arc_point, sweep);
        let span = (end - start).abs();
        boundary_arc(path, r0, t21.arc_point, t03.arc_point, sweep.reversed(), span);
        arc_between(path, t03.center, rc0, t03.arc_point, t03.edge_point, sweep);
    } else {
        let center = nalgebra::center(&t21.center, &t03.center);
        arc_between(path, center, rc0, t21.edge_point, t03.edge_point, sweep);
    }
}

/// Emits the arc about `center` from `from` to `to`, travelling in `sweep`.
fn arc_between(
    path: &mut PathBuilder,
    center: Point2,
    radius: f64,
    from: Point2,
    to: Point2,
    sweep: SweepDirection,
) {
    let (start, delta) = sweep_angles(center, from, to, sweep);
    path.arc_to(center, radius, start, start + delta, sweep);
}

/// Emits the part of a sector boundary between its two corner circles.
///
/// Corner circles on sectors wider than a half turn are not limited, and
/// when they overlap the tangent points pass each other. The sweep would
/// then loop almost a full turn, so anything longer than the padded `span`
/// is drawn empty.
fn boundary_arc(
    path: &mut PathBuilder,
    radius: f64,
    from: Point2,
    to: Point2,
    sweep: SweepDirection,
    span: f64,
) {
    let center = Point2::origin();
    let (start, mut delta) = sweep_angles(center, from, to, sweep);
    if delta.abs() > span + EPSILON {
        debug!(radius, delta, span, "corner circles overlap, dropping boundary arc");
        delta = 0.0;
    }
    path.arc_to(center, radius, start, start + delta, sweep);
}

/// Start angle of `from` about `center` and the signed turn to `to` in
/// `sweep`. Turns within `EPSILON` of a full circle count as empty.
fn sweep_angles(center: Point2, from: Point2, to: Point2, sweep: SweepDirection) -> (f64, f64) {
    let start = (from.y - center.y).atan2(from.x - center.x);
    let end = (to.y - center.y).atan2(to.x - center.x);
    let delta = match sweep {
        SweepDirection::Clockwise => (end - start).rem_euclid(TAU),
        SweepDirection::CounterClockwise => -(start - end).rem_euclid(TAU),
    };
    if delta.abs() > TAU - EPSILON {
        (start, 0.0)
    } else {
        (start, delta)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::path::DrawingInstruction;
    use approx::assert_abs_diff_eq;

    fn arcs(program: &PathProgram) -> Vec<(Point2, f64, f64, f64, SweepDirection)> {
        program
            .iter()
            .filter_map(|i| match *i {
                DrawingInstruction::ArcTo {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    sweep,
                } => Some((center, radius, start_angle, end_angle, sweep)),
                _ => None,
            })
            .collect()
    }

    /// Every arc must start where the pen already is.
    fn assert_continuous(program: &PathProgram, tol: f64) {
        let mut pen: Option<Point2> = None;
        let mut sub_path_start: Option<Point2> = None;
        for ins in program {
            match *ins {
                DrawingInstruction::ArcTo {
                    center,
                    radius,
                    start_angle,
                    ..
                } => {
                    let start = Point2::new(
                        center.x + radius * start_angle.cos(),
                        center.y + radius * start_angle.sin(),
                    );
                    let pen = pen.unwrap();
                    assert!(
                        (start - pen).norm() < tol,
                        "arc starts at {start:?}, pen at {pen:?}"
                    );
                }
                DrawingInstruction::MoveTo(p) => sub_path_start = Some(p),
                DrawingInstruction::ClosePath => pen = sub_path_start,
                _ => {}
            }
            if let Some(p) = ins.end_point() {
                pen = Some(p);
            }
        }
    }

    #[test]
    fn full_annulus_is_two_opposite_circles() {
        let program = Arc::new(ArcSpec::new(5.0, 10.0, 0.0, TAU)).generate();
        let ins = program.instructions();
        assert_eq!(program.sub_path_count(), 2);
        assert_eq!(
            ins.iter()
                .filter(|i| matches!(i, DrawingInstruction::ClosePath))
                .count(),
            2
        );
        let circles = arcs(&program);
        assert_eq!(circles.len(), 2);
        assert_abs_diff_eq!(circles[0].1, 10.0);
        assert_abs_diff_eq!(circles[1].1, 5.0);
        assert_ne!(circles[0].4, circles[1].4);
        for (_, _, start, end, _) in circles {
            assert_abs_diff_eq!((end - start).abs(), TAU, epsilon = 1e-12);
        }
    }

    #[test]
    fn full_disc_has_one_circle() {
        let program = Arc::new(ArcSpec::new(0.0, 10.0, 0.0, TAU - 1e-7)).generate();
        assert_eq!(program.sub_path_count(), 1);
        assert_eq!(arcs(&program).len(), 1);
    }

    #[test]
    fn full_circle_ignores_padding_and_corners() {
        let spec = ArcSpec::new(5.0, 10.0, 0.0, TAU)
            .pad_angle(0.2)
            .corner_radius(2.0);
        let plain = Arc::new(ArcSpec::new(5.0, 10.0, 0.0, TAU)).generate();
        assert_eq!(Arc::new(spec).generate(), plain);
    }

    #[test]
    fn quarter_annulus() {
        let program = Arc::new(ArcSpec::new(5.0, 10.0, 0.0, FRAC_PI_2)).generate();
        let ins = program.instructions();
        assert_eq!(ins.len(), 5);

        let DrawingInstruction::MoveTo(start) = ins[0] else {
            panic!("expected move, got {:?}", ins[0]);
        };
        // 12 o'clock on a y-down raster.
        assert_abs_diff_eq!(start.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(start.y, -10.0, epsilon = 1e-12);

        let a = arcs(&program);
        assert_eq!(a[0].4, SweepDirection::Clockwise);
        assert_abs_diff_eq!(a[0].2, -FRAC_PI_2);
        assert_abs_diff_eq!(a[0].3, 0.0);
        assert_eq!(a[1].4, SweepDirection::CounterClockwise);
        assert_abs_diff_eq!(a[1].1, 5.0);
        assert_eq!(ins[4], DrawingInstruction::ClosePath);
        assert_continuous(&program, 1e-9);
    }

    #[test]
    fn pie_slice_runs_through_origin() {
        let program = Arc::new(ArcSpec::new(0.0, 10.0, 0.0, 1.0)).generate();
        let ins = program.instructions();
        assert_eq!(ins.len(), 4);
        assert_eq!(ins[2], DrawingInstruction::LineTo(Point2::origin()));
    }

    #[test]
    fn reversed_radii_are_swapped() {
        let a = Arc::new(ArcSpec::new(10.0, 5.0, 0.3, 1.2)).generate();
        let b = Arc::new(ArcSpec::new(5.0, 10.0, 0.3, 1.2)).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn negative_radii_are_clamped() {
        let a = Arc::new(ArcSpec::new(-3.0, 10.0, 0.0, 1.0)).generate();
        let b = Arc::new(ArcSpec::new(0.0, 10.0, 0.0, 1.0)).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn counter_clockwise_sector() {
        let program = Arc::new(ArcSpec::new(5.0, 10.0, 1.0, 0.0)).generate();
        let a = arcs(&program);
        assert_eq!(a[0].4, SweepDirection::CounterClockwise);
        assert_eq!(a[1].4, SweepDirection::Clockwise);
        assert_continuous(&program, 1e-9);
    }

    #[test]
    fn padding_keeps_parallel_gap() {
        let spec = ArcSpec::new(50.0, 100.0, 0.0, FRAC_PI_2).pad_angle(0.1);
        let program = Arc::new(spec).generate();
        let a = arcs(&program);
        let a0 = -FRAC_PI_2;

        let rp = (50.0_f64 * 50.0 + 100.0 * 100.0).sqrt();
        let p1 = (rp / 100.0 * 0.05_f64.sin()).asin();
        assert_abs_diff_eq!(a[0].2, a0 + p1, epsilon = 1e-12);

        // Both corners on the start edge sit the same distance from the ray.
        let outer = polar(100.0, a[0].2);
        let inner = polar(50.0, a[1].3);
        let ray = polar(1.0, a0);
        let dist = |p: Point2| (p.x * ray.y - p.y * ray.x).abs();
        assert_abs_diff_eq!(dist(outer), dist(inner), epsilon = 1e-9);
        assert_abs_diff_eq!(dist(outer), rp * 0.05_f64.sin(), epsilon = 1e-9);
    }

    #[test]
    fn explicit_pad_radius() {
        let spec = ArcSpec::new(50.0, 100.0, 0.0, FRAC_PI_2)
            .pad_angle(0.1)
            .pad_radius(100.0);
        let arc = Arc::new(spec);
        assert_eq!(arc.spec(), &spec);
        assert_eq!(arc.spec().pad_radius, Some(100.0));
        let a = arcs(&arc.generate());
        assert_abs_diff_eq!(a[0].2, -FRAC_PI_2 + 0.05, epsilon = 1e-12);
    }

    #[test]
    fn oversized_padding_collapses_to_midpoints() {
        let spec = ArcSpec::new(50.0, 100.0, 0.0, 0.05).pad_angle(0.2);
        let program = Arc::new(spec).generate();
        let ins = program.instructions();
        assert!(arcs(&program).is_empty());
        assert_eq!(ins.len(), 3);
        let mid = 0.025 - FRAC_PI_2;
        let DrawingInstruction::MoveTo(p) = ins[0] else {
            panic!("expected move");
        };
        assert_abs_diff_eq!(p.x, polar(100.0, mid).x, epsilon = 1e-12);
        assert_eq!(ins[2], DrawingInstruction::ClosePath);
    }

    #[test]
    fn sliver_left_by_padding_collapses() {
        // Padding leaves 5e-7 rad of the outer edge and overruns the inner one.
        let spec = ArcSpec::new(50.0, 100.0, 0.0, 0.1 + 5e-7)
            .pad_angle(0.1)
            .pad_radius(100.0);
        let program = Arc::new(spec).generate();
        assert!(arcs(&program).is_empty());
        let ins = program.instructions();
        assert_eq!(ins.len(), 3);
        let mid = (0.1 + 5e-7) / 2.0 - FRAC_PI_2;
        let DrawingInstruction::MoveTo(p) = ins[0] else {
            panic!("expected move, got {:?}", ins[0]);
        };
        assert_abs_diff_eq!(p.x, polar(100.0, mid).x, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, polar(100.0, mid).y, epsilon = 1e-9);
    }

    #[test]
    fn rounded_corners() {
        let spec = ArcSpec::new(50.0, 100.0, 0.0, FRAC_PI_2).corner_radius(5.0);
        let program = Arc::new(spec).generate();
        let a = arcs(&program);
        assert_eq!(a.len(), 6);
        let radii: Vec<f64> = a.iter().map(|arc| arc.1).collect();
        assert_eq!(radii, vec![5.0, 100.0, 5.0, 5.0, 50.0, 5.0]);
        // Corner arcs are short quarter-ish turns, never loops.
        for (_, r, start, end, _) in &a {
            if (*r - 5.0).abs() < 1e-12 {
                assert!((end - start).abs() < PI, "corner arc spans {}", end - start);
            }
        }
        assert_continuous(&program, 1e-9);
        assert_eq!(program.instructions().last(), Some(&DrawingInstruction::ClosePath));
    }

    #[test]
    fn oversized_corner_radius_is_clamped() {
        let spec = ArcSpec::new(90.0, 100.0, 0.0, 1.0).corner_radius(1000.0);
        let program = Arc::new(spec).generate();
        let a = arcs(&program);
        assert!(a.iter().all(|arc| arc.1 <= 100.0));
        assert!(a
            .iter()
            .filter(|arc| arc.1 < 50.0)
            .all(|arc| arc.1 <= 5.0 + 1e-12));
        assert!(program
            .iter()
            .filter_map(DrawingInstruction::end_point)
            .all(|p| p.x.is_finite() && p.y.is_finite()));
        assert_eq!(program.instructions().last(), Some(&DrawingInstruction::ClosePath));
        assert_continuous(&program, 1e-9);
    }

    #[test]
    fn narrow_wedge_merges_corners() {
        let spec = ArcSpec::new(0.0, 100.0, 0.0, 0.2).corner_radius(40.0);
        let program = Arc::new(spec).generate();
        let a = arcs(&program);
        // A single rounded cap at the outer end, straight to the apex.
        assert_eq!(a.len(), 1);
        let (_, r, start, end, sweep) = a[0];
        let expected = 100.0 / (1.0 / 0.1_f64.sin() + 1.0);
        assert_abs_diff_eq!(r, expected, epsilon = 1e-9);
        assert_eq!(sweep, SweepDirection::Clockwise);
        assert!(end - start > PI);
        assert_eq!(program.instructions()[2], DrawingInstruction::LineTo(Point2::origin()));
        assert_continuous(&program, 1e-6);
    }

    #[test]
    fn overlapping_corners_never_loop_the_boundary() {
        // Wider than a half turn, so the corner radius is not limited.
        let spec = ArcSpec::new(0.0, 58.0, 0.0, 3.35)
            .pad_angle(0.22)
            .corner_radius(52.8);
        let program = Arc::new(spec).generate();
        let boundary: Vec<_> = arcs(&program)
            .into_iter()
            .filter(|arc| arc.0 == Point2::origin() && (arc.1 - 58.0).abs() < 1e-9)
            .collect();
        assert!(!boundary.is_empty());
        for (_, _, start, end, _) in boundary {
            assert!((end - start).abs() < 3.35, "boundary arc spans {}", end - start);
        }
        assert!(program
            .iter()
            .filter_map(DrawingInstruction::end_point)
            .all(|p| p.x.is_finite() && p.y.is_finite()));
        assert_eq!(program.instructions().last(), Some(&DrawingInstruction::ClosePath));
    }

    #[test]
    fn zero_radius_full_circle_draws_nothing() {
        for (inner, outer) in [(0.0, 0.0), (-1.0, -2.0)] {
            let program = Arc::new(ArcSpec::new(inner, outer, 0.0, TAU)).generate();
            assert!(program.is_empty(), "{inner}, {outer}: {program:?}");
        }
    }

    #[test]
    fn centroid_is_mid_radius_mid_angle() {
        let c = Arc::new(ArcSpec::new(0.0, 10.0, 0.0, PI)).centroid();
        assert_abs_diff_eq!(c.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-12);
    }
}
