use crate::math::Point2;
use crate::path::{Join, PathBuilder};

/// Staircase that changes height halfway between consecutive points.
pub(super) fn step(points: &[Point2], path: &mut PathBuilder, join: Join) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    path.join(join, *first);
    let mut prev = *first;
    for p in rest {
        path.horizontal_to((prev.x + p.x) / 2.0);
        path.vertical_to(p.y);
        prev = *p;
    }
    if !rest.is_empty() {
        path.horizontal_to(prev.x);
    }
}

/// Staircase that rises (or falls) first, then runs to the next x.
pub(super) fn step_before(points: &[Point2], path: &mut PathBuilder, join: Join) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    path.join(join, *first);
    for p in rest {
        path.vertical_to(p.y);
        path.horizontal_to(p.x);
    }
}

/// Staircase that runs to the next x first, then rises (or falls).
pub(super) fn step_after(points: &[Point2], path: &mut PathBuilder, join: Join) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    path.join(join, *first);
    for p in rest {
        path.horizontal_to(p.x);
        path.vertical_to(p.y);
    }
}
