use crate::math::Point2;
use crate::path::{Join, PathBuilder};

/// Straight segments through `points`.
///
/// A lone point cannot form a segment, so it is closed on itself to leave a
/// visible dot under round line caps.
pub(super) fn linear(points: &[Point2], path: &mut PathBuilder, join: Join) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    path.join(join, *first);
    if rest.is_empty() {
        path.close();
        return;
    }
    for p in rest {
        path.line_to(*p);
    }
}

/// Straight segments through `points`, closed back to the first one.
pub(super) fn linear_closed(points: &[Point2], path: &mut PathBuilder, join: Join) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    path.join(join, *first);
    for p in rest {
        path.line_to(*p);
    }
    path.close();
}
