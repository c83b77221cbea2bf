use tracing::trace;

use crate::interpolate::{CurveParams, Interpolation};
use crate::math::Point2;
use crate::path::{Join, PathBuilder, PathProgram};

use super::{for_each_defined_run, Accessor, Predicate, Projection};

/// Generates the fill region between an upper boundary `(x1, y1)` and a
/// lower boundary `(x0, y0)`.
///
/// The upper boundary is traced forwards, the lower one backwards with the
/// interpolation's reverse strategy, and the region is closed. Undefined
/// records end the current region; the next defined record starts another.
pub struct Area<T> {
    x0: Accessor<T>,
    x1: Accessor<T>,
    y0: Accessor<T>,
    y1: Accessor<T>,
    defined: Predicate<T>,
    params: CurveParams,
    projection: Projection,
}

impl Area<Point2> {
    /// Creates an area between plain points and the `y = 0` baseline.
    #[must_use]
    pub fn new() -> Self {
        Self::with_accessors(|p: &Point2, _| p.x, |_: &Point2, _| 0.0, |p: &Point2, _| p.y)
    }
}

impl Default for Area<Point2> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Area<T> {
    /// Creates an area with a shared `x` accessor and separate baseline
    /// (`y0`) and top line (`y1`) accessors.
    #[must_use]
    pub fn with_accessors(
        x: impl Fn(&T, usize) -> f64 + Clone + 'static,
        y0: impl Fn(&T, usize) -> f64 + 'static,
        y1: impl Fn(&T, usize) -> f64 + 'static,
    ) -> Self {
        Self {
            x0: Box::new(x.clone()),
            x1: Box::new(x),
            y0: Box::new(y0),
            y1: Box::new(y1),
            defined: Box::new(|_: &T, _: usize| true),
            params: CurveParams::default(),
            projection: Projection::Cartesian,
        }
    }

    /// Sets the x accessor of the lower boundary only.
    #[must_use]
    pub fn x0(mut self, x0: impl Fn(&T, usize) -> f64 + 'static) -> Self {
        self.x0 = Box::new(x0);
        self
    }

    /// Sets the x accessor of the upper boundary only.
    #[must_use]
    pub fn x1(mut self, x1: impl Fn(&T, usize) -> f64 + 'static) -> Self {
        self.x1 = Box::new(x1);
        self
    }

    /// Sets the baseline accessor.
    #[must_use]
    pub fn y0(mut self, y0: impl Fn(&T, usize) -> f64 + 'static) -> Self {
        self.y0 = Box::new(y0);
        self
    }

    /// Sets the top line accessor.
    #[must_use]
    pub fn y1(mut self, y1: impl Fn(&T, usize) -> f64 + 'static) -> Self {
        self.y1 = Box::new(y1);
        self
    }

    #[must_use]
    pub fn defined(mut self, defined: impl Fn(&T, usize) -> bool + 'static) -> Self {
        self.defined = Box::new(defined);
        self
    }

    #[must_use]
    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.params.interpolation = interpolation;
        self
    }

    #[must_use]
    pub fn tension(mut self, tension: f64) -> Self {
        self.params.tension = tension;
        self
    }

    #[must_use]
    pub fn projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Builds the fill path for `data`.
    #[must_use]
    pub fn generate(&self, data: &[T]) -> PathProgram {
        let CurveParams {
            interpolation,
            tension,
        } = self.params;
        let reverse = interpolation.reverse();
        let join_lower = if interpolation.is_closed() {
            Join::Move
        } else {
            Join::Line
        };

        let mut path = PathBuilder::new();
        for_each_defined_run(data, &*self.defined, |run| {
            trace!(start = run.start, end = run.end, "area region");
            let mut upper = Vec::with_capacity(run.len());
            let mut lower = Vec::with_capacity(run.len());
            for i in run {
                let d = &data[i];
                upper.push(self.projection.project((self.x1)(d, i), (self.y1)(d, i)));
                lower.push(self.projection.project((self.x0)(d, i), (self.y0)(d, i)));
            }
            lower.reverse();

            interpolation.trace(&upper, tension, &mut path, Join::Move);
            reverse.trace(&lower, tension, &mut path, join_lower);
            path.close();
        });
        path.build()
    }
}
