use crate::interpolate::{CurveParams, Interpolation};
use crate::math::Point2;
use crate::path::{Join, PathBuilder, PathProgram};

use super::{for_each_defined_run, Accessor, Predicate, Projection};

/// Generates the stroke path of a data series.
///
/// Records for which the `defined` predicate fails split the line; every run
/// of defined records becomes its own sub-path.
pub struct Line<T> {
    x: Accessor<T>,
    y: Accessor<T>,
    defined: Predicate<T>,
    params: CurveParams,
    projection: Projection,
}

impl Line<Point2> {
    /// Creates a line over plain points.
    #[must_use]
    pub fn new() -> Self {
        Self::with_accessors(|p: &Point2, _| p.x, |p: &Point2, _| p.y)
    }
}

impl Default for Line<Point2> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Line<T> {
    /// Creates a line reading coordinates through `x` and `y`.
    #[must_use]
    pub fn with_accessors(
        x: impl Fn(&T, usize) -> f64 + 'static,
        y: impl Fn(&T, usize) -> f64 + 'static,
    ) -> Self {
        Self {
            x: Box::new(x),
            y: Box::new(y),
            defined: Box::new(|_: &T, _: usize| true),
            params: CurveParams::default(),
            projection: Projection::Cartesian,
        }
    }

    /// Sets the predicate that marks records as present.
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

    /// Current interpolation settings.
    #[must_use]
    pub fn params(&self) -> CurveParams {
        self.params
    }

    /// Builds the path for `data`. Data without defined records yields an
    /// empty program.
    #[must_use]
    pub fn generate(&self, data: &[T]) -> PathProgram {
        let mut path = PathBuilder::new();
        for_each_defined_run(data, &*self.defined, |run| {
            let points: Vec<Point2> = run
                .map(|i| {
                    let d = &data[i];
                    self.projection.project((self.x)(d, i), (self.y)(d, i))
                })
                .collect();
            self.params
                .interpolation
                .trace(&points, self.params.tension, &mut path, Join::Move);
        });
        path.build()
    }
}
