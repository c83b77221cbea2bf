//! Strategies that turn an ordered point list into path segments.

mod basis;
mod hermite;
mod linear;
mod step;

use std::fmt;
use std::str::FromStr;

use crate::error::InterpolationError;
use crate::math::Point2;
use crate::path::{Join, PathBuilder};

/// Default tension for cardinal and bundle interpolation.
pub const DEFAULT_TENSION: f64 = 0.7;

/// The interpolation strategies a line or area can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    /// Straight segments.
    #[default]
    Linear,
    /// Straight segments, closed back to the first point.
    LinearClosed,
    /// Staircase switching height halfway between points.
    Step,
    /// Staircase switching height at the previous point's x.
    StepBefore,
    /// Staircase switching height at the next point's x.
    StepAfter,
    /// Uniform cubic B-spline clamped to the end points.
    Basis,
    /// Uniform cubic B-spline that does not reach the end points.
    BasisOpen,
    /// Periodic uniform cubic B-spline.
    BasisClosed,
    /// B-spline of the points straightened towards their chord by tension.
    Bundle,
    /// Cardinal spline through every point.
    Cardinal,
    /// Cardinal spline through all but the end points.
    CardinalOpen,
    /// Periodic cardinal spline.
    CardinalClosed,
    /// Monotone cubic that preserves monotonicity in y.
    Monotone,
}

impl Interpolation {
    /// Every strategy, in registry order.
    pub const ALL: [Self; 13] = [
        Self::Linear,
        Self::LinearClosed,
        Self::Step,
        Self::StepBefore,
        Self::StepAfter,
        Self::Basis,
        Self::BasisOpen,
        Self::BasisClosed,
        Self::Bundle,
        Self::Cardinal,
        Self::CardinalOpen,
        Self::CardinalClosed,
        Self::Monotone,
    ];

    /// The registry name of this strategy.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::LinearClosed => "linear-closed",
            Self::Step => "step",
            Self::StepBefore => "step-before",
            Self::StepAfter => "step-after",
            Self::Basis => "basis",
            Self::BasisOpen => "basis-open",
            Self::BasisClosed => "basis-closed",
            Self::Bundle => "bundle",
            Self::Cardinal => "cardinal",
            Self::CardinalOpen => "cardinal-open",
            Self::CardinalClosed => "cardinal-closed",
            Self::Monotone => "monotone",
        }
    }

    /// Whether the strategy closes its own segment.
    ///
    /// An area drawn with a closed strategy starts its lower boundary as a
    /// separate sub-path instead of joining it with a line.
    #[must_use]
    pub fn is_closed(self) -> bool {
        matches!(
            self,
            Self::LinearClosed | Self::BasisClosed | Self::CardinalClosed
        )
    }

    /// The strategy to use when tracing the same boundary backwards.
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Self::StepBefore => Self::StepAfter,
            Self::StepAfter => Self::StepBefore,
            other => other,
        }
    }

    /// Appends the segment through `points` to `path`.
    ///
    /// `tension` is only read by the cardinal and bundle strategies. An empty
    /// `points` slice appends nothing.
    pub fn trace(self, points: &[Point2], tension: f64, path: &mut PathBuilder, join: Join) {
        if points.is_empty() {
            return;
        }
        match self {
            Self::Linear => linear::linear(points, path, join),
            Self::LinearClosed => linear::linear_closed(points, path, join),
            Self::Step => step::step(points, path, join),
            Self::StepBefore => step::step_before(points, path, join),
            Self::StepAfter => step::step_after(points, path, join),
            Self::Basis => basis::basis(points, path, join),
            Self::BasisOpen => basis::basis_open(points, path, join),
            Self::BasisClosed => basis::basis_closed(points, path, join),
            Self::Bundle => basis::bundle(points, tension, path, join),
            Self::Cardinal => hermite::cardinal(points, tension, path, join),
            Self::CardinalOpen => hermite::cardinal_open(points, tension, path, join),
            Self::CardinalClosed => hermite::cardinal_closed(points, tension, path, join),
            Self::Monotone => hermite::monotone(points, path, join),
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interpolation {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|i| i.name() == s)
            .ok_or_else(|| InterpolationError::UnknownStrategy(s.to_owned()))
    }
}

/// Interpolation settings shared by the line and area generators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    /// Strategy used to connect points.
    pub interpolation: Interpolation,
    /// Cardinal/bundle tension in `[0, 1]`.
    pub tension: f64,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            interpolation: Interpolation::Linear,
            tension: DEFAULT_TENSION,
        }
    }
}
