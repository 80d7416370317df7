//! Chart points and series.

use core::fmt;

/// A single chart point.
///
/// `x` is a tick index or a price depending on the pipeline stage;
/// `y` is a cumulative liquidity level that holds until the next point
/// (step-after semantics).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Datum {
    /// Horizontal coordinate.
    pub x: f64,
    /// Liquidity level from `x` up to the next point.
    pub y: f64,
}

impl Datum {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns a copy of this point moved to `x`, keeping its level.
    #[must_use]
    pub const fn with_x(self, x: f64) -> Self {
        Self { x, y: self.y }
    }

    /// Returns a copy of this point carrying level `y`.
    #[must_use]
    pub const fn with_y(self, y: f64) -> Self {
        Self { x: self.x, y }
    }
}

impl From<(f64, f64)> for Datum {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The points of one tier, sorted by `x` in the chart's walk direction.
pub type Series = Vec<Datum>;
