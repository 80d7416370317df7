//! Discrete price index of a concentrated liquidity tier.

use core::fmt;

use crate::error::DepthError;

/// Minimum valid tick index (Muffin standard).
const MIN_TICK: i32 = -776_363;

/// Maximum valid tick index (Muffin standard).
const MAX_TICK: i32 = 776_363;

/// A discrete price point in the concentrated liquidity model.
///
/// Follows the convention where price increases exponentially with the
/// tick index: `price = 1.0001^tick`. Valid tick indices range from
/// [`MIN`](Self::MIN) (`-776363`) to [`MAX`](Self::MAX) (`776363`), the
/// bounds supported by Muffin's Q72.64 square-root price encoding.
///
/// # Examples
///
/// ```
/// use muffin_depth::domain::Tick;
///
/// let tick = Tick::new(100);
/// assert!(tick.is_ok());
/// assert_eq!(tick.unwrap_or(Tick::ZERO).get(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct Tick(i32);

impl Tick {
    /// Minimum valid tick (`-776363`).
    pub const MIN: Self = Self(MIN_TICK);

    /// Maximum valid tick (`776363`).
    pub const MAX: Self = Self(MAX_TICK);

    /// Neutral tick where `price = 1.0001^0 = 1.0`.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Tick` with range validation.
    ///
    /// # Errors
    ///
    /// Returns [`DepthError::InvalidTick`] if `value` is outside
    /// the range `[-776363, 776363]`.
    pub const fn new(value: i32) -> crate::error::Result<Self> {
        if value < MIN_TICK || value > MAX_TICK {
            return Err(DepthError::InvalidTick("tick out of range [-776363, 776363]"));
        }
        Ok(Self(value))
    }

    /// Recovers a tick from a chart coordinate.
    ///
    /// Chart x-values are `f64`; a tick-indexed series stores integral
    /// values only.
    ///
    /// # Errors
    ///
    /// Returns [`DepthError::InvalidTick`] if `x` is not finite, has a
    /// fractional part, or is outside the valid tick range.
    pub fn from_coordinate(x: f64) -> crate::error::Result<Self> {
        if !x.is_finite() || x.fract() != 0.0 {
            return Err(DepthError::InvalidTick("coordinate is not an integral tick"));
        }
        if x < f64::from(MIN_TICK) || x > f64::from(MAX_TICK) {
            return Err(DepthError::InvalidTick("tick out of range [-776363, 776363]"));
        }
        #[allow(clippy::cast_possible_truncation)]
        let index = x as i32;
        Self::new(index)
    }

    /// Returns the underlying `i32` tick index.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Returns the tick index as a chart coordinate.
    #[must_use]
    pub fn as_coordinate(&self) -> f64 {
        f64::from(self.0)
    }

    /// Returns `true` if this tick is within the valid range.
    ///
    /// Always returns `true` for a properly constructed `Tick`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0 >= MIN_TICK && self.0 <= MAX_TICK
    }

    /// Checked addition of a delta to this tick.
    ///
    /// Returns `None` if the result would be outside the valid tick range.
    #[must_use]
    pub const fn checked_add(&self, delta: i32) -> Option<Self> {
        match self.0.checked_add(delta) {
            Some(v) if v >= MIN_TICK && v <= MAX_TICK => Some(Self(v)),
            _ => None,
        }
    }
}

impl TryFrom<i32> for Tick {
    type Error = DepthError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tick> for i32 {
    fn from(tick: Tick) -> Self {
        tick.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tick({})", self.0)
    }
}
