//! Visible x-range a series is clipped to.

use core::fmt;

use crate::error::DepthError;

/// A non-empty closed interval `[lo, hi]` in series coordinates.
///
/// Both bounds are finite and `lo < hi`.
///
/// # Examples
///
/// ```
/// use muffin_depth::domain::ClipDomain;
///
/// let d = ClipDomain::new(0.5, 2.0).expect("valid domain");
/// assert!(d.contains(1.0));
/// assert!(ClipDomain::new(2.0, 2.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClipDomain {
    lo: f64,
    hi: f64,
}

impl ClipDomain {
    /// Creates a new domain.
    ///
    /// # Errors
    ///
    /// Returns [`DepthError::InvalidDomain`] if a bound is not finite or
    /// `lo >= hi`.
    pub fn new(lo: f64, hi: f64) -> crate::error::Result<Self> {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(DepthError::InvalidDomain("domain bounds must be finite"));
        }
        if lo >= hi {
            return Err(DepthError::InvalidDomain("domain lower bound must be below upper bound"));
        }
        Ok(Self { lo, hi })
    }

    /// Lower bound.
    #[must_use]
    pub const fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper bound.
    #[must_use]
    pub const fn hi(&self) -> f64 {
        self.hi
    }

    /// Returns `hi - lo`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Returns `true` if `x` lies within `[lo, hi]`.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lo && x <= self.hi
    }
}

impl fmt::Display for ClipDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
