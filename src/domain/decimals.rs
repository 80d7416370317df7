//! Token decimal places.

use crate::error::DepthError;

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Represents the number of decimal places for a token amount.
///
/// Valid range is `0..=18`, matching the common blockchain standard.
///
/// # Examples
///
/// ```
/// use muffin_depth::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.get(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum standard decimal places (18).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`DepthError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, DepthError> {
        if value > MAX_DECIMALS {
            return Err(DepthError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^(self - other)` as `f64`.
    ///
    /// This is the factor that turns a raw-unit ratio of a token with
    /// `self` decimals against one with `other` decimals into a
    /// human-readable price.
    #[must_use]
    pub fn scale_factor(&self, other: Self) -> f64 {
        let exp = i32::from(self.0) - i32::from(other.0);
        10f64.powi(exp)
    }
}
