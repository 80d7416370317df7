//! Exchange rate between two tokens.

use core::fmt;

use crate::error::DepthError;

/// Exchange rate between two tokens as a dimensionless ratio
/// (quote units per base unit).
///
/// Wraps an `f64` value that must be finite and non-negative.
///
/// # Examples
///
/// ```
/// use muffin_depth::domain::Price;
///
/// let price = Price::new(1.5);
/// assert!(price.is_ok());
/// assert!(Price::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Price ratio of 1:1.
    pub const ONE: Self = Self(1.0);

    /// Price ratio of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Price` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`DepthError::InvalidPrice`] if the value is negative, NaN,
    /// or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(DepthError::InvalidPrice(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the price is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Computes the reciprocal price (`1 / self`).
    ///
    /// # Errors
    ///
    /// Returns [`DepthError::DivisionByZero`] if the price is zero.
    /// Returns [`DepthError::InvalidPrice`] if the reciprocal is not finite.
    pub fn inverse(&self) -> crate::error::Result<Self> {
        if self.0 == 0.0 {
            return Err(DepthError::DivisionByZero);
        }
        Self::new(1.0 / self.0)
    }

    /// Multiplies the price by a positive factor.
    ///
    /// # Errors
    ///
    /// Returns [`DepthError::InvalidPrice`] if the product is not a valid
    /// price.
    pub fn scale(&self, factor: f64) -> crate::error::Result<Self> {
        Self::new(self.0 * factor)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
