//! Fee rate of a single pool tier.

use core::fmt;

use crate::error::DepthError;

/// Maximum value that represents 100%.
const MAX_BPS: u32 = 10_000;

/// The fee rate of one tier, expressed in basis points
/// (1 bp = 0.01%, 10 000 bp = 100%).
///
/// A Muffin pool hosts several tiers side by side, each with its own fee
/// rate and its own liquidity curve. [`is_standard`](Self::is_standard)
/// indicates whether the rate matches one of the four well-known tiers,
/// which carry preset chart zoom levels.
///
/// # Examples
///
/// ```
/// use muffin_depth::domain::FeeTier;
///
/// let tier = FeeTier::TIER_0_30_PERCENT;
/// assert_eq!(tier.basis_points(), 30);
/// assert!(tier.is_standard());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct FeeTier(u32);

impl FeeTier {
    /// 0.01% fee, stable pairs (1 bp).
    pub const TIER_0_01_PERCENT: Self = Self(1);

    /// 0.05% fee, correlated pairs (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self(5);

    /// 0.30% fee, standard volatile pairs (30 bp).
    pub const TIER_0_30_PERCENT: Self = Self(30);

    /// 1.00% fee, exotic pairs (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(100);

    /// Creates a new `FeeTier` from basis points.
    ///
    /// # Errors
    ///
    /// Returns [`DepthError::InvalidTier`] if the rate exceeds 100%.
    pub const fn new(basis_points: u32) -> crate::error::Result<Self> {
        if basis_points > MAX_BPS {
            return Err(DepthError::InvalidTier(
                "fee tier must not exceed 10000 basis points (100%)",
            ));
        }
        Ok(Self(basis_points))
    }

    /// Returns the rate in basis points.
    #[must_use]
    pub const fn basis_points(&self) -> u32 {
        self.0
    }

    /// Converts to a floating-point percentage, e.g. 30 bp → `0.30`.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Returns `true` if this tier matches one of the four standard presets.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        matches!(self.0, 1 | 5 | 30 | 100)
    }
}

impl TryFrom<u32> for FeeTier {
    type Error = DepthError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FeeTier> for u32 {
    fn from(tier: FeeTier) -> Self {
        tier.0
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percent())
    }
}
