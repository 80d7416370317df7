//! One fee tier of a pool together with its initialized ticks.

use super::{FeeTier, TickRecord};
use crate::error::DepthError;

/// Maximum number of tiers a single Muffin pool may host.
pub const MAX_TIERS: usize = 6;

/// A pool tier: its id, fee rate and the ticks initialized in it.
///
/// Tick records may arrive in any order; tick indices must be unique.
/// A tier with no ticks is valid (e.g. a tier created moments ago whose
/// positions the indexer has not picked up yet).
///
/// # Examples
///
/// ```
/// use muffin_depth::domain::{FeeTier, Tier, TickRecord};
///
/// let ticks = vec![
///     TickRecord::parse(-100, "10").expect("valid"),
///     TickRecord::parse(0, "-10").expect("valid"),
/// ];
/// let tier = Tier::new(0, FeeTier::TIER_0_05_PERCENT, ticks).expect("valid tier");
/// assert_eq!(tier.tier_id(), 0);
/// assert_eq!(tier.ticks().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Tier {
    tier_id: u8,
    fee_tier: FeeTier,
    ticks: Vec<TickRecord>,
}

impl Tier {
    /// Creates a new `Tier` after validating it.
    ///
    /// # Errors
    ///
    /// - [`DepthError::InvalidTier`] if `tier_id` is not below
    ///   [`MAX_TIERS`].
    /// - [`DepthError::InvalidTick`] if two records share a tick index.
    pub fn new(tier_id: u8, fee_tier: FeeTier, ticks: Vec<TickRecord>) -> crate::error::Result<Self> {
        let tier = Self {
            tier_id,
            fee_tier,
            ticks,
        };
        tier.validate()?;
        Ok(tier)
    }

    /// Validates the tier invariants.
    ///
    /// Deserialized tiers bypass [`new`](Self::new), so callers decoding
    /// indexer payloads should validate before use.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn validate(&self) -> crate::error::Result<()> {
        if usize::from(self.tier_id) >= MAX_TIERS {
            return Err(DepthError::InvalidTier("tier id must be below 6"));
        }
        let mut indices: Vec<i32> = self.ticks.iter().map(|t| t.tick_index().get()).collect();
        indices.sort_unstable();
        if indices.windows(2).any(|w| w[0] == w[1]) {
            return Err(DepthError::InvalidTick("duplicate tick index within tier"));
        }
        Ok(())
    }

    /// Returns the tier id.
    #[must_use]
    pub const fn tier_id(&self) -> u8 {
        self.tier_id
    }

    /// Returns the tier's fee rate.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the tier's tick records in input order.
    #[must_use]
    pub fn ticks(&self) -> &[TickRecord] {
        &self.ticks
    }

    /// Returns `true` if no tick has been initialized in this tier.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}
