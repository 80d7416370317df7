//! One initialized tick of a tier, as supplied by the indexing layer.

use super::{LiquidityNet, Tick};

/// An initialized tick and the liquidity delta applied when it is crossed.
///
/// With the `serde` feature enabled this type reads and writes the
/// indexer wire shape:
///
/// ```json
/// { "tickIndex": -100, "liquidityNet": "2500" }
/// ```
///
/// # Examples
///
/// ```
/// use muffin_depth::domain::{LiquidityNet, Tick, TickRecord};
///
/// let rec = TickRecord::new(Tick::ZERO, LiquidityNet::new(-5));
/// assert_eq!(rec.tick_index(), Tick::ZERO);
/// assert_eq!(rec.liquidity_net().get(), -5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TickRecord {
    tick_index: Tick,
    liquidity_net: LiquidityNet,
}

impl TickRecord {
    /// Creates a new `TickRecord`.
    #[must_use]
    pub const fn new(tick_index: Tick, liquidity_net: LiquidityNet) -> Self {
        Self {
            tick_index,
            liquidity_net,
        }
    }

    /// Parses a record from raw indexer values.
    ///
    /// # Errors
    ///
    /// - [`DepthError::InvalidTick`](crate::error::DepthError::InvalidTick)
    ///   if `tick_index` is out of range.
    /// - [`DepthError::InvalidLiquidity`](crate::error::DepthError::InvalidLiquidity)
    ///   if `liquidity_net` is not a signed integer string.
    pub fn parse(tick_index: i32, liquidity_net: &str) -> crate::error::Result<Self> {
        Ok(Self::new(Tick::new(tick_index)?, liquidity_net.parse()?))
    }

    /// Returns the tick index.
    #[must_use]
    pub const fn tick_index(&self) -> Tick {
        self.tick_index
    }

    /// Returns the signed liquidity delta.
    #[must_use]
    pub const fn liquidity_net(&self) -> LiquidityNet {
        self.liquidity_net
    }
}
