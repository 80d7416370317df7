//! Tick-to-price conversion seam.
//!
//! The pipeline never decides on its own how a tick maps to a
//! human-readable price: token decimals, quoting direction and rounding
//! policy belong to the caller.  [`TickToPrice`] is the seam through which
//! the caller supplies that mapping.
//!
//! # Contract
//!
//! Implementations must be deterministic and free of side effects: the
//! price mapper memoizes results per call and assumes that asking twice
//! for the same tick yields the same price.
//!
//! # Implementors
//!
//! - [`ExponentialTickPrice`]: `1.0001^tick` adjusted for token order
//!   and decimals.
//! - Any closure `Fn(&Token, &Token, Tick) -> Result<f64>`.
//!
//! Prices cross this seam as plain `f64` chart coordinates.  The mapper
//! only requires them to be finite; a caller charting against tick
//! indices (an identity mapping) may legitimately return negative values.

use crate::domain::{Price, Tick, Token};
use crate::error::DepthError;
use crate::math::{price_at_tick, tick_at_price};

/// Converts a tick into the price of `base` expressed in `quote`.
pub trait TickToPrice {
    /// Returns the price of one unit of `base` in units of `quote` at `tick`.
    ///
    /// # Errors
    ///
    /// Implementations return [`DepthError::InvalidPrice`] (or a more
    /// specific variant) when no valid price exists for the inputs.
    fn tick_to_price(&self, base: &Token, quote: &Token, tick: Tick) -> Result<f64, DepthError>;
}

impl<F> TickToPrice for F
where
    F: Fn(&Token, &Token, Tick) -> Result<f64, DepthError>,
{
    fn tick_to_price(&self, base: &Token, quote: &Token, tick: Tick) -> Result<f64, DepthError> {
        self(base, quote, tick)
    }
}

/// Standard concentrated-liquidity tick pricing.
///
/// The raw pool price at `tick` is `1.0001^tick` units of `token1` per
/// `token0`.  When `base` is `token1` the raw ratio is inverted, and the
/// result is scaled by `10^(base.decimals - quote.decimals)` to express it
/// in whole tokens.
///
/// # Examples
///
/// ```
/// use muffin_depth::domain::{Decimals, Tick, Token, TokenAddress};
/// use muffin_depth::traits::{ExponentialTickPrice, TickToPrice};
///
/// let usdc = Token::new(TokenAddress::from_bytes([1u8; 20]), Decimals::new(6).expect("valid"));
/// let weth = Token::new(TokenAddress::from_bytes([2u8; 20]), Decimals::new(18).expect("valid"));
///
/// // usdc is token0; at tick 0 one raw unit of usdc buys one raw unit of weth.
/// let p = ExponentialTickPrice
///     .tick_to_price(&usdc, &weth, Tick::ZERO)
///     .expect("valid price");
/// assert!((p - 1e-12).abs() < 1e-24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExponentialTickPrice;

impl ExponentialTickPrice {
    /// Same as [`TickToPrice::tick_to_price`], returning a validated [`Price`].
    ///
    /// # Errors
    ///
    /// - [`DepthError::InvalidToken`] if `base` and `quote` share an address.
    /// - [`DepthError::InvalidPrice`] / [`DepthError::DivisionByZero`] if
    ///   the scaled price leaves the `f64` range.
    pub fn price(&self, base: &Token, quote: &Token, tick: Tick) -> Result<Price, DepthError> {
        if base.address() == quote.address() {
            return Err(DepthError::InvalidToken(
                "base and quote must be distinct tokens",
            ));
        }
        let raw = price_at_tick(tick)?;
        let directed = if base.sorts_before(quote) {
            raw
        } else {
            raw.inverse()?
        };
        directed.scale(base.decimals().scale_factor(quote.decimals()))
    }

    /// Inverse of [`price`](Self::price): the tick at which the pool quotes
    /// `price` units of `quote` per `base`.
    ///
    /// Prices between two ticks resolve to the lower tick of the raw
    /// (`token1` per `token0`) ratio.
    ///
    /// # Errors
    ///
    /// - [`DepthError::InvalidToken`] if `base` and `quote` share an address.
    /// - [`DepthError::InvalidPrice`] / [`DepthError::DivisionByZero`] if
    ///   `price` is zero or the unscaled ratio leaves the `f64` range.
    /// - [`DepthError::InvalidTick`] if the tick falls outside the valid range.
    pub fn tick(&self, base: &Token, quote: &Token, price: Price) -> Result<Tick, DepthError> {
        if base.address() == quote.address() {
            return Err(DepthError::InvalidToken(
                "base and quote must be distinct tokens",
            ));
        }
        let directed = price.scale(quote.decimals().scale_factor(base.decimals()))?;
        let raw = if base.sorts_before(quote) {
            directed
        } else {
            directed.inverse()?
        };
        tick_at_price(raw)
    }
}

impl TickToPrice for ExponentialTickPrice {
    fn tick_to_price(&self, base: &Token, quote: &Token, tick: Tick) -> Result<f64, DepthError> {
        self.price(base, quote, tick).map(|p| p.get())
    }
}
