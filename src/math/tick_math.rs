//! Tick-to-price and price-to-tick conversion functions.
//!
//! These helpers implement the standard relationship `price = 1.0001^tick`
//! used by concentrated liquidity pools, where the price is the raw ratio
//! of `token1` per `token0`.
//!
//! # Functions
//!
//! - [`price_at_tick`]: computes `1.0001^tick` for a given [`Tick`].
//! - [`tick_at_price`]: computes the greatest tick whose price ≤ the
//!   given [`Price`].
//!
//! # Examples
//!
//! ```
//! use muffin_depth::domain::Tick;
//! use muffin_depth::math::{price_at_tick, tick_at_price};
//!
//! let tick = Tick::new(100).unwrap_or(Tick::ZERO);
//! let price = price_at_tick(tick).expect("valid tick produces valid price");
//! let round_trip = tick_at_price(price).expect("valid price produces valid tick");
//! assert_eq!(round_trip, tick);
//! ```

use crate::domain::{Price, Tick};
use crate::error::DepthError;

/// Base of the tick-price exponential: `price = BASE^tick`.
const BASE: f64 = 1.0001;

/// Tolerance for snapping a floating-point tick value to the nearest
/// integer.  This prevents round-trip errors caused by IEEE 754
/// rounding when converting `tick → price → tick`.
const SNAP_EPSILON: f64 = 1e-9;

/// Computes the raw price at a given tick: `price = 1.0001^tick`.
///
/// All valid [`Tick`] values produce finite, positive prices.
///
/// # Errors
///
/// Returns [`DepthError::InvalidPrice`] if the computed price is not
/// finite (should not occur for valid ticks).
///
/// # Examples
///
/// ```
/// use muffin_depth::domain::Tick;
/// use muffin_depth::math::price_at_tick;
///
/// let price = price_at_tick(Tick::ZERO).expect("tick 0 is valid");
/// assert!((price.get() - 1.0).abs() < f64::EPSILON);
/// ```
#[must_use = "this returns the computed price and does not modify state"]
pub fn price_at_tick(tick: Tick) -> Result<Price, DepthError> {
    Price::new(BASE.powf(tick.as_coordinate()))
}

/// Computes the greatest tick whose raw price is ≤ the given price.
///
/// Implements `floor(log_{1.0001}(price))` with a snap-to-nearest
/// adjustment (within `SNAP_EPSILON`) so that
/// `tick_at_price(price_at_tick(t)) == t` for all valid ticks.
///
/// # Errors
///
/// - [`DepthError::InvalidPrice`] if `price` is zero.
/// - [`DepthError::InvalidTick`] if the resulting tick falls outside
///   the valid range.
#[must_use = "this returns the computed tick and does not modify state"]
pub fn tick_at_price(price: Price) -> Result<Tick, DepthError> {
    let p = price.get();
    if p <= 0.0 {
        return Err(DepthError::InvalidPrice(
            "price must be positive for tick conversion",
        ));
    }

    let raw = p.ln() / BASE.ln();

    let rounded = raw.round();
    let tick_f64 = if (raw - rounded).abs() < SNAP_EPSILON {
        rounded
    } else {
        raw.floor()
    };

    Tick::from_coordinate(tick_f64)
}
