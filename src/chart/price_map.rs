//! Price mapper.
//!
//! Replaces the tick-index x-values of aligned series with prices obtained
//! from a [`TickToPrice`] collaborator.

use rustc_hash::FxHashMap;

use crate::domain::{Datum, Series, Tick, TokenPair};
use crate::error::DepthError;
use crate::math::round_significant;
use crate::traits::TickToPrice;

/// Maps every tick-indexed x in `series` to a price.
///
/// Prices are quoted as `pair.quote()` per `pair.base()`; with
/// `invert_price` the oracle is asked with the two tokens swapped.  Each
/// price is rounded to `significant_digits` significant digits.  Every
/// distinct tick is converted once per call; the memo does not outlive
/// the call.
///
/// # Errors
///
/// - [`DepthError::InvalidTick`] if an x is not an integral tick in range.
/// - [`DepthError::InvalidPrice`] if the oracle returns a non-finite value.
/// - [`DepthError::InvalidPrecision`] if `significant_digits` is outside
///   `1..=17`.
/// - Any error returned by the oracle.
///
/// # Examples
///
/// ```
/// use muffin_depth::chart::map_prices;
/// use muffin_depth::domain::{Datum, Decimals, Tick, Token, TokenAddress, TokenPair};
/// use muffin_depth::error::DepthError;
///
/// let a = Token::new(TokenAddress::from_bytes([1u8; 20]), Decimals::new(18).expect("valid"));
/// let b = Token::new(TokenAddress::from_bytes([2u8; 20]), Decimals::new(18).expect("valid"));
/// let pair = TokenPair::new(a, b).expect("distinct");
///
/// let doubled = |_: &Token, _: &Token, t: Tick| -> Result<f64, DepthError> {
///     Ok(t.as_coordinate() * 2.0)
/// };
/// let mapped = map_prices(&[vec![Datum::new(-3.0, 1.0)]], &pair, false, &doubled, 12)
///     .expect("valid ticks");
/// assert_eq!(mapped[0][0], Datum::new(-6.0, 1.0));
/// ```
pub fn map_prices<O>(
    series: &[Series],
    pair: &TokenPair,
    invert_price: bool,
    oracle: &O,
    significant_digits: usize,
) -> crate::error::Result<Vec<Series>>
where
    O: TickToPrice + ?Sized,
{
    let (base, quote) = if invert_price {
        (pair.quote(), pair.base())
    } else {
        (pair.base(), pair.quote())
    };

    let mut memo: FxHashMap<i32, f64> = FxHashMap::default();
    let mut mapped = Vec::with_capacity(series.len());
    for points in series {
        let mut out = Series::with_capacity(points.len());
        for datum in points {
            let tick = Tick::from_coordinate(datum.x)?;
            let price = if let Some(&cached) = memo.get(&tick.get()) {
                log::trace!("price memo hit for {tick}");
                cached
            } else {
                let raw = oracle.tick_to_price(&base, &quote, tick)?;
                if !raw.is_finite() {
                    return Err(DepthError::InvalidPrice("oracle returned a non-finite price"));
                }
                let rounded = round_significant(raw, significant_digits)?;
                memo.insert(tick.get(), rounded);
                rounded
            };
            out.push(Datum::new(price, datum.y));
        }
        mapped.push(out);
    }

    log::debug!(
        "mapped {} series through {} distinct ticks",
        mapped.len(),
        memo.len()
    );
    Ok(mapped)
}
