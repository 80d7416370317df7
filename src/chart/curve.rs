//! Tick curve builder.
//!
//! Turns the sparse liquidity deltas of one tier into the liquidity level
//! that holds from each initialized tick up to the next one.

use crate::domain::{Datum, LiquidityNet, Series, SortOrder, TickRecord};
use crate::error::DepthError;

/// Builds the cumulative liquidity curve of one tier.
///
/// The records are sorted by tick index in `order` (input order does not
/// matter).  Walking in that order, a running total starting at zero
/// absorbs each record's `liquidity_net`, negated when walking downward
/// since the delta is defined for upward crossings.  One point
/// `{x: tick, y: total}` is emitted per record.
///
/// # Errors
///
/// Returns [`DepthError::Overflow`] if the running total leaves the
/// `i128` range.
///
/// # Examples
///
/// ```
/// use muffin_depth::chart::build_curve;
/// use muffin_depth::domain::{Datum, SortOrder, TickRecord};
///
/// let ticks = vec![
///     TickRecord::parse(20, "3").expect("valid"),
///     TickRecord::parse(0, "5").expect("valid"),
///     TickRecord::parse(10, "-2").expect("valid"),
/// ];
/// let curve = build_curve(&ticks, SortOrder::Ascending).expect("no overflow");
/// assert_eq!(
///     curve,
///     vec![Datum::new(0.0, 5.0), Datum::new(10.0, 3.0), Datum::new(20.0, 6.0)]
/// );
/// ```
pub fn build_curve(ticks: &[TickRecord], order: SortOrder) -> crate::error::Result<Series> {
    let mut sorted = ticks.to_vec();
    sorted.sort_by(|a, b| order.cmp_i32(a.tick_index().get(), b.tick_index().get()));

    let mut total = LiquidityNet::ZERO;
    let mut curve = Series::with_capacity(sorted.len());
    for record in &sorted {
        let delta = if order.is_ascending() {
            record.liquidity_net()
        } else {
            record
                .liquidity_net()
                .negated()
                .ok_or(DepthError::Overflow("liquidity delta negation overflow"))?
        };
        total = total
            .checked_add(&delta)
            .ok_or(DepthError::Overflow("cumulative liquidity overflow"))?;
        curve.push(Datum::new(record.tick_index().as_coordinate(), total.as_f64()));
    }
    Ok(curve)
}
