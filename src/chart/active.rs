//! Active liquidity lookup.
//!
//! Finds the step of a series that covers the pool's current tick or
//! price.  Freshly created tiers and lagging indexers routinely produce
//! data that does not reach the active point yet, so a failed lookup is
//! `None` rather than an error.

use crate::domain::{Datum, SortOrder};

/// Index of the point whose step covers `active_x`.
///
/// `series` must be sorted in `order`.  The covering point is the last one
/// at or before `active_x` in walk order.  Returns `None` when the series
/// is empty, `active_x` is NaN, or `active_x` lies before the first point.
///
/// # Examples
///
/// ```
/// use muffin_depth::chart::locate_active_index;
/// use muffin_depth::domain::{Datum, SortOrder};
///
/// let series = vec![Datum::new(0.0, 5.0), Datum::new(10.0, 3.0), Datum::new(20.0, 6.0)];
/// assert_eq!(locate_active_index(&series, 15.0, SortOrder::Ascending), Some(1));
/// assert_eq!(locate_active_index(&series, -1.0, SortOrder::Ascending), None);
/// ```
#[must_use]
pub fn locate_active_index(series: &[Datum], active_x: f64, order: SortOrder) -> Option<usize> {
    if active_x.is_nan() {
        return None;
    }
    series
        .partition_point(|d| order.precedes_or_eq(d.x, active_x))
        .checked_sub(1)
}

/// Liquidity level in effect at `active_x`.
///
/// See [`locate_active_index`] for when this is `None`.
#[must_use]
pub fn active_liquidity(series: &[Datum], active_x: f64, order: SortOrder) -> Option<f64> {
    let index = locate_active_index(series, active_x, order)?;
    series.get(index).map(|d| d.y)
}
