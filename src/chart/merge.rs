//! Multi-series aligner.
//!
//! Puts the curves of several tiers on one shared x-grid so they can be
//! drawn against a single axis and stacked.  Each curve is read as a
//! step-after function: its level holds until its next point, and before
//! its first point it sits at the caller's initial empty value.  Values are
//! carried forward, never interpolated.

use crate::domain::{Datum, Series, SortOrder};

/// Aligns `series` onto the union of their x-values.
///
/// Every input series is re-sorted (stable, IEEE 754 total order on `x`)
/// before merging, so callers need not guarantee ordering.  The merge then
/// keeps one cursor per series and repeatedly takes the extreme pending x
/// (smallest when ascending, largest when descending), advances every
/// cursor sitting on that x, and appends one point per series at that x.
///
/// The result holds one series per input, all of the same length and with
/// identical x at every index.  A series with several points at the same x
/// contributes the level of the last of them.
///
/// # Examples
///
/// ```
/// use muffin_depth::chart::merge;
/// use muffin_depth::domain::{Datum, SortOrder};
///
/// let a = vec![Datum::new(0.0, 1.0), Datum::new(10.0, 2.0)];
/// let b = vec![Datum::new(5.0, 7.0)];
/// let merged = merge(&[a, b], SortOrder::Ascending, 0.0);
///
/// let xs: Vec<f64> = merged[1].iter().map(|d| d.x).collect();
/// assert_eq!(xs, vec![0.0, 5.0, 10.0]);
/// let ys: Vec<f64> = merged[1].iter().map(|d| d.y).collect();
/// assert_eq!(ys, vec![0.0, 7.0, 7.0]);
/// ```
#[must_use]
pub fn merge(series: &[Series], order: SortOrder, initial_empty_value: f64) -> Vec<Series> {
    let sorted: Vec<Series> = series
        .iter()
        .map(|s| {
            let mut copy = s.clone();
            copy.sort_by(|a, b| order.cmp_f64(a.x, b.x));
            copy
        })
        .collect();

    let grid_hint = sorted.iter().map(Vec::len).max().unwrap_or(0);
    let mut merged: Vec<Series> = sorted
        .iter()
        .map(|_| Series::with_capacity(grid_hint))
        .collect();
    let mut cursors = vec![0usize; sorted.len()];

    while let Some(x) = next_extreme(&sorted, &cursors, order) {
        for ((points, cursor), out) in sorted
            .iter()
            .zip(cursors.iter_mut())
            .zip(merged.iter_mut())
        {
            while points
                .get(*cursor)
                .is_some_and(|d| same_x(d.x, x))
            {
                *cursor += 1;
            }
            let y = cursor
                .checked_sub(1)
                .and_then(|i| points.get(i))
                .map_or(initial_empty_value, |d| d.y);
            out.push(Datum::new(x, y));
        }
    }
    merged
}

/// Grid equality: `-0.0` and `0.0` share a grid point.  The total-order
/// fallback only matters for NaN, so a cursor always moves past the point
/// that produced the current grid x.
fn same_x(a: f64, b: f64) -> bool {
    a == b || a.total_cmp(&b).is_eq()
}

/// Returns the x that comes first in `order` among the points not yet
/// consumed, or `None` once every cursor is exhausted.
fn next_extreme(sorted: &[Series], cursors: &[usize], order: SortOrder) -> Option<f64> {
    sorted
        .iter()
        .zip(cursors)
        .filter_map(|(points, &cursor)| points.get(cursor).map(|d| d.x))
        .min_by(|a, b| order.cmp_f64(*a, *b))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn series(points: &[(f64, f64)]) -> Series {
        points.iter().copied().map(Datum::from).collect()
    }

    fn xs(s: &[Datum]) -> Vec<f64> {
        s.iter().map(|d| d.x).collect()
    }

    fn ys(s: &[Datum]) -> Vec<f64> {
        s.iter().map(|d| d.y).collect()
    }

    // -- Degenerate inputs --------------------------------------------------

    #[test]
    fn empty_list_gives_empty_output() {
        assert!(merge(&[], SortOrder::Ascending, 0.0).is_empty());
    }

    #[test]
    fn all_empty_series_stay_empty() {
        let merged = merge(&[vec![], vec![]], SortOrder::Ascending, 0.0);
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(Vec::is_empty));
    }

    #[test]
    fn single_series_is_unchanged() {
        let s = series(&[(0.0, 1.0), (1.0, 2.0)]);
        let merged = merge(&[s.clone()], SortOrder::Ascending, 0.0);
        assert_eq!(merged, vec![s]);
    }

    // -- Alignment ----------------------------------------------------------

    #[test]
    fn union_of_distinct_x_values() {
        let a = series(&[(0.0, 1.0), (10.0, 2.0), (20.0, 3.0)]);
        let b = series(&[(5.0, 4.0), (15.0, 5.0)]);
        let merged = merge(&[a, b], SortOrder::Ascending, 0.0);

        assert_eq!(xs(&merged[0]), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
        assert_eq!(xs(&merged[1]), xs(&merged[0]));
        assert_eq!(ys(&merged[0]), vec![1.0, 1.0, 2.0, 2.0, 3.0]);
        assert_eq!(ys(&merged[1]), vec![0.0, 4.0, 4.0, 5.0, 5.0]);
    }

    #[test]
    fn shared_x_is_emitted_once() {
        let a = series(&[(0.0, 1.0), (10.0, 2.0)]);
        let b = series(&[(0.0, 3.0), (10.0, 4.0)]);
        let merged = merge(&[a.clone(), b.clone()], SortOrder::Ascending, 0.0);
        assert_eq!(merged, vec![a, b]);
    }

    #[test]
    fn initial_empty_value_fills_leading_gap() {
        let a = series(&[(0.0, 1.0)]);
        let b = series(&[(5.0, 2.0)]);
        let merged = merge(&[a, b], SortOrder::Ascending, -1.0);
        assert_eq!(ys(&merged[1]), vec![-1.0, 2.0]);
    }

    #[test]
    fn empty_series_is_padded() {
        let a = series(&[(0.0, 1.0), (1.0, 2.0)]);
        let merged = merge(&[a, vec![]], SortOrder::Ascending, 0.0);
        assert_eq!(ys(&merged[1]), vec![0.0, 0.0]);
        assert_eq!(xs(&merged[1]), vec![0.0, 1.0]);
    }

    #[test]
    fn unsorted_input_is_resorted() {
        let a = series(&[(20.0, 3.0), (0.0, 1.0), (10.0, 2.0)]);
        let merged = merge(&[a], SortOrder::Ascending, 0.0);
        assert_eq!(xs(&merged[0]), vec![0.0, 10.0, 20.0]);
        assert_eq!(ys(&merged[0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn duplicate_x_takes_last_level() {
        let a = series(&[(0.0, 1.0), (0.0, 2.0), (5.0, 3.0)]);
        let merged = merge(&[a], SortOrder::Ascending, 0.0);
        assert_eq!(xs(&merged[0]), vec![0.0, 5.0]);
        assert_eq!(ys(&merged[0]), vec![2.0, 3.0]);
    }

    #[test]
    fn signed_zeros_share_one_grid_point() {
        let a = series(&[(-0.0, 1.0), (5.0, 2.0)]);
        let b = series(&[(0.0, 3.0)]);
        let merged = merge(&[a, b], SortOrder::Ascending, 0.0);
        assert_eq!(merged[0].len(), 2);
        assert_eq!(ys(&merged[0]), vec![1.0, 2.0]);
        assert_eq!(ys(&merged[1]), vec![3.0, 3.0]);
    }

    #[test]
    fn nan_x_does_not_stall_the_cursor() {
        let a = series(&[(0.0, 1.0), (f64::NAN, 2.0)]);
        let merged = merge(&[a], SortOrder::Ascending, 0.0);
        assert_eq!(merged[0].len(), 2);
        assert_eq!(ys(&merged[0]), vec![1.0, 2.0]);
    }

    // -- Direction ----------------------------------------------------------

    #[test]
    fn descending_walks_from_the_top() {
        let a = series(&[(10.0, 1.0), (0.0, 2.0)]);
        let b = series(&[(5.0, 7.0)]);
        let merged = merge(&[a, b], SortOrder::Descending, 0.0);
        assert_eq!(xs(&merged[0]), vec![10.0, 5.0, 0.0]);
        assert_eq!(ys(&merged[0]), vec![1.0, 1.0, 2.0]);
        assert_eq!(ys(&merged[1]), vec![0.0, 7.0, 7.0]);
    }
}
