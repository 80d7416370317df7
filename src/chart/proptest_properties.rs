//! Property-based tests using `proptest` for the chart pipeline.
//!
//! 1. **Formatter**: output never uses exponent notation and parses back
//!    to the input (exactly below `1e21`, within `1e-12` relative above).
//! 2. **Curve sort independence**: record order does not change the curve.
//! 3. **Merge step function**: every aligned point equals the step-after
//!    evaluation of its source series.
//! 4. **Stack cumulative sums**: layer `j` is the sum of layers `0..=j`.
//! 5. **Clip boundary exactness**: clipped output starts at `lo` and ends
//!    at `hi`; clipping twice is a no-op.
//! 6. **Viewport minimum points**: a window always holds two points or
//!    more.

use std::collections::BTreeMap;

use proptest::prelude::*;

use super::{build_curve, clip_to_domain, filter_viewport, merge, stack, LinearScale};
use crate::domain::{ClipDomain, Datum, Series, SortOrder, TickRecord};
use crate::math::to_fixed_decimal_string;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn records(map: &BTreeMap<i32, i64>) -> Vec<TickRecord> {
    map.iter()
        .map(|(tick, net)| {
            let Ok(r) = TickRecord::parse(*tick, &net.to_string()) else {
                panic!("valid record");
            };
            r
        })
        .collect()
}

fn series_from(map: &BTreeMap<i32, i32>) -> Series {
    map.iter()
        .map(|(x, y)| Datum::new(f64::from(*x), f64::from(*y)))
        .collect()
}

/// Step-after evaluation of an ascending series at `x`.
fn step_at(series: &[Datum], x: f64, initial: f64) -> f64 {
    series
        .iter()
        .take_while(|d| d.x <= x)
        .last()
        .map_or(initial, |d| d.y)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Unique ticks with small signed deltas.
fn tick_map_strategy() -> impl Strategy<Value = BTreeMap<i32, i64>> {
    prop::collection::btree_map(-10_000i32..=10_000i32, -1_000_000i64..=1_000_000i64, 0..24)
}

/// Ascending series with unique integral x-values.
fn series_strategy(min_len: usize) -> impl Strategy<Value = Series> {
    prop::collection::btree_map(-500i32..=500i32, -1_000i32..=1_000i32, min_len..24)
        .prop_map(|m| series_from(&m))
}

fn finite_strategy() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |x| x.is_finite())
}

// ---------------------------------------------------------------------------
// Property 1: Formatter
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_formatter_never_uses_exponent(x in finite_strategy()) {
        let s = to_fixed_decimal_string(x);
        prop_assert!(!s.contains('e') && !s.contains('E'), "exponent in {s}");
    }

    #[test]
    fn prop_formatter_round_trips(x in finite_strategy().prop_filter("below 1e300", |x| x.abs() < 1e300)) {
        let s = to_fixed_decimal_string(x);
        let Ok(parsed) = s.parse::<f64>() else {
            return Err(TestCaseError::fail(format!("unparseable output {s}")));
        };
        if x.abs() < 1e21 {
            prop_assert_eq!(parsed, x);
        } else {
            let rel = ((parsed - x) / x).abs();
            prop_assert!(rel < 1e-12, "{x} rendered as {s}");
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Curve sort independence
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_curve_ignores_input_order(map in tick_map_strategy(), descending in any::<bool>()) {
        let order = SortOrder::from_inverted(descending);
        let forward = records(&map);
        let mut backward = forward.clone();
        backward.reverse();
        prop_assert_eq!(build_curve(&forward, order), build_curve(&backward, order));
    }

    #[test]
    fn prop_curve_levels_are_prefix_sums(map in tick_map_strategy()) {
        let Ok(curve) = build_curve(&records(&map), SortOrder::Ascending) else {
            return Err(TestCaseError::fail("small deltas cannot overflow"));
        };
        let mut total = 0i64;
        for (datum, (tick, net)) in curve.iter().zip(&map) {
            total += net;
            prop_assert_eq!(datum.x, f64::from(*tick));
            #[allow(clippy::cast_precision_loss)]
            let expected = total as f64;
            prop_assert_eq!(datum.y, expected);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Merge step function
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_merge_is_step_evaluation(
        inputs in prop::collection::vec(series_strategy(0), 1..5),
        initial in -5i32..=5i32,
    ) {
        let initial = f64::from(initial);
        let merged = merge(&inputs, SortOrder::Ascending, initial);
        prop_assert_eq!(merged.len(), inputs.len());

        let grid: Vec<f64> = merged[0].iter().map(|d| d.x).collect();
        let mut expected_grid: Vec<f64> = inputs.iter().flatten().map(|d| d.x).collect();
        expected_grid.sort_by(f64::total_cmp);
        expected_grid.dedup();
        prop_assert_eq!(&grid, &expected_grid);

        for (source, aligned) in inputs.iter().zip(&merged) {
            prop_assert_eq!(aligned.len(), grid.len());
            for (datum, x) in aligned.iter().zip(&grid) {
                prop_assert_eq!(datum.x, *x);
                prop_assert_eq!(datum.y, step_at(source, *x, initial));
            }
        }
    }

    #[test]
    fn prop_merge_descending_mirrors_ascending(
        inputs in prop::collection::vec(series_strategy(0), 1..4),
    ) {
        let up = merge(&inputs, SortOrder::Ascending, 0.0);
        let down = merge(&inputs, SortOrder::Descending, 0.0);
        for (u, d) in up.iter().zip(&down) {
            let mut ux: Vec<f64> = u.iter().map(|p| p.x).collect();
            ux.reverse();
            let dx: Vec<f64> = d.iter().map(|p| p.x).collect();
            prop_assert_eq!(ux, dx);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Stack cumulative sums
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_stack_is_cumulative(inputs in prop::collection::vec(series_strategy(0), 1..5)) {
        let aligned = merge(&inputs, SortOrder::Ascending, 0.0);
        let Ok(stacked) = stack(&aligned) else {
            return Err(TestCaseError::fail("aligned series must stack"));
        };
        prop_assert_eq!(&stacked[0], &aligned[0]);
        for (j, layer) in stacked.iter().enumerate() {
            for (i, datum) in layer.iter().enumerate() {
                let sum: f64 = aligned[..=j].iter().map(|s| s[i].y).sum();
                prop_assert_eq!(datum.y, sum);
                prop_assert_eq!(datum.x, aligned[j][i].x);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Clip boundary exactness and idempotence
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_clip_hits_both_bounds(
        series in series_strategy(2),
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let (first, last) = (series[0].x, series[series.len() - 1].x);
        let lo = first + (last - first) * a.min(b);
        let hi = first + (last - first) * a.max(b);
        let Ok(domain) = ClipDomain::new(lo, hi) else {
            return Ok(());
        };
        let Some(clipped) = clip_to_domain(&series, domain) else {
            return Err(TestCaseError::fail("two points are always clippable"));
        };
        prop_assert_eq!(clipped.first().map(|d| d.x), Some(lo));
        prop_assert_eq!(clipped.last().map(|d| d.x), Some(hi));
        prop_assert!(clipped.windows(2).all(|w| w[0].x < w[1].x));

        let again = clip_to_domain(&clipped, domain);
        prop_assert_eq!(again, Some(clipped));
    }
}

// ---------------------------------------------------------------------------
// Property 6: Viewport minimum points
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_viewport_never_yields_a_single_point(
        series in series_strategy(0),
        center in -600i32..=600i32,
        half_span in 1i32..=300i32,
    ) {
        let (c, h) = (f64::from(center), f64::from(half_span));
        let Ok(scale) = LinearScale::new((c - h, c + h), (-100.0, 100.0)) else {
            return Err(TestCaseError::fail("valid scale"));
        };
        if let Some(window) = filter_viewport(&series, &scale, 100.0) {
            prop_assert!(window.len() >= 2);
            prop_assert_eq!(window.iter().count(), window.len());
            prop_assert!(window.iter().all(|d| d.x >= c - h - 1e-9 && d.x <= c + h + 1e-9));
        }
    }
}
