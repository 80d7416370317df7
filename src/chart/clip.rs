//! Domain clipper.
//!
//! Trims a step-after series to a visible `[lo, hi]` window so that it
//! starts exactly at `lo` and ends exactly at `hi`.

use crate::domain::{ClipDomain, Datum, Series};

/// Clips an ascending series to `domain`.
///
/// The result starts with `{lo, y}`, where `y` is the level of the last
/// point at or before `lo` (or the first point's level if none is), keeps
/// every point with `lo < x <= hi`, and closes with `{hi, y}` where `y` is
/// the level of the first point beyond `hi`, or `0` if the series ends
/// inside the domain.  The zero close keeps a step-after area from running
/// on past the last tick.  No closing point is added when the last kept
/// point already sits on `hi`, which makes clipping idempotent.
///
/// Returns `None` when the series has fewer than two points.
///
/// # Examples
///
/// ```
/// use muffin_depth::chart::clip_to_domain;
/// use muffin_depth::domain::{ClipDomain, Datum};
///
/// let series = vec![Datum::new(0.0, 1.0), Datum::new(10.0, 2.0), Datum::new(20.0, 3.0)];
/// let domain = ClipDomain::new(5.0, 15.0).expect("valid domain");
/// let clipped = clip_to_domain(&series, domain).expect("renderable");
/// assert_eq!(
///     clipped,
///     vec![Datum::new(5.0, 1.0), Datum::new(10.0, 2.0), Datum::new(15.0, 3.0)]
/// );
/// ```
#[must_use]
pub fn clip_to_domain(series: &[Datum], domain: ClipDomain) -> Option<Series> {
    let first = series.first()?;
    if series.len() < 2 {
        log::warn!("cannot clip a series of {} point(s)", series.len());
        return None;
    }
    let (lo, hi) = (domain.lo(), domain.hi());

    let mut start_level = first.y;
    let mut inside = Vec::new();
    let mut closing_level = 0.0;
    for datum in series {
        if datum.x <= lo {
            start_level = datum.y;
        } else if datum.x <= hi {
            inside.push(*datum);
        } else {
            closing_level = datum.y;
            break;
        }
    }

    let mut clipped = Series::with_capacity(inside.len() + 2);
    clipped.push(Datum::new(lo, start_level));
    clipped.extend(inside);
    if clipped.last().is_some_and(|d| d.x < hi) {
        clipped.push(Datum::new(hi, closing_level));
    }
    Some(clipped)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn series(points: &[(f64, f64)]) -> Series {
        points.iter().copied().map(Datum::from).collect()
    }

    fn domain(lo: f64, hi: f64) -> ClipDomain {
        let Ok(d) = ClipDomain::new(lo, hi) else {
            panic!("invalid domain in test: [{lo}, {hi}]");
        };
        d
    }

    fn sample() -> Series {
        series(&[(0.0, 1.0), (10.0, 2.0), (20.0, 3.0), (30.0, 4.0)])
    }

    // -- Renderability ------------------------------------------------------

    #[test]
    fn too_short_is_not_renderable() {
        assert_eq!(clip_to_domain(&[], domain(0.0, 1.0)), None);
        assert_eq!(
            clip_to_domain(&[Datum::new(0.5, 1.0)], domain(0.0, 1.0)),
            None
        );
    }

    // -- Boundaries ---------------------------------------------------------

    #[test]
    fn bounds_between_points() {
        let Some(clipped) = clip_to_domain(&sample(), domain(5.0, 25.0)) else {
            panic!("expected Some");
        };
        assert_eq!(
            clipped,
            series(&[(5.0, 1.0), (10.0, 2.0), (20.0, 3.0), (25.0, 4.0)])
        );
    }

    #[test]
    fn bounds_on_points() {
        let Some(clipped) = clip_to_domain(&sample(), domain(10.0, 20.0)) else {
            panic!("expected Some");
        };
        assert_eq!(clipped, series(&[(10.0, 2.0), (20.0, 3.0)]));
    }

    #[test]
    fn lower_bound_before_series_holds_first_level() {
        let Some(clipped) = clip_to_domain(&sample(), domain(-5.0, 5.0)) else {
            panic!("expected Some");
        };
        assert_eq!(clipped, series(&[(-5.0, 1.0), (0.0, 1.0), (5.0, 2.0)]));
    }

    #[test]
    fn upper_bound_past_series_closes_at_zero() {
        let Some(clipped) = clip_to_domain(&sample(), domain(25.0, 40.0)) else {
            panic!("expected Some");
        };
        assert_eq!(clipped, series(&[(25.0, 3.0), (30.0, 4.0), (40.0, 0.0)]));
    }

    #[test]
    fn domain_between_two_points() {
        let Some(clipped) = clip_to_domain(&sample(), domain(11.0, 12.0)) else {
            panic!("expected Some");
        };
        assert_eq!(clipped, series(&[(11.0, 2.0), (12.0, 3.0)]));
    }

    // -- Idempotence --------------------------------------------------------

    #[test]
    fn clipping_twice_changes_nothing() {
        let d = domain(5.0, 40.0);
        let Some(once) = clip_to_domain(&sample(), d) else {
            panic!("expected Some");
        };
        let Some(twice) = clip_to_domain(&once, d) else {
            panic!("expected Some");
        };
        assert_eq!(once, twice);
    }
}
