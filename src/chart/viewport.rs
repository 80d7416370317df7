//! Viewport filter.
//!
//! Recomputed on every zoom or pan frame, so it never copies the series:
//! the visible run is located by binary search and handed out as a
//! borrowed slice wrapped between at most two synthesized edge points.

use core::iter::FusedIterator;
use core::slice;

use crate::domain::{Datum, Series};
use crate::traits::XScale;

/// Locates the part of `series` that lands on screen.
///
/// A point is visible when its pixel position lies strictly inside
/// `(-width, width)`.  The series must be monotonic in pixel space; its
/// orientation is read from the first and last points.  The window holds,
/// in order:
///
/// 1. the last point before the visible run, if any, moved to the
///    coordinate under the nearest viewport edge;
/// 2. the visible points;
/// 3. the first point after the visible run, if any, moved likewise.
///
/// Levels (`y`) are never altered.  Returns `None` when the window would
/// hold fewer than two points, or when `width` is not finite and positive.
///
/// # Examples
///
/// ```
/// use muffin_depth::chart::{filter_viewport, LinearScale};
/// use muffin_depth::domain::Datum;
///
/// let series: Vec<Datum> = (0..100_i32).map(|i| Datum::new(f64::from(i), 1.0)).collect();
/// // Coordinates 40..60 span pixels -100..100.
/// let scale = LinearScale::new((40.0, 60.0), (-100.0, 100.0)).expect("valid scale");
///
/// let window = filter_viewport(&series, &scale, 100.0).expect("renderable");
/// let xs: Vec<f64> = window.iter().map(|d| d.x).collect();
/// assert_eq!(xs.first(), Some(&40.0));
/// assert_eq!(xs.last(), Some(&60.0));
/// assert_eq!(window.len(), 21);
/// ```
#[must_use]
pub fn filter_viewport<'a, S>(
    series: &'a [Datum],
    scale: &S,
    width: f64,
) -> Option<ViewportWindow<'a>>
where
    S: XScale + ?Sized,
{
    if !width.is_finite() || width <= 0.0 {
        return None;
    }
    let (first, last) = (series.first()?, series.last()?);
    let ascending = scale.to_pixel(first.x) <= scale.to_pixel(last.x);

    let (start, end) = if ascending {
        (
            series.partition_point(|d| scale.to_pixel(d.x) <= -width),
            series.partition_point(|d| scale.to_pixel(d.x) < width),
        )
    } else {
        (
            series.partition_point(|d| scale.to_pixel(d.x) >= width),
            series.partition_point(|d| scale.to_pixel(d.x) > -width),
        )
    };
    let end = end.max(start);

    let pin = |d: &Datum| d.with_x(scale.from_pixel(scale.to_pixel(d.x).clamp(-width, width)));
    let window = ViewportWindow {
        before: start.checked_sub(1).and_then(|i| series.get(i)).map(pin),
        visible: series.get(start..end).unwrap_or_default(),
        after: series.get(end).map(pin),
    };

    if window.len() < 2 {
        log::debug!(
            "viewport holds {} of {} points, nothing to render",
            window.len(),
            series.len()
        );
        return None;
    }
    Some(window)
}

/// The renderable part of a series under the current viewport.
///
/// A window is a cheap copyable view; each call to [`iter`](Self::iter)
/// starts a fresh pass, so abandoning one pass halfway has no effect on
/// the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportWindow<'a> {
    before: Option<Datum>,
    visible: &'a [Datum],
    after: Option<Datum>,
}

impl<'a> ViewportWindow<'a> {
    /// Returns a fresh iterator over the window's points.
    #[must_use]
    pub fn iter(&self) -> ViewportIter<'a> {
        ViewportIter {
            before: self.before,
            visible: self.visible.iter(),
            after: self.after,
        }
    }

    /// Number of points in the window, edge points included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len() + usize::from(self.before.is_some()) + usize::from(self.after.is_some())
    }

    /// Returns `true` if the window holds no points.
    ///
    /// Windows returned by [`filter_viewport`] always hold at least two.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The points strictly inside the viewport, borrowed from the series.
    #[must_use]
    pub const fn visible(&self) -> &'a [Datum] {
        self.visible
    }

    /// Collects the window into an owned series.
    #[must_use]
    pub fn to_series(&self) -> Series {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for ViewportWindow<'a> {
    type Item = Datum;
    type IntoIter = ViewportIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &ViewportWindow<'a> {
    type Item = Datum;
    type IntoIter = ViewportIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over a [`ViewportWindow`].
#[derive(Debug, Clone)]
pub struct ViewportIter<'a> {
    before: Option<Datum>,
    visible: slice::Iter<'a, Datum>,
    after: Option<Datum>,
}

impl Iterator for ViewportIter<'_> {
    type Item = Datum;

    fn next(&mut self) -> Option<Datum> {
        self.before
            .take()
            .or_else(|| self.visible.next().copied())
            .or_else(|| self.after.take())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.visible.len()
            + usize::from(self.before.is_some())
            + usize::from(self.after.is_some());
        (n, Some(n))
    }
}

impl ExactSizeIterator for ViewportIter<'_> {}

impl FusedIterator for ViewportIter<'_> {}
