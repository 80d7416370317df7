//! Walk direction of a series along its x-axis.

use core::cmp::Ordering;

/// Direction in which a series is sorted and walked.
///
/// A chart quoted in the pool's natural direction walks ticks upward;
/// an inverted chart walks them downward so that its price axis still
/// reads left to right.
///
/// # Examples
///
/// ```
/// use muffin_depth::domain::SortOrder;
///
/// assert_eq!(SortOrder::from_inverted(false), SortOrder::Ascending);
/// assert_eq!(SortOrder::from_inverted(true), SortOrder::Descending);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest x first.
    #[default]
    Ascending,
    /// Largest x first.
    Descending,
}

impl SortOrder {
    /// Picks the walk direction for a chart whose price is (or isn't) inverted.
    #[must_use]
    pub const fn from_inverted(invert_price: bool) -> Self {
        if invert_price {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    /// Returns `true` if this is [`SortOrder::Ascending`].
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        matches!(self, Self::Ascending)
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orders two `i32` keys in this direction.
    #[must_use]
    pub fn cmp_i32(&self, a: i32, b: i32) -> Ordering {
        match self {
            Self::Ascending => a.cmp(&b),
            Self::Descending => b.cmp(&a),
        }
    }

    /// Orders two `f64` keys in this direction using IEEE 754 total order.
    #[must_use]
    pub fn cmp_f64(&self, a: f64, b: f64) -> Ordering {
        match self {
            Self::Ascending => a.total_cmp(&b),
            Self::Descending => b.total_cmp(&a),
        }
    }

    /// Returns `true` if `a` comes no later than `b` when walking in this
    /// direction.
    #[must_use]
    pub fn precedes_or_eq(&self, a: f64, b: f64) -> bool {
        self.cmp_f64(a, b) != Ordering::Greater
    }
}
