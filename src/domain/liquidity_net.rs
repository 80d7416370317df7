//! Signed liquidity delta applied when a tick is crossed.

use core::fmt;
use core::str::FromStr;

use crate::error::DepthError;

/// Signed change in active liquidity when price crosses a tick moving in
/// the direction of increasing tick index.
///
/// Crossing the same tick downward applies the negated delta.  Values are
/// carried as `i128`, which covers the full `int128` range used on chain.
///
/// # Examples
///
/// ```
/// use muffin_depth::domain::LiquidityNet;
///
/// let net: LiquidityNet = "-2500".parse().expect("valid delta");
/// assert_eq!(net.get(), -2_500);
/// assert_eq!(net.negated(), Some(LiquidityNet::new(2_500)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct LiquidityNet(i128);

impl LiquidityNet {
    /// No change in liquidity.
    pub const ZERO: Self = Self(0);

    /// Creates a new `LiquidityNet` from a raw `i128` value.
    #[must_use]
    pub const fn new(value: i128) -> Self {
        Self(value)
    }

    /// Returns the underlying `i128` value.
    #[must_use]
    pub const fn get(&self) -> i128 {
        self.0
    }

    /// Returns `true` if the delta is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// The delta seen when crossing the tick downward.
    ///
    /// Returns `None` for `i128::MIN`, whose negation does not fit.
    #[must_use]
    pub const fn negated(&self) -> Option<Self> {
        match self.0.checked_neg() {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Returns the delta as a chart value.
    ///
    /// Deltas above `2^53` lose precision.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let v = self.0 as f64;
        v
    }
}

impl FromStr for LiquidityNet {
    type Err = DepthError;

    /// Parses a signed base-10 integer string such as `"-1500"` or `"+42"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DepthError::InvalidLiquidity("liquidity delta is empty"));
        }
        trimmed
            .parse::<i128>()
            .map(Self)
            .map_err(|_| DepthError::InvalidLiquidity("liquidity delta is not a signed integer"))
    }
}

impl TryFrom<String> for LiquidityNet {
    type Error = DepthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LiquidityNet> for String {
    fn from(net: LiquidityNet) -> Self {
        net.0.to_string()
    }
}

impl fmt::Display for LiquidityNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
