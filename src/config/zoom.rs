//! Default zoom levels of the liquidity depth chart.

use crate::domain::{ClipDomain, FeeTier};
use crate::error::DepthError;

/// Zoom bounds of the depth chart, expressed as multiples of the current
/// price.
///
/// The initial visible domain is `[price × initial_min, price × initial_max]`;
/// interactive zooming and panning never leave `[price × min, price × max]`.
///
/// # Validation
///
/// - All factors are finite and positive.
/// - `initial_min < initial_max`.
/// - `min <= max`.
///
/// # Examples
///
/// ```
/// use muffin_depth::config::ZoomLevels;
/// use muffin_depth::domain::FeeTier;
///
/// let zoom = ZoomLevels::for_fee_tier(FeeTier::TIER_0_30_PERCENT);
/// let domain = zoom.initial_domain(100.0).expect("valid domain");
/// assert!((domain.lo() - 50.0).abs() < 1e-9);
/// assert!((domain.hi() - 200.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ZoomLevels {
    initial_min: f64,
    initial_max: f64,
    min: f64,
    max: f64,
}

impl ZoomLevels {
    /// Levels for tight, low-fee tiers (1 and 5 bp).
    pub const NARROW: Self = Self {
        initial_min: 0.999,
        initial_max: 1.001,
        min: 0.000_01,
        max: 1.5,
    };

    /// Levels for volatile, higher-fee tiers (30 and 100 bp).
    pub const WIDE: Self = Self {
        initial_min: 0.5,
        initial_max: 2.0,
        min: 0.000_01,
        max: 20.0,
    };

    /// Creates new `ZoomLevels`.
    ///
    /// # Errors
    ///
    /// Returns [`DepthError::InvalidConfiguration`] if any invariant
    /// listed on the type is violated.
    pub fn new(initial_min: f64, initial_max: f64, min: f64, max: f64) -> crate::error::Result<Self> {
        let levels = Self {
            initial_min,
            initial_max,
            min,
            max,
        };
        levels.validate()?;
        Ok(levels)
    }

    /// Picks the preset matching a tier's fee rate.
    ///
    /// Tiers at or below 5 bp use [`NARROW`](Self::NARROW); everything
    /// else uses [`WIDE`](Self::WIDE).
    #[must_use]
    pub const fn for_fee_tier(fee_tier: FeeTier) -> Self {
        if fee_tier.basis_points() <= 5 {
            Self::NARROW
        } else {
            Self::WIDE
        }
    }

    /// Validates all invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DepthError::InvalidConfiguration`] on the first violation.
    pub fn validate(&self) -> crate::error::Result<()> {
        let factors = [self.initial_min, self.initial_max, self.min, self.max];
        if factors.iter().any(|f| !f.is_finite() || *f <= 0.0) {
            return Err(DepthError::InvalidConfiguration(
                "zoom factors must be finite and positive",
            ));
        }
        if self.initial_min >= self.initial_max {
            return Err(DepthError::InvalidConfiguration(
                "initial zoom minimum must be below initial maximum",
            ));
        }
        if self.min > self.max {
            return Err(DepthError::InvalidConfiguration(
                "zoom minimum must not exceed zoom maximum",
            ));
        }
        Ok(())
    }

    /// Lower initial factor.
    #[must_use]
    pub const fn initial_min(&self) -> f64 {
        self.initial_min
    }

    /// Upper initial factor.
    #[must_use]
    pub const fn initial_max(&self) -> f64 {
        self.initial_max
    }

    /// Smallest zoom factor.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Largest zoom factor.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Default visible domain around `current_price`.
    ///
    /// # Errors
    ///
    /// - [`DepthError::InvalidPrice`] if `current_price` is not finite and
    ///   positive.
    /// - [`DepthError::InvalidDomain`] if the scaled bounds collapse.
    pub fn initial_domain(&self, current_price: f64) -> crate::error::Result<ClipDomain> {
        check_price(current_price)?;
        ClipDomain::new(
            current_price * self.initial_min,
            current_price * self.initial_max,
        )
    }

    /// Restricts a requested visible domain to the zoom bounds around
    /// `current_price`.
    ///
    /// Each bound of `requested` is clamped into
    /// `[current_price × min, current_price × max]`.
    ///
    /// # Errors
    ///
    /// - [`DepthError::InvalidPrice`] if `current_price` is not finite and
    ///   positive.
    /// - [`DepthError::InvalidConfiguration`] if the levels are invalid.
    /// - [`DepthError::InvalidDomain`] if `requested` lies entirely outside
    ///   the bounds, or the bounds themselves are a single point.
    pub fn clamp_domain(
        &self,
        current_price: f64,
        requested: ClipDomain,
    ) -> crate::error::Result<ClipDomain> {
        check_price(current_price)?;
        self.validate()?;
        let (floor, ceiling) = (current_price * self.min, current_price * self.max);
        ClipDomain::new(
            requested.lo().clamp(floor, ceiling),
            requested.hi().clamp(floor, ceiling),
        )
    }
}

fn check_price(current_price: f64) -> crate::error::Result<()> {
    if !current_price.is_finite() || current_price <= 0.0 {
        return Err(DepthError::InvalidPrice(
            "current price must be finite and positive",
        ));
    }
    Ok(())
}

impl Default for ZoomLevels {
    fn default() -> Self {
        Self::WIDE
    }
}
