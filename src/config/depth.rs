//! Configuration of the depth pipeline.

use super::ZoomLevels;
use crate::domain::SortOrder;
use crate::error::DepthError;
use crate::math::{DEFAULT_EXPONENT_CAP, MAX_SIGNIFICANT_DIGITS};

/// Default number of significant digits kept when mapping ticks to prices.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 12;

/// Parameters of one depth-chart computation.
///
/// # Fields
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `invert_price` | `false` | Quote the chart in the flipped direction; ticks are walked downward |
/// | `initial_empty_value` | `0.0` | Level of a tier before its first initialized tick |
/// | `significant_digits` | `12` | Precision of mapped prices (`1..=17`) |
/// | `exponent_cap` | `20` | Largest decimal exponent rendered without scaling (`1..=20`) |
/// | `zoom` | `None` | Zoom levels; `None` picks a preset from the tier fee |
///
/// # Examples
///
/// ```
/// use muffin_depth::config::DepthConfig;
///
/// let config = DepthConfig::default().with_invert_price(true);
/// assert!(config.validate().is_ok());
/// assert!(config.invert_price());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct DepthConfig {
    invert_price: bool,
    initial_empty_value: f64,
    significant_digits: usize,
    exponent_cap: u32,
    zoom: Option<ZoomLevels>,
}

impl DepthConfig {
    /// Creates a new validated `DepthConfig`.
    ///
    /// # Errors
    ///
    /// - [`DepthError::InvalidConfiguration`] if `initial_empty_value` is
    ///   not finite, `exponent_cap` is outside `1..=20`, or the zoom
    ///   levels are invalid.
    /// - [`DepthError::InvalidPrecision`] if `significant_digits` is
    ///   outside `1..=17`.
    pub fn new(
        invert_price: bool,
        initial_empty_value: f64,
        significant_digits: usize,
        exponent_cap: u32,
        zoom: Option<ZoomLevels>,
    ) -> Result<Self, DepthError> {
        let config = Self {
            invert_price,
            initial_empty_value,
            significant_digits,
            exponent_cap,
            zoom,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn validate(&self) -> Result<(), DepthError> {
        if !self.initial_empty_value.is_finite() {
            return Err(DepthError::InvalidConfiguration(
                "initial empty value must be finite",
            ));
        }
        if self.significant_digits == 0 || self.significant_digits > MAX_SIGNIFICANT_DIGITS {
            return Err(DepthError::InvalidPrecision(
                "significant digits must be 1..=17",
            ));
        }
        if self.exponent_cap == 0 || self.exponent_cap > DEFAULT_EXPONENT_CAP {
            return Err(DepthError::InvalidConfiguration(
                "exponent cap must be 1..=20",
            ));
        }
        if let Some(zoom) = &self.zoom {
            zoom.validate()?;
        }
        Ok(())
    }

    /// Sets whether the chart is quoted in the flipped direction.
    #[must_use]
    pub fn with_invert_price(mut self, invert_price: bool) -> Self {
        self.invert_price = invert_price;
        self
    }

    /// Sets the level used before a tier's first point.
    #[must_use]
    pub fn with_initial_empty_value(mut self, value: f64) -> Self {
        self.initial_empty_value = value;
        self
    }

    /// Sets the precision of mapped prices.
    #[must_use]
    pub fn with_significant_digits(mut self, digits: usize) -> Self {
        self.significant_digits = digits;
        self
    }

    /// Sets the decimal exponent cap used when rendering values.
    #[must_use]
    pub fn with_exponent_cap(mut self, cap: u32) -> Self {
        self.exponent_cap = cap;
        self
    }

    /// Overrides the zoom levels.
    #[must_use]
    pub fn with_zoom(mut self, zoom: ZoomLevels) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Returns `true` if the chart is quoted in the flipped direction.
    #[must_use]
    pub const fn invert_price(&self) -> bool {
        self.invert_price
    }

    /// Walk direction implied by [`invert_price`](Self::invert_price).
    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        SortOrder::from_inverted(self.invert_price)
    }

    /// Level of a tier before its first point.
    #[must_use]
    pub const fn initial_empty_value(&self) -> f64 {
        self.initial_empty_value
    }

    /// Precision of mapped prices.
    #[must_use]
    pub const fn significant_digits(&self) -> usize {
        self.significant_digits
    }

    /// Decimal exponent cap for rendering.
    #[must_use]
    pub const fn exponent_cap(&self) -> u32 {
        self.exponent_cap
    }

    /// Explicit zoom levels, if any.
    #[must_use]
    pub const fn zoom(&self) -> Option<ZoomLevels> {
        self.zoom
    }
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            invert_price: false,
            initial_empty_value: 0.0,
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            exponent_cap: DEFAULT_EXPONENT_CAP,
            zoom: None,
        }
    }
}
