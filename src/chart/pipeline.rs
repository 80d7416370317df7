//! End-to-end depth chart construction.
//!
//! [`DepthChart::build`] runs the full pipeline once per data refresh:
//!
//! ```text
//! tiers ──► build_curve ──► merge ──► map_prices ──► stack
//!  (per tier)   (tick grid)   (price grid)    (layers)
//! ```
//!
//! The resulting chart is immutable.  Clipping and viewport filtering run
//! against it on every zoom or pan frame without touching the stored
//! series.

use crate::config::{DepthConfig, ZoomLevels};
use crate::domain::{ClipDomain, Datum, FeeTier, Series, SortOrder, Tier, TokenPair, MAX_TIERS};
use crate::error::DepthError;
use crate::math::to_fixed_decimal_string_with_cap;
use crate::traits::{TickToPrice, XScale};

use super::{
    active_liquidity, build_curve, clip_to_domain, filter_viewport, map_prices, merge, stack,
    ViewportWindow,
};

/// Price-indexed liquidity of every tier of one pool.
///
/// Holds one series per tier (in input order), all sharing the same
/// price grid, plus their stacked counterparts for layered rendering.
///
/// # Examples
///
/// ```
/// use muffin_depth::chart::DepthChart;
/// use muffin_depth::config::DepthConfig;
/// use muffin_depth::domain::{Decimals, FeeTier, Tier, TickRecord, Token, TokenAddress, TokenPair};
/// use muffin_depth::traits::ExponentialTickPrice;
///
/// let a = Token::new(TokenAddress::from_bytes([1u8; 20]), Decimals::new(18).expect("valid"));
/// let b = Token::new(TokenAddress::from_bytes([2u8; 20]), Decimals::new(18).expect("valid"));
/// let pair = TokenPair::new(a, b).expect("distinct");
///
/// let tier = Tier::new(
///     0,
///     FeeTier::TIER_0_05_PERCENT,
///     vec![
///         TickRecord::parse(-10, "1000").expect("valid"),
///         TickRecord::parse(10, "-1000").expect("valid"),
///     ],
/// )
/// .expect("valid tier");
///
/// let chart = DepthChart::build(&[tier], &pair, &ExponentialTickPrice, &DepthConfig::default())
///     .expect("chart");
/// assert_eq!(chart.len(), 1);
/// assert_eq!(chart.x_values().len(), 2);
/// assert_eq!(chart.stacked()[0][0].y, 1000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DepthChart {
    tiers: Vec<(u8, FeeTier)>,
    series: Vec<Series>,
    stacked: Vec<Series>,
    config: DepthConfig,
}

impl DepthChart {
    /// Builds the chart of `tiers`, priced in `pair` through `oracle`.
    ///
    /// Tiers without ticks yield series held at the configured initial
    /// empty value across the whole grid.
    ///
    /// # Errors
    ///
    /// - [`DepthError::InvalidConfiguration`] / [`DepthError::InvalidPrecision`]
    ///   if `config` is invalid.
    /// - [`DepthError::InvalidTier`] if more than [`MAX_TIERS`] tiers are
    ///   given, two tiers share an id, or a tier fails validation.
    /// - [`DepthError::Overflow`] if a tier's cumulative liquidity overflows.
    /// - Any error raised while mapping ticks to prices.
    pub fn build<O>(
        tiers: &[Tier],
        pair: &TokenPair,
        oracle: &O,
        config: &DepthConfig,
    ) -> crate::error::Result<Self>
    where
        O: TickToPrice + ?Sized,
    {
        config.validate()?;
        validate_tiers(tiers)?;
        let order = config.sort_order();

        let curves = tiers
            .iter()
            .map(|tier| {
                if tier.is_empty() {
                    log::warn!("tier {} has no initialized ticks", tier.tier_id());
                }
                build_curve(tier.ticks(), order)
            })
            .collect::<crate::error::Result<Vec<Series>>>()?;

        let aligned = merge(&curves, order, config.initial_empty_value());
        log::debug!(
            "aligned {} tiers onto {} grid points",
            aligned.len(),
            aligned.first().map_or(0, Vec::len)
        );

        let series = map_prices(
            &aligned,
            pair,
            config.invert_price(),
            oracle,
            config.significant_digits(),
        )?;
        let stacked = stack(&series)?;

        Ok(Self {
            tiers: tiers.iter().map(|t| (t.tier_id(), t.fee_tier())).collect(),
            series,
            stacked,
            config: config.clone(),
        })
    }

    /// Number of tiers in the chart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns `true` if the chart was built from no tiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Per-tier price-indexed series, in tier input order.
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Stacked series; entry `j` includes the levels of tiers `0..=j`.
    #[must_use]
    pub fn stacked(&self) -> &[Series] {
        &self.stacked
    }

    /// Tier ids, in the same order as [`series`](Self::series).
    #[must_use]
    pub fn tier_ids(&self) -> Vec<u8> {
        self.tiers.iter().map(|(id, _)| *id).collect()
    }

    /// The shared price grid.
    #[must_use]
    pub fn x_values(&self) -> Vec<f64> {
        self.series
            .first()
            .map(|s| s.iter().map(|d| d.x).collect())
            .unwrap_or_default()
    }

    /// Configuration the chart was built with.
    #[must_use]
    pub const fn config(&self) -> &DepthConfig {
        &self.config
    }

    /// Walk direction of the stored series.
    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.config.sort_order()
    }

    /// Zoom levels for this chart.
    ///
    /// An explicit configuration wins; otherwise the preset of the
    /// lowest-fee tier is used, since it carries the tightest ranges.
    #[must_use]
    pub fn zoom_levels(&self) -> ZoomLevels {
        if let Some(zoom) = self.config.zoom() {
            return zoom;
        }
        self.tiers
            .iter()
            .map(|(_, fee)| *fee)
            .min_by_key(|fee| fee.basis_points())
            .map(ZoomLevels::for_fee_tier)
            .unwrap_or_default()
    }

    /// Clips tier `index` to `domain`.
    ///
    /// Returns `None` for an unknown index or a series too short to render.
    /// A series whose price falls as the walked tick rises is first turned
    /// into its ascending step form, so the result always reads left to
    /// right with each level starting at its own price.
    #[must_use]
    pub fn clip_tier(&self, index: usize, domain: ClipDomain) -> Option<Series> {
        self.clip_series(self.series.get(index)?, domain)
    }

    /// Clips every tier to `domain`.
    #[must_use]
    pub fn clip_all(&self, domain: ClipDomain) -> Vec<Option<Series>> {
        self.series
            .iter()
            .map(|s| self.clip_series(s, domain))
            .collect()
    }

    /// Restricts a requested visible domain to this chart's zoom bounds
    /// around `current_price`.
    ///
    /// # Errors
    ///
    /// See [`ZoomLevels::clamp_domain`].
    pub fn clamp_domain(
        &self,
        current_price: f64,
        requested: ClipDomain,
    ) -> crate::error::Result<ClipDomain> {
        self.zoom_levels().clamp_domain(current_price, requested)
    }

    fn clip_series(&self, series: &[Datum], domain: ClipDomain) -> Option<Series> {
        match price_order(series) {
            SortOrder::Ascending => clip_to_domain(series, domain),
            SortOrder::Descending => {
                let steps = ascending_steps(series, self.config.initial_empty_value());
                let mut clipped = clip_to_domain(&steps, domain)?;
                // Below the lowest price the level is the one of the last walked tick.
                if let (Some(head), Some(lowest)) = (clipped.first_mut(), series.last()) {
                    if domain.lo() < lowest.x {
                        head.y = lowest.y;
                    }
                }
                Some(clipped)
            }
        }
    }

    /// Viewport window over tier `index`.
    #[must_use]
    pub fn viewport<S>(&self, index: usize, scale: &S, width: f64) -> Option<ViewportWindow<'_>>
    where
        S: XScale + ?Sized,
    {
        filter_viewport(self.series.get(index)?, scale, width)
    }

    /// Liquidity of tier `index` at the current price `active_price`.
    ///
    /// `None` means the data does not cover the active price yet.
    #[must_use]
    pub fn active_liquidity(&self, index: usize, active_price: f64) -> Option<f64> {
        let series = self.series.get(index)?;
        let order = price_order(series);
        active_liquidity(series, active_price, order)
    }

    /// Renders a chart value as a plain decimal string using the
    /// configured exponent cap.
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        to_fixed_decimal_string_with_cap(value, self.config.exponent_cap())
    }
}

/// Direction of a price-indexed series, read from its endpoints.
fn price_order(series: &[Datum]) -> SortOrder {
    match (series.first(), series.last()) {
        (Some(first), Some(last)) if first.x > last.x => SortOrder::Descending,
        _ => SortOrder::Ascending,
    }
}

/// Re-expresses a step series walked towards falling prices as an
/// ascending step-after series.
///
/// In walk order, level `y[i]` spans the prices between `x[i + 1]` and
/// `x[i]`.  Read left to right that level starts at `x[i + 1]`, so every
/// level moves one point down the reversed series.  The highest price
/// carries `fill`, the level before the first walked tick.
fn ascending_steps(series: &[Datum], fill: f64) -> Series {
    let mut steps: Series = series
        .windows(2)
        .rev()
        .map(|pair| pair[1].with_y(pair[0].y))
        .collect();
    if let Some(top) = series.first() {
        steps.push(top.with_y(fill));
    }
    steps
}

fn validate_tiers(tiers: &[Tier]) -> crate::error::Result<()> {
    if tiers.len() > MAX_TIERS {
        return Err(DepthError::InvalidTier("a pool holds at most 6 tiers"));
    }
    let mut ids: Vec<u8> = Vec::with_capacity(tiers.len());
    for tier in tiers {
        tier.validate()?;
        if ids.contains(&tier.tier_id()) {
            return Err(DepthError::InvalidTier("duplicate tier id"));
        }
        ids.push(tier.tier_id());
    }
    Ok(())
}
