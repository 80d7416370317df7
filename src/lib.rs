//! # Muffin Depth
//!
//! Liquidity-depth chart data for multi-tier concentrated-liquidity pools.
//!
//! A Muffin pool hosts up to six fee tiers, each with its own liquidity
//! curve.  This crate turns the raw per-tier tick data served by an indexer
//! into chart-ready series:
//!
//! - **Tick curves**: signed liquidity deltas integrated into levels.
//! - **Alignment**: all tiers on one shared x-grid, carried forward as
//!   step functions.
//! - **Pricing**: tick indices replaced by prices through a pluggable
//!   [`TickToPrice`](traits::TickToPrice) collaborator.
//! - **Stacking**: cumulative layers for stacked-area rendering.
//! - **Clipping** and **viewport filtering** for the visible price window.
//! - **Plain decimal formatting** of values, never in exponent notation.
//!
//! Everything is pure, synchronous and in-process.  The crate does no I/O
//! and keeps no state between calls.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | yes | Standard library support |
//! | `serde` | yes | `Serialize`/`Deserialize` for domain and config types |
//!
//! # Quick Start
//!
//! ```rust
//! use muffin_depth::chart::{DepthChart, LinearScale};
//! use muffin_depth::config::DepthConfig;
//! use muffin_depth::domain::{
//!     ClipDomain, Decimals, FeeTier, Tier, TickRecord, Token, TokenAddress, TokenPair,
//! };
//! use muffin_depth::traits::ExponentialTickPrice;
//!
//! // 1. Two tokens, quoted as token B per token A
//! let a = Token::new(
//!     TokenAddress::from_bytes([1u8; 20]),
//!     Decimals::new(18).expect("valid decimals"),
//! );
//! let b = Token::new(
//!     TokenAddress::from_bytes([2u8; 20]),
//!     Decimals::new(18).expect("valid decimals"),
//! );
//! let pair = TokenPair::new(a, b).expect("distinct tokens");
//!
//! // 2. Tick data of two tiers, as delivered by the indexer
//! let tiers = vec![
//!     Tier::new(0, FeeTier::TIER_0_05_PERCENT, vec![
//!         TickRecord::parse(-600, "5000").expect("valid"),
//!         TickRecord::parse(600, "-5000").expect("valid"),
//!     ]).expect("valid tier"),
//!     Tier::new(1, FeeTier::TIER_0_30_PERCENT, vec![
//!         TickRecord::parse(-1200, "2000").expect("valid"),
//!         TickRecord::parse(1200, "-2000").expect("valid"),
//!     ]).expect("valid tier"),
//! ];
//!
//! // 3. Build the chart
//! let chart = DepthChart::build(&tiers, &pair, &ExponentialTickPrice, &DepthConfig::default())
//!     .expect("chart built");
//! assert_eq!(chart.x_values().len(), 4);
//!
//! // 4. Clip tier 0 to the initial window around the current price
//! let domain = chart.zoom_levels().initial_domain(1.0).expect("valid window");
//! let visible = chart.clip_tier(0, domain).expect("renderable");
//! assert_eq!(visible.first().map(|d| d.x), Some(domain.lo()));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Indexer     │  per-tier {tickIndex, liquidityNet}
//! └──────┬───────┘
//!        │ Tier / TickRecord
//!        ▼
//! ┌──────────────┐
//! │  build_curve  │  running liquidity per tier
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │    merge      │  shared x-grid, carry-forward
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │  map_prices   │  tick → price via TickToPrice
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │    stack      │  layered series
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │ clip/viewport │  per frame, per visible tier
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Tick`](domain::Tick), [`LiquidityNet`](domain::LiquidityNet), [`Tier`](domain::Tier), [`Datum`](domain::Datum), etc. |
//! | [`traits`] | Collaborator seams: [`TickToPrice`](traits::TickToPrice), [`XScale`](traits::XScale) |
//! | [`config`] | [`DepthConfig`](config::DepthConfig) and [`ZoomLevels`](config::ZoomLevels) |
//! | [`chart`]  | Pipeline stages and the [`DepthChart`](chart::DepthChart) orchestrator |
//! | [`math`]   | Tick math and plain decimal formatting |
//! | [`error`]  | [`DepthError`](error::DepthError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod chart;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod traits;
