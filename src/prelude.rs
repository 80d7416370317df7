//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use muffin_depth::prelude::*;
//! ```

// Domain types
pub use crate::domain::{
    ClipDomain, Datum, Decimals, FeeTier, LiquidityNet, Price, Series, SortOrder, Tick,
    TickRecord, Tier, Token, TokenAddress, TokenPair,
};

// Collaborator traits
pub use crate::traits::{ExponentialTickPrice, TickToPrice, XScale};

// Pipeline
pub use crate::chart::{
    active_liquidity, build_curve, clip_to_domain, filter_viewport, locate_active_index,
    map_prices, merge, stack, DepthChart, LinearScale, ViewportWindow,
};

// Configuration
pub use crate::config::{DepthConfig, ZoomLevels};

// Formatting
pub use crate::math::{to_fixed_decimal_string, to_significant};

// Errors
pub use crate::error::{DepthError, Result};
