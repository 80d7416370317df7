//! Fundamental domain value types used throughout the depth pipeline.
//!
//! This module contains the value types that model the chart domain:
//! ticks and their liquidity deltas, tiers, tokens, prices, and the
//! points and series the pipeline stages pass along.
//! Validated newtypes enforce their invariants at construction.

mod clip_domain;
mod datum;
mod decimals;
mod fee_tier;
mod liquidity_net;
mod price;
mod sort_order;
mod tick;
mod tick_record;
mod tier;
mod token;
mod token_address;
mod token_pair;

pub use clip_domain::ClipDomain;
pub use datum::{Datum, Series};
pub use decimals::Decimals;
pub use fee_tier::FeeTier;
pub use liquidity_net::LiquidityNet;
pub use price::Price;
pub use sort_order::SortOrder;
pub use tick::Tick;
pub use tick_record::TickRecord;
pub use tier::{Tier, MAX_TIERS};
pub use token::Token;
pub use token_address::TokenAddress;
pub use token_pair::TokenPair;
