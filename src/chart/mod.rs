//! Depth chart pipeline stages.
//!
//! Each stage is a pure function over borrowed input that returns a fresh
//! value; [`DepthChart`] chains them for the common case.
//!
//! | Stage | Entry point | Input → Output |
//! |-------|-------------|----------------|
//! | Tick curve | [`build_curve`] | tick records → cumulative tick series |
//! | Alignment | [`merge`] | N series → N series on one x-grid |
//! | Pricing | [`map_prices`] | tick x → price x |
//! | Stacking | [`stack`] | N series → N layered series |
//! | Clipping | [`clip_to_domain`] | series → series spanning `[lo, hi]` |
//! | Viewport | [`filter_viewport`] | series → borrowed on-screen window |
//! | Active step | [`locate_active_index`] / [`active_liquidity`] | series → level at current price |

mod active;
mod clip;
mod curve;
mod merge;
mod pipeline;
mod price_map;
mod scale;
mod stack;
mod viewport;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use active::{active_liquidity, locate_active_index};
pub use clip::clip_to_domain;
pub use curve::build_curve;
pub use merge::merge;
pub use pipeline::DepthChart;
pub use price_map::map_prices;
pub use scale::LinearScale;
pub use stack::stack;
pub use viewport::{filter_viewport, ViewportIter, ViewportWindow};
