//! Collaborator seams of the depth pipeline.
//!
//! The pipeline itself is pure data transformation; the two things it
//! cannot decide on its own are supplied through traits:
//!
//! - [`TickToPrice`]: how a tick turns into a price for a base/quote pair.
//! - [`XScale`]: how a chart coordinate lands on a horizontal pixel.

mod tick_to_price;
mod x_scale;

pub use tick_to_price::{ExponentialTickPrice, TickToPrice};
pub use x_scale::XScale;
