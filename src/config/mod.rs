//! Pipeline configuration structs.
//!
//! [`DepthConfig`] carries the knobs of one depth-chart computation;
//! [`ZoomLevels`] holds the default visible window and zoom bounds, with
//! presets keyed by fee tier.

mod depth;
mod zoom;

pub use depth::{DepthConfig, DEFAULT_SIGNIFICANT_DIGITS};
pub use zoom::ZoomLevels;
