//! Numeric helpers for the depth pipeline.
//!
//! This module provides tick math (`price = 1.0001^tick`) and the decimal
//! rendering helpers used to turn chart values into plain strings.
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`price_at_tick`] / [`tick_at_price`] | Raw tick ⇄ price conversion |
//! | [`to_fixed_decimal_string`] | `f64` → plain decimal string, no exponent |
//! | [`to_significant`] / [`round_significant`] | Significant-digit rounding |

mod decimal_string;
mod tick_math;

pub use decimal_string::{
    round_significant, to_fixed_decimal_string, to_fixed_decimal_string_with_cap,
    to_significant, DEFAULT_EXPONENT_CAP, MAX_SIGNIFICANT_DIGITS,
};
pub use tick_math::{price_at_tick, tick_at_price};
