//! Unified error types for the depth pipeline.
//!
//! All fallible operations across the crate return [`DepthError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//!
//! Conditions that are expected during normal operation (a series too short
//! to render, an active tick not yet indexed) are reported as `None` by the
//! relevant functions and never surface here.

use thiserror::Error;

/// Crate-wide error enum.
///
/// Validation variants carry a static description of the violated
/// invariant so that errors stay `Copy`-cheap and comparable in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepthError {
    /// A tick index is outside the supported range or otherwise unusable.
    #[error("invalid tick: {0}")]
    InvalidTick(&'static str),

    /// A liquidity delta could not be parsed or is out of range.
    #[error("invalid liquidity: {0}")]
    InvalidLiquidity(&'static str),

    /// A price is negative, NaN or infinite.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// A decimals or significant-digits value is out of range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A token or token pair is malformed.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// A clip domain is empty, reversed or non-finite.
    #[error("invalid domain: {0}")]
    InvalidDomain(&'static str),

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A tier definition is malformed.
    #[error("invalid tier: {0}")]
    InvalidTier(&'static str),

    /// Checked arithmetic overflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Series handed to the stacker do not share the same length.
    ///
    /// This always indicates a bug upstream of the stacker, since aligned
    /// series are equal-length by construction.
    #[error("series {series} has {found} points, expected {expected}")]
    SeriesLengthMismatch {
        /// Length of the first series.
        expected: usize,
        /// Length of the offending series.
        found: usize,
        /// Position of the offending series in the input list.
        series: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, DepthError>;
