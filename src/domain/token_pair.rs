//! Base/quote pair a chart is priced in.

use super::Token;
use crate::error::DepthError;

/// A pair of distinct tokens in quoting order.
///
/// Unlike the pool's canonical `(token0, token1)` ordering, a chart keeps
/// the order the user picked: prices are expressed as units of
/// [`quote`](Self::quote) per unit of [`base`](Self::base).
///
/// # Examples
///
/// ```
/// use muffin_depth::domain::{Decimals, Token, TokenAddress, TokenPair};
///
/// let usdc = Token::new(TokenAddress::from_bytes([1u8; 20]), Decimals::new(6).expect("valid"));
/// let weth = Token::new(TokenAddress::from_bytes([2u8; 20]), Decimals::new(18).expect("valid"));
///
/// let pair = TokenPair::new(weth, usdc).expect("distinct tokens");
/// assert_eq!(pair.base(), weth);
/// assert_eq!(pair.quote(), usdc);
/// assert_eq!(pair.token0(), usdc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    base: Token,
    quote: Token,
}

impl TokenPair {
    /// Creates a new `TokenPair` quoted as `quote` per `base`.
    ///
    /// # Errors
    ///
    /// Returns [`DepthError::InvalidToken`] if both tokens have the same address.
    pub fn new(base: Token, quote: Token) -> Result<Self, DepthError> {
        if base.address() == quote.address() {
            return Err(DepthError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }
        Ok(Self { base, quote })
    }

    /// Returns the base token.
    #[must_use]
    pub const fn base(&self) -> Token {
        self.base
    }

    /// Returns the quote token.
    #[must_use]
    pub const fn quote(&self) -> Token {
        self.quote
    }

    /// Returns the token with the lower address.
    #[must_use]
    pub fn token0(&self) -> Token {
        if self.base.sorts_before(&self.quote) {
            self.base
        } else {
            self.quote
        }
    }

    /// Returns the same pair quoted the other way round.
    #[must_use]
    pub const fn flipped(&self) -> Self {
        Self {
            base: self.quote,
            quote: self.base,
        }
    }
}
