//! Token identity type.

use super::{Decimals, TokenAddress};

/// The canonical identity of a token on a given chain.
///
/// Combines a [`TokenAddress`] with its [`Decimals`] to fully describe
/// a token. Two tokens are considered equal only if both address and
/// decimals match.
///
/// # Examples
///
/// ```
/// use muffin_depth::domain::{Decimals, Token, TokenAddress};
///
/// let addr = TokenAddress::from_bytes([1u8; 20]);
/// let dec  = Decimals::new(6).expect("valid");
/// let tok  = Token::new(addr, dec);
///
/// assert_eq!(tok.address(), addr);
/// assert_eq!(tok.decimals(), dec);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    address: TokenAddress,
    decimals: Decimals,
}

impl Token {
    /// Creates a new `Token`.
    #[must_use]
    pub const fn new(address: TokenAddress, decimals: Decimals) -> Self {
        Self { address, decimals }
    }

    /// Returns the token address.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns `true` if this token is `token0` of a pool it shares with
    /// `other`, i.e. its address sorts first.
    #[must_use]
    pub fn sorts_before(&self, other: &Self) -> bool {
        self.address < other.address
    }
}
