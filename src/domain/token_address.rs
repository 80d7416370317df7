//! EVM token contract address.

use core::fmt;

/// A 20-byte EVM contract address identifying a token.
///
/// All 20-byte sequences are considered valid addresses, so construction
/// is infallible.  Ordering is lexicographic over the raw bytes, which is
/// the order the pool contracts use to pick `token0` and `token1`.
///
/// # Examples
///
/// ```
/// use muffin_depth::domain::TokenAddress;
///
/// let addr = TokenAddress::from_bytes([1u8; 20]);
/// assert_eq!(addr.as_bytes(), [1u8; 20]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenAddress([u8; 20]);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 20-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 20] {
        self.0
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
