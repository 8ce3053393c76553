//! The 160-bit public key digest used for address derivation.

use std::fmt;

use crate::encoding;

/// A hash160 digest (20 bytes): RIPEMD160(SHA256(data)).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash160([u8; 20]);

impl Hash160 {
    /// Creates a digest from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Computes the hash160 digest of `data`.
    #[inline]
    pub fn of(data: &[u8]) -> Self {
        Self(encoding::hash160(data))
    }

    /// Returns the digest as raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns the digest as a lowercase hex string.
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash160({})", self.to_hex())
    }
}

impl fmt::Display for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
