//! Error taxonomy for key construction, export, and signing.

/// Errors produced by key construction and private-key operations.
///
/// Verification is deliberately absent here: [`crate::Key::verify`] is a
/// total function over untrusted input and reports failure as `false`.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// Malformed wallet-import-format text: bad length, checksum, or
    /// version byte.
    #[error("Invalid private key format: {0}")]
    InvalidFormat(String),

    /// The secret scalar is zero or not below the curve order.
    #[error("Secret scalar out of range")]
    InvalidSecret,

    /// Public key bytes with a bad length or prefix, or a point that is
    /// not on the curve.
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// A private-key operation was attempted on a public-only key.
    #[error("Key has no private key material")]
    NoPrivateKey,
}
