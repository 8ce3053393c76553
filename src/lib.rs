//! # btckey
//!
//! Bitcoin-style secp256k1 key management: a single immutable key pair
//! with WIF import/export, hash160/address derivation, and deterministic
//! ECDSA signing and verification.
//!
//! ## Architecture
//!
//! - `key`: The key entity: construction, encoded forms, sign/verify
//! - `curve`: Scalar and point arithmetic over the secp256k1 group
//! - `encoding`: Digest and Base58Check primitives
//! - `hash160`: The 160-bit public key digest
//! - `network`: Mainnet/testnet version bytes
//! - `error`: Error taxonomy

pub mod curve;
pub mod encoding;
pub mod error;
pub mod hash160;
pub mod key;
pub mod network;

pub use error::KeyError;
pub use hash160::Hash160;
pub use key::Key;
pub use network::Network;
