//! Digest and Base58Check primitives consumed by the key core.
//!
//! These are thin, fixed-output wrappers over vetted implementations:
//! - SHA-256 and RIPEMD-160 via the `sha2` and `ripemd` crates
//! - Base58Check (Base58 with an embedded 4-byte double-SHA256 checksum)
//!   via the `bs58` crate

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::error::KeyError;

/// Computes the SHA-256 digest of `data`.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Computes the double SHA-256 digest SHA256(SHA256(data)).
#[inline]
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// Computes the RIPEMD-160 digest of `data`.
#[inline]
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(data).into()
}

/// Computes hash160: RIPEMD160(SHA256(data)).
#[inline]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Encodes `payload` as Base58Check: Base58 of payload followed by the
/// first 4 bytes of its double-SHA256 digest.
pub fn base58check_encode(payload: &[u8]) -> String {
    bs58::encode(payload).with_check().into_string()
}

/// Decodes a Base58Check string, validating and stripping the checksum.
///
/// The returned bytes still include any leading version byte; only the
/// 4-byte checksum is removed.
pub fn base58check_decode(text: &str) -> Result<Vec<u8>, KeyError> {
    bs58::decode(text)
        .with_check(None)
        .into_vec()
        .map_err(|e| KeyError::InvalidFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_vector() {
        // FIPS 180-2 test vector
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256d_vector() {
        assert_eq!(
            hex::encode(sha256d(b"hello")),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn test_ripemd160_vector() {
        assert_eq!(
            hex::encode(ripemd160(b"abc")),
            "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"
        );
    }

    #[test]
    fn test_hash160_composition() {
        let data = b"btckey";
        assert_eq!(hash160(data), ripemd160(&sha256(data)));
    }

    #[test]
    fn test_base58check_known_vector() {
        // version 0x00 + hash160 of the compressed generator point is the
        // well-known address for secret scalar 1
        let payload = hex::decode("00751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        assert_eq!(
            base58check_encode(&payload),
            "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"
        );
    }

    #[test]
    fn test_base58check_round_trip() {
        let payload: Vec<u8> = (0u8..=40).collect();
        let encoded = base58check_encode(&payload);
        assert_eq!(base58check_decode(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_base58check_rejects_bad_checksum() {
        let encoded = base58check_encode(&[0x00, 0xDE, 0xAD, 0xBE, 0xEF]);
        let mut corrupted: Vec<char> = encoded.chars().collect();
        let last = corrupted.len() - 1;
        corrupted[last] = if corrupted[last] == '2' { '3' } else { '2' };
        let corrupted: String = corrupted.into_iter().collect();
        assert!(base58check_decode(&corrupted).is_err());
    }

    #[test]
    fn test_base58check_rejects_invalid_character() {
        // '0' is not in the Base58 alphabet
        assert!(base58check_decode("0OIl").is_err());
    }
}
