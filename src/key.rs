//! The wallet key entity: construction, encoded forms, and ECDSA.
//!
//! A [`Key`] is immutable once constructed. It always knows its public
//! point; the secret scalar is present only for keys built from private
//! material, so a key imported from public key bytes can verify but never
//! sign. Derived values (public point, hash160) are computed eagerly at
//! construction and every accessor is a pure function, which makes shared
//! read-only use across threads safe.

use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};

use crate::curve;
use crate::encoding;
use crate::error::KeyError;
use crate::hash160::Hash160;
use crate::network::Network;

/// WIF marker byte appended to the secret when the public key is
/// serialized compressed.
const WIF_COMPRESSED_MARKER: u8 = 0x01;

/// A secp256k1 key pair (or public half) with a fixed serialization form.
#[derive(Debug, Clone)]
pub struct Key {
    /// The secret scalar, absent for public-only keys
    secret: Option<SecretKey>,
    /// The public point, always known
    public: PublicKey,
    /// Whether encoded forms use the 33-byte compressed point
    compressed: bool,
    /// The network whose version bytes encoded forms carry
    network: Network,
    /// Cached digest of the serialized public point
    hash160: Hash160,
}

impl Key {
    /// Generates a fresh random key.
    ///
    /// Uses a cryptographically secure random number generator.
    pub fn generate(compressed: bool, network: Network) -> Self {
        let secp = Secp256k1::new();
        let (secret, public) = secp.generate_keypair(&mut rand::thread_rng());
        Self::assemble(Some(secret), public, compressed, network)
    }

    /// Imports a private key from wallet-import-format text.
    ///
    /// The Base58Check payload must be `version ‖ secret` (33 bytes,
    /// uncompressed) or `version ‖ secret ‖ 0x01` (34 bytes, compressed).
    /// The network is inferred from the version byte.
    pub fn from_wif(wif: &str) -> Result<Self, KeyError> {
        let payload = encoding::base58check_decode(wif)?;

        let compressed = match payload.len() {
            33 => false,
            34 if payload[33] == WIF_COMPRESSED_MARKER => true,
            34 => {
                return Err(KeyError::InvalidFormat(format!(
                    "bad compression marker 0x{:02x}",
                    payload[33]
                )));
            }
            n => {
                return Err(KeyError::InvalidFormat(format!(
                    "payload is {} bytes, expected 33 or 34",
                    n
                )));
            }
        };

        let network = Network::from_wif_version(payload[0]).ok_or_else(|| {
            KeyError::InvalidFormat(format!("unknown version byte 0x{:02x}", payload[0]))
        })?;

        let mut secret = [0u8; 32];
        secret.copy_from_slice(&payload[1..33]);
        Self::from_secret(secret, compressed, network)
    }

    /// Builds a key from a raw secret scalar (256-bit big-endian).
    ///
    /// The scalar must lie in [1, curve order − 1]; the public point is
    /// derived eagerly as secret·G, which cannot fail for an in-range
    /// scalar.
    pub fn from_secret(secret: [u8; 32], compressed: bool, network: Network) -> Result<Self, KeyError> {
        let secret = SecretKey::from_slice(&secret).map_err(|_| KeyError::InvalidSecret)?;
        let secp = Secp256k1::new();
        let public = PublicKey::from_secret_key(&secp, &secret);
        Ok(Self::assemble(Some(secret), public, compressed, network))
    }

    /// Builds a verify-only key from SEC1 public key bytes.
    ///
    /// Accepts 33 bytes (prefix 0x02/0x03) or 65 bytes (prefix 0x04); the
    /// point must satisfy the curve equation. The compression flag is
    /// inferred from the length.
    pub fn from_public_key(bytes: &[u8], network: Network) -> Result<Self, KeyError> {
        let compressed = match bytes.len() {
            33 => true,
            65 => false,
            n => {
                return Err(KeyError::InvalidPublicKey(format!(
                    "{} bytes, expected 33 or 65",
                    n
                )));
            }
        };
        let public =
            PublicKey::from_slice(bytes).map_err(|e| KeyError::InvalidPublicKey(e.to_string()))?;
        Ok(Self::assemble(None, public, compressed, network))
    }

    fn assemble(secret: Option<SecretKey>, public: PublicKey, compressed: bool, network: Network) -> Self {
        let hash160 = Hash160::of(&curve::serialize_point(&public, compressed));
        Self {
            secret,
            public,
            compressed,
            network,
            hash160,
        }
    }

    /// Exports the private key as wallet-import-format text.
    ///
    /// Fails with [`KeyError::NoPrivateKey`] on a public-only key.
    pub fn to_wif(&self) -> Result<String, KeyError> {
        let secret = self.secret.as_ref().ok_or(KeyError::NoPrivateKey)?;
        let mut payload = Vec::with_capacity(34);
        payload.push(self.network.wif_version());
        payload.extend_from_slice(&secret.secret_bytes());
        if self.compressed {
            payload.push(WIF_COMPRESSED_MARKER);
        }
        Ok(encoding::base58check_encode(&payload))
    }

    /// Returns the secret scalar as 256-bit big-endian bytes, if present.
    pub fn secret_bytes(&self) -> Option<[u8; 32]> {
        self.secret.as_ref().map(SecretKey::secret_bytes)
    }

    /// Returns the SEC1-serialized public point: 33 bytes compressed or
    /// 65 bytes uncompressed, per the key's compression flag.
    pub fn public_key_bytes(&self) -> Vec<u8> {
        curve::serialize_point(&self.public, self.compressed)
    }

    /// Returns the cached hash160 of the serialized public point.
    pub fn hash160(&self) -> &Hash160 {
        &self.hash160
    }

    /// Returns the pay-to-pubkey-hash address: Base58Check of
    /// `version ‖ hash160`.
    pub fn address(&self) -> String {
        let mut payload = Vec::with_capacity(21);
        payload.push(self.network.p2pkh_version());
        payload.extend_from_slice(self.hash160.as_bytes());
        encoding::base58check_encode(&payload)
    }

    /// Returns whether encoded forms use the compressed point.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Returns the network the key's encoded forms target.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Returns whether the key holds private material and can sign.
    pub fn can_sign(&self) -> bool {
        self.secret.is_some()
    }

    /// Signs a 32-byte message digest, returning a DER-encoded signature.
    ///
    /// The digest is expected to already be a message hash; this core
    /// never hashes messages itself. The nonce is derived per RFC 6979,
    /// and `s` is canonicalized to the lower half of the curve order.
    ///
    /// Fails with [`KeyError::NoPrivateKey`] on a public-only key.
    pub fn sign(&self, digest: &[u8; 32]) -> Result<Vec<u8>, KeyError> {
        let secret = self.secret.as_ref().ok_or(KeyError::NoPrivateKey)?;
        let secp = Secp256k1::signing_only();
        let signature = secp.sign_ecdsa(&Message::from_digest(*digest), secret);
        Ok(signature.serialize_der().to_vec())
    }

    /// Verifies a DER-encoded signature against a 32-byte message digest.
    ///
    /// Total over attacker-controlled input: malformed DER, out-of-range
    /// r/s, wrong keys, and tampered digests all return `false`, never an
    /// error. High-S signatures are normalized before the check so valid
    /// legacy signatures still verify.
    pub fn verify(&self, digest: &[u8; 32], signature: &[u8]) -> bool {
        let mut signature = match Signature::from_der(signature) {
            Ok(signature) => signature,
            Err(_) => return false,
        };
        signature.normalize_s();

        let secp = Secp256k1::verification_only();
        secp.verify_ecdsa(&Message::from_digest(*digest), &signature, &self.public)
            .is_ok()
    }
}
