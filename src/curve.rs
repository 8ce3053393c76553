//! Scalar and point arithmetic over the secp256k1 group.
//!
//! Operands are 256-bit big-endian integers and SEC1-serialized points.
//! Nothing here is hand-rolled: every operation delegates to the vetted
//! `secp256k1` library, which also backs key derivation and ECDSA in
//! [`crate::key`]. These wrappers pin down the byte-level contract the
//! rest of the crate (and its callers) rely on.

use secp256k1::{PublicKey, Scalar, Secp256k1, SecretKey};

use crate::error::KeyError;

/// Adds two scalars mod the curve order.
///
/// `a` must lie in [1, order − 1]; `b` may be any value below the order.
/// Fails with [`KeyError::InvalidSecret`] if an operand is out of range or
/// the sum is zero mod the order.
pub fn scalar_mod_add(a: &[u8; 32], b: &[u8; 32]) -> Result<[u8; 32], KeyError> {
    let a = SecretKey::from_slice(a).map_err(|_| KeyError::InvalidSecret)?;
    let b = Scalar::from_be_bytes(*b).map_err(|_| KeyError::InvalidSecret)?;
    let sum = a.add_tweak(&b).map_err(|_| KeyError::InvalidSecret)?;
    Ok(sum.secret_bytes())
}

/// Multiplies two scalars mod the curve order.
///
/// Same operand ranges as [`scalar_mod_add`]; fails if the product is zero
/// mod the order.
pub fn scalar_mod_mul(a: &[u8; 32], b: &[u8; 32]) -> Result<[u8; 32], KeyError> {
    let a = SecretKey::from_slice(a).map_err(|_| KeyError::InvalidSecret)?;
    let b = Scalar::from_be_bytes(*b).map_err(|_| KeyError::InvalidSecret)?;
    let product = a.mul_tweak(&b).map_err(|_| KeyError::InvalidSecret)?;
    Ok(product.secret_bytes())
}

/// Adds two curve points given in SEC1 form (33 or 65 bytes each).
///
/// Fails with [`KeyError::InvalidPublicKey`] if an input is not a valid
/// curve point or the sum is the point at infinity. The result is
/// serialized compressed or uncompressed per `compressed`.
pub fn point_add(p: &[u8], q: &[u8], compressed: bool) -> Result<Vec<u8>, KeyError> {
    let p = parse_point(p)?;
    let q = parse_point(q)?;
    let sum = p
        .combine(&q)
        .map_err(|_| KeyError::InvalidPublicKey("sum is the point at infinity".into()))?;
    Ok(serialize_point(&sum, compressed))
}

/// Multiplies a SEC1-encoded curve point by a scalar.
///
/// Fails if the point is invalid, or the scalar is zero or not below the
/// curve order (either case would leave the group).
pub fn point_scalar_mul(point: &[u8], scalar: &[u8; 32], compressed: bool) -> Result<Vec<u8>, KeyError> {
    let point = parse_point(point)?;
    let scalar = Scalar::from_be_bytes(*scalar).map_err(|_| KeyError::InvalidSecret)?;
    let secp = Secp256k1::verification_only();
    let product = point
        .mul_tweak(&secp, &scalar)
        .map_err(|_| KeyError::InvalidSecret)?;
    Ok(serialize_point(&product, compressed))
}

fn parse_point(bytes: &[u8]) -> Result<PublicKey, KeyError> {
    PublicKey::from_slice(bytes).map_err(|e| KeyError::InvalidPublicKey(e.to_string()))
}

pub(crate) fn serialize_point(point: &PublicKey, compressed: bool) -> Vec<u8> {
    if compressed {
        point.serialize().to_vec()
    } else {
        point.serialize_uncompressed().to_vec()
    }
}
