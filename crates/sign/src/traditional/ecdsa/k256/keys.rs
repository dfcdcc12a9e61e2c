//! secp256k1 key handling
//!
//! Secret keys are validated scalars in [1, n-1]. Public keys are
//! non-identity curve points whose only external forms are the 33-byte
//! compressed and 65-byte uncompressed SEC1 encodings.

use crate::error::{Error, Result};
use core::fmt;
use ksig_algorithms::ec::k256 as ec;
use ksig_common::security::SecretBuffer;
use ksig_params::traditional::ecdsa::{
    SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE, SECP256K1_SECRET_KEY_SIZE,
    SECP256K1_UNCOMPRESSED_PUBLIC_KEY_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// secp256k1 secret key
///
/// The scalar d satisfies 1 ≤ d ≤ n-1. It is wiped when the key is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    scalar: ec::Scalar,
}

impl SecretKey {
    /// Decode a 32-byte big-endian secret key.
    ///
    /// Fails with [`Error::InvalidSecretKey`] for any other length, for zero
    /// and for values ≥ n.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SECP256K1_SECRET_KEY_SIZE {
            return Err(Error::InvalidSecretKey("secret key must be 32 bytes"));
        }
        let buffer = SecretBuffer::<SECP256K1_SECRET_KEY_SIZE>::from_prefix(bytes)
            .ok_or(Error::InvalidSecretKey("secret key must be 32 bytes"))?;
        let scalar = ec::Scalar::from_secret_buffer(&buffer)
            .map_err(|_| Error::InvalidSecretKey("secret key must be in [1, n-1]"))?;
        Ok(SecretKey { scalar })
    }

    /// Big-endian encoding, zeroized when the buffer is dropped
    pub fn to_bytes(&self) -> SecretBuffer<SECP256K1_SECRET_KEY_SIZE> {
        SecretBuffer::new(self.scalar.serialize())
    }

    /// Q = d·G
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            point: ec::scalar_mult_base_g(&self.scalar),
        }
    }

    pub(crate) fn as_scalar(&self) -> &ec::Scalar {
        &self.scalar
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// secp256k1 public key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct PublicKey {
    point: ec::Point,
}

impl PublicKey {
    /// Wrap a curve point. The identity is not a valid public key.
    pub fn from_point(point: ec::Point) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::PointNotOnCurve {
                context: "public key is the point at infinity",
            });
        }
        Ok(PublicKey { point })
    }

    /// Parse a SEC1 encoding. See [`parse_public_key`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        parse_public_key(bytes)
    }

    /// 0x02/0x03 || x
    pub fn to_compressed(&self) -> [u8; SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE] {
        self.point.serialize_compressed()
    }

    /// 0x04 || x || y
    pub fn to_uncompressed(&self) -> [u8; SECP256K1_UNCOMPRESSED_PUBLIC_KEY_SIZE] {
        self.point.serialize_uncompressed()
    }

    /// The underlying curve point
    pub fn as_point(&self) -> &ec::Point {
        &self.point
    }
}

impl TryFrom<Vec<u8>> for PublicKey {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        parse_public_key(&bytes)
    }
}

impl From<PublicKey> for Vec<u8> {
    fn from(key: PublicKey) -> Self {
        key.to_compressed().to_vec()
    }
}

/// True iff `bytes` is exactly 32 bytes encoding an integer in [1, n-1]
pub fn validate_secret_key(bytes: &[u8]) -> bool {
    SecretKey::from_bytes(bytes).is_ok()
}

/// Derive the public key Q = d·G.
///
/// A [`SecretKey`] only exists for d in [1, n-1], so this cannot fail for a
/// constructed key. Raw bytes go through [`SecretKey::from_bytes`] first.
pub fn derive_public_key(secret_key: &SecretKey) -> Result<PublicKey> {
    PublicKey::from_point(ec::scalar_mult_base_g(secret_key.as_scalar()))
}

/// Serialize a public key in compressed (33 bytes) or uncompressed (65 bytes) form
pub fn serialize_public_key(key: &PublicKey, compressed: bool) -> Vec<u8> {
    if compressed {
        key.to_compressed().to_vec()
    } else {
        key.to_uncompressed().to_vec()
    }
}

/// Parse a compressed or uncompressed SEC1 public key.
///
/// Any length other than 33 or 65, or a tag byte that does not match the
/// length, is [`Error::MalformedEncoding`]. A coordinate that is not a
/// canonical field element, or a point that is off the curve, is
/// [`Error::PointNotOnCurve`].
pub fn parse_public_key(bytes: &[u8]) -> Result<PublicKey> {
    let point = match (bytes.len(), bytes.first()) {
        (SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE, Some(0x02 | 0x03)) => {
            ec::Point::deserialize_compressed(bytes)?
        }
        (SECP256K1_UNCOMPRESSED_PUBLIC_KEY_SIZE, Some(0x04)) => {
            ec::Point::deserialize_uncompressed(bytes)?
        }
        (SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE | SECP256K1_UNCOMPRESSED_PUBLIC_KEY_SIZE, _) => {
            return Err(Error::malformed("public key", "invalid tag byte"));
        }
        (len, _) => {
            return Err(Error::malformed(
                "public key",
                format!("expected 33 or 65 bytes, got {}", len),
            ));
        }
    };
    PublicKey::from_point(point)
}

/// Generate a key pair by rejection sampling from `rng`
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(SecretKey, PublicKey)> {
    let (scalar, point) = ec::generate_keypair(rng)?;
    Ok((SecretKey { scalar }, PublicKey::from_point(point)?))
}
