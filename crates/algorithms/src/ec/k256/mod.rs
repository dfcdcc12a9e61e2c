//! Koblitz secp256k1 Elliptic Curve Primitives
//!
//! The curve equation is y² = x³ + 7 over the prime field F_p where:
//! - p = 2^256 - 2^32 - 977
//! - The curve order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! Field, scalar and point arithmetic take time independent of secret
//! values. Only public exponents and public encodings are branched on.

mod constants;
mod field;
mod limbs;
mod point;
mod scalar;
mod table;

pub use constants::{
    K256_FIELD_ELEMENT_SIZE, K256_POINT_COMPRESSED_SIZE, K256_POINT_UNCOMPRESSED_SIZE,
    K256_SCALAR_SIZE,
};
pub use field::FieldElement;
pub use point::{Point, PointFormat};
pub use scalar::Scalar;

use crate::error::{Error, Result};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Upper bound on rejection-sampling draws in [`generate_keypair`]. Each
/// draw fails with probability below 2⁻¹²⁷.
const KEYGEN_MAX_ATTEMPTS: usize = 64;

/// Get the standard base point G of the secp256k1 curve
pub fn base_point_g() -> Point {
    Point::generator()
}

/// Scalar multiplication with the base point: scalar * G
///
/// Uses the shared precomputed table.
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    table::generator_table().mul(scalar).to_affine()
}

/// General scalar multiplication: compute scalar * point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    point.mul(scalar)
}

/// a·G + b·P
pub fn scalar_mult_base_add(a: &Scalar, b: &Scalar, point: &Point) -> Point {
    let a_g = table::generator_table().mul(a);
    let b_p = point.to_projective().mul(b);
    a_g.add(&b_p).to_affine()
}

/// Generate a key pair by rejection sampling a scalar in [1, n−1]
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let mut scalar_bytes = [0u8; K256_SCALAR_SIZE];
    for _ in 0..KEYGEN_MAX_ATTEMPTS {
        rng.fill_bytes(&mut scalar_bytes);
        let candidate = Scalar::new(scalar_bytes);
        scalar_bytes.zeroize();
        if let Ok(secret) = candidate {
            let public = scalar_mult_base_g(&secret);
            return Ok((secret, public));
        }
    }
    Err(Error::Processing {
        operation: "K256 key generation",
        details: "random source produced no valid scalar",
    })
}
