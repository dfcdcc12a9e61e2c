//! Deterministic signing and low-s verification over 32-byte digests
//!
//! No hashing happens here. The digest is interpreted as a big-endian
//! integer and reduced once mod n.

use super::keys::{PublicKey, SecretKey};
use super::nonce::NonceGenerator;
use super::signature::{RecoverableSignature, RecoveryId, Signature};
use crate::error::{Error, Result};
use ksig_algorithms::ec::k256 as ec;
use ksig_internal::constant_time::ct_eq;

/// Bound on nonces tried when r or s comes out zero
const MAX_SIGN_ATTEMPTS: usize = 16;

/// Sign a 32-byte digest with an RFC 6979 nonce.
///
/// Identical inputs always give identical output. The returned s is low
/// and the recovery id reflects any negation.
pub fn sign(secret_key: &SecretKey, digest: &[u8; 32]) -> Result<RecoverableSignature> {
    sign_inner(secret_key, digest, None)
}

/// Sign with 32 bytes of additional data mixed into the nonce (RFC 6979 §3.6).
///
/// Deterministic for a fixed `extra`. Fresh random `extra` gives hedged
/// signatures that still verify and recover normally.
pub fn sign_with_entropy(
    secret_key: &SecretKey,
    digest: &[u8; 32],
    extra: &[u8; 32],
) -> Result<RecoverableSignature> {
    sign_inner(secret_key, digest, Some(extra))
}

fn sign_inner(
    secret_key: &SecretKey,
    digest: &[u8; 32],
    extra: Option<&[u8; 32]>,
) -> Result<RecoverableSignature> {
    let d = secret_key.as_scalar();
    let z = ec::Scalar::from_bytes_reduced(digest);
    let mut nonces = NonceGenerator::new(secret_key.to_bytes().as_array(), &z.serialize(), extra)?;

    for _ in 0..MAX_SIGN_ATTEMPTS {
        let k = nonces.next_nonce()?;

        // k ∈ [1, n-1], so R is never the identity
        let big_r = ec::scalar_mult_base_g(&k);
        let rx = big_r.x_coordinate_bytes();
        let r = ec::Scalar::from_bytes_reduced(&rx);
        if bool::from(r.is_zero()) {
            ktrace!("r = 0, drawing another nonce");
            continue;
        }

        // s = k⁻¹(z + r·d)
        let k_inv = k.inv_mod_n()?;
        let mut s = k_inv.mul_mod_n(&z.add_mod_n(&r.mul_mod_n(d)));
        if bool::from(s.is_zero()) {
            ktrace!("s = 0, drawing another nonce");
            continue;
        }

        let high = s.is_high();
        s.conditional_negate(high);

        let x_reduced = !ct_eq(r.serialize(), rx);
        let y_odd = bool::from(big_r.y_is_odd() ^ high);
        let signature = Signature::from_scalars(r, s)?;
        return Ok(RecoverableSignature::new(
            signature,
            RecoveryId::from_parts(x_reduced, y_odd),
        ));
    }

    Err(Error::SignatureGeneration {
        algorithm: "ECDSA-secp256k1",
        details: "no usable nonce",
    })
}

/// Standard ECDSA verification restricted to low-s signatures.
///
/// Returns false for r = 0, s = 0, s > ⌊n/2⌋ or any mismatch.
pub fn verify(public_key: &PublicKey, digest: &[u8; 32], signature: &Signature) -> bool {
    let r = signature.r();
    let s = signature.s();
    if bool::from(r.is_zero() | s.is_zero()) {
        return false;
    }
    if !signature.is_low_s() {
        kdebug!("rejecting high-s signature");
        return false;
    }

    let z = ec::Scalar::from_bytes_reduced(digest);
    let w = match s.inv_mod_n() {
        Ok(w) => w,
        Err(_) => return false,
    };
    let u1 = z.mul_mod_n(&w);
    let u2 = r.mul_mod_n(&w);

    // X = u₁·G + u₂·Q
    let x = ec::scalar_mult_base_add(&u1, &u2, public_key.as_point());
    if x.is_identity() {
        return false;
    }

    let v = ec::Scalar::from_bytes_reduced(&x.x_coordinate_bytes());
    v == *r
}
