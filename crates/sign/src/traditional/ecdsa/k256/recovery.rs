//! Public-key recovery from (r, s, recovery id)

use super::keys::PublicKey;
use super::signature::{RecoveryId, Signature};
use crate::error::{Error, Result};
use ksig_algorithms::ec::k256 as ec;
use ksig_params::traditional::ecdsa::SECP256K1;
use subtle::Choice;

/// p − n, big-endian. R.x = r + n is a field element only when r < p − n.
const P_MINUS_N: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
    0x45, 0x51, 0x23, 0x19, 0x50, 0xb7, 0x5f, 0xc4, 0x40, 0x2d, 0xa1, 0x72, 0x2f, 0xc9, 0xba, 0xee,
];

/// Reconstruct the public key Q = r⁻¹(s·R − z·G).
///
/// R is lifted from x = r (+ n when bit 1 of the recovery id is set) with
/// the y parity given by bit 0. Every failure to produce a valid key is
/// reported as [`Error::InvalidRecoveryId`].
pub fn recover(
    signature: &Signature,
    recovery_id: RecoveryId,
    digest: &[u8; 32],
) -> Result<PublicKey> {
    let r = signature.r();
    let s = signature.s();
    let r_bytes = r.serialize();

    let r_fe = ec::FieldElement::from_bytes(&r_bytes)
        .map_err(|_| Error::InvalidRecoveryId("r is not a field element"))?;
    let x = if recovery_id.is_x_reduced() {
        // r is public, so an ordinary comparison is fine
        if r_bytes >= P_MINUS_N {
            kdebug!(recovery_id = recovery_id.to_u8(), "r + n is not below p");
            return Err(Error::InvalidRecoveryId("r + n is not below p"));
        }
        let n = ec::FieldElement::from_bytes(&SECP256K1.n)?;
        r_fe.add(&n)
    } else {
        r_fe
    };

    let big_r = ec::Point::from_x_coordinate(&x, Choice::from(recovery_id.is_y_odd() as u8))
        .map_err(|_| {
            kdebug!(recovery_id = recovery_id.to_u8(), "no curve point with this x");
            Error::InvalidRecoveryId("no curve point for r")
        })?;

    let r_inv = r.inv_mod_n()?;
    let z = ec::Scalar::from_bytes_reduced(digest);
    let u1 = z.negate().mul_mod_n(&r_inv);
    let u2 = s.mul_mod_n(&r_inv);

    let q = ec::scalar_mult_base_add(&u1, &u2, &big_r);
    PublicKey::from_point(q).map_err(|_| {
        kdebug!(recovery_id = recovery_id.to_u8(), "recovered the point at infinity");
        Error::InvalidRecoveryId("recovered the point at infinity")
    })
}
