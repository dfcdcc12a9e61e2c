//! Signature, recovery id and recoverable signature types

use super::keys::PublicKey;
use super::recovery;
use crate::error::{Error, Result};
use crate::traditional::ecdsa::common::SignatureComponents;
use core::fmt;
use ksig_algorithms::ec::k256 as ec;
use ksig_params::traditional::ecdsa::{
    SECP256K1_COMPACT_SIGNATURE_SIZE, SECP256K1_RECOVERABLE_SIGNATURE_SIZE,
};

/// ECDSA signature (r, s) with both components in [1, n-1]
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct Signature {
    r: ec::Scalar,
    s: ec::Scalar,
}

impl Signature {
    /// Build a signature from its components, rejecting zero.
    pub fn from_scalars(r: ec::Scalar, s: ec::Scalar) -> Result<Self> {
        if bool::from(r.is_zero()) {
            return Err(Error::malformed("signature", "r is zero"));
        }
        if bool::from(s.is_zero()) {
            return Err(Error::malformed("signature", "s is zero"));
        }
        Ok(Signature { r, s })
    }

    /// Parse the 64-byte r || s form.
    ///
    /// Both halves must be big-endian integers in [1, n-1].
    pub fn from_compact(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SECP256K1_COMPACT_SIGNATURE_SIZE {
            return Err(Error::malformed(
                "signature",
                format!("expected 64 bytes, got {}", bytes.len()),
            ));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Self::from_components(&SignatureComponents { r, s })
    }

    /// Serialize as r || s
    pub fn to_compact(&self) -> [u8; SECP256K1_COMPACT_SIGNATURE_SIZE] {
        let mut out = [0u8; SECP256K1_COMPACT_SIGNATURE_SIZE];
        out[..32].copy_from_slice(&self.r.serialize());
        out[32..].copy_from_slice(&self.s.serialize());
        out
    }

    /// ASN.1 DER encoding
    pub fn to_der(&self) -> Vec<u8> {
        SignatureComponents {
            r: self.r_bytes(),
            s: self.s_bytes(),
        }
        .to_der()
    }

    /// Parse a strict DER encoding
    pub fn from_der(der: &[u8]) -> Result<Self> {
        Self::from_components(&SignatureComponents::from_der(der)?)
    }

    fn from_components(components: &SignatureComponents) -> Result<Self> {
        let r = ec::Scalar::from_bytes(&components.r)
            .map_err(|_| Error::malformed("signature", "r is not below the curve order"))?;
        let s = ec::Scalar::from_bytes(&components.s)
            .map_err(|_| Error::malformed("signature", "s is not below the curve order"))?;
        Self::from_scalars(r, s)
    }

    /// Big-endian r
    pub fn r_bytes(&self) -> [u8; 32] {
        self.r.serialize()
    }

    /// Big-endian s
    pub fn s_bytes(&self) -> [u8; 32] {
        self.s.serialize()
    }

    /// True when s ≤ ⌊n/2⌋
    pub fn is_low_s(&self) -> bool {
        !bool::from(self.s.is_high())
    }

    /// The low-s twin (r, n − s), or a copy of `self` when s is already low
    pub fn normalize_s(&self) -> Signature {
        let mut s = self.s.clone();
        s.conditional_negate(self.s.is_high());
        Signature {
            r: self.r.clone(),
            s,
        }
    }

    pub(crate) fn r(&self) -> &ec::Scalar {
        &self.r
    }

    pub(crate) fn s(&self) -> &ec::Scalar {
        &self.s
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(")?;
        for byte in self.to_compact() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl TryFrom<Vec<u8>> for Signature {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Signature::from_compact(&bytes)
    }
}

impl From<Signature> for Vec<u8> {
    fn from(sig: Signature) -> Self {
        sig.to_compact().to_vec()
    }
}

/// Recovery identifier in 0..=3
///
/// Bit 0 is the parity of R.y, bit 1 is set when R.x ≥ n.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecoveryId(u8);

impl RecoveryId {
    /// Fails with [`Error::InvalidRecoveryId`] for values above 3
    pub fn new(id: u8) -> Result<Self> {
        if id > 3 {
            return Err(Error::InvalidRecoveryId("recovery id must be in 0..=3"));
        }
        Ok(RecoveryId(id))
    }

    pub(crate) fn from_parts(x_reduced: bool, y_odd: bool) -> Self {
        RecoveryId(((x_reduced as u8) << 1) | y_odd as u8)
    }

    /// The raw value
    pub fn to_u8(self) -> u8 {
        self.0
    }

    /// R.y was odd
    pub fn is_y_odd(self) -> bool {
        self.0 & 1 == 1
    }

    /// R.x was reduced mod n to give r
    pub fn is_x_reduced(self) -> bool {
        self.0 & 2 == 2
    }
}

impl TryFrom<u8> for RecoveryId {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        RecoveryId::new(id)
    }
}

impl From<RecoveryId> for u8 {
    fn from(id: RecoveryId) -> Self {
        id.0
    }
}

/// Signature plus the recovery id needed to reconstruct the signer's key
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct RecoverableSignature {
    signature: Signature,
    recovery_id: RecoveryId,
}

impl RecoverableSignature {
    /// Pair a signature with its recovery id
    pub fn new(signature: Signature, recovery_id: RecoveryId) -> Self {
        RecoverableSignature {
            signature,
            recovery_id,
        }
    }

    /// Parse a 64-byte compact signature with a separate recovery id
    pub fn from_compact(bytes: &[u8], recovery_id: RecoveryId) -> Result<Self> {
        Ok(Self::new(Signature::from_compact(bytes)?, recovery_id))
    }

    /// 64-byte compact signature and recovery id
    pub fn to_compact(&self) -> ([u8; SECP256K1_COMPACT_SIGNATURE_SIZE], RecoveryId) {
        (self.signature.to_compact(), self.recovery_id)
    }

    /// Parse r || s || recovery id (65 bytes)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SECP256K1_RECOVERABLE_SIGNATURE_SIZE {
            return Err(Error::malformed(
                "recoverable signature",
                format!("expected 65 bytes, got {}", bytes.len()),
            ));
        }
        let recovery_id = RecoveryId::new(bytes[64])?;
        Self::from_compact(&bytes[..64], recovery_id)
    }

    /// Serialize as r || s || recovery id
    pub fn to_bytes(&self) -> [u8; SECP256K1_RECOVERABLE_SIGNATURE_SIZE] {
        let mut out = [0u8; SECP256K1_RECOVERABLE_SIGNATURE_SIZE];
        out[..64].copy_from_slice(&self.signature.to_compact());
        out[64] = self.recovery_id.to_u8();
        out
    }

    /// The plain (r, s) signature
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Drop the recovery id
    pub fn to_signature(&self) -> Signature {
        self.signature.clone()
    }

    /// The recovery id stored alongside the signature
    pub fn recovery_id(&self) -> RecoveryId {
        self.recovery_id
    }

    /// Recover the public key that signed `digest`
    pub fn recover(&self, digest: &[u8; 32]) -> Result<PublicKey> {
        recovery::recover(&self.signature, self.recovery_id, digest)
    }
}

impl TryFrom<Vec<u8>> for RecoverableSignature {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        RecoverableSignature::from_bytes(&bytes)
    }
}

impl From<RecoverableSignature> for Vec<u8> {
    fn from(sig: RecoverableSignature) -> Self {
        sig.to_bytes().to_vec()
    }
}
