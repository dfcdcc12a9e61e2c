//! ECDSA implementation for the secp256k1 curve
//!
//! Signing follows SEC 1 v2 §4.1.3 with nonces from RFC 6979 (HMAC-SHA256).
//! Signatures are normalized to low s. The recovery id records the parity
//! of R.y and whether R.x was reduced mod n.
//!
//! The free functions work on 32-byte digests and never hash. The
//! [`EcdsaSecp256k1`] trait implementation hashes messages with SHA-256
//! first.

mod keys;
mod nonce;
mod recovery;
mod sign;
mod signature;

pub use keys::{
    derive_public_key, generate_keypair, parse_public_key, serialize_public_key,
    validate_secret_key, PublicKey, SecretKey,
};
pub use recovery::recover;
pub use sign::{sign, sign_with_entropy, verify};
pub use signature::{RecoverableSignature, RecoveryId, Signature};

use ksig_algorithms::hash::{HashFunction, Sha256};
use ksig_api::error::ResultExt;
use ksig_api::signature::SignatureSerialize;
use ksig_api::{
    RecoverableSignatureScheme, Result as ApiResult, Serialize, SerializeSecret,
    Signature as SignatureTrait,
};
use ksig_params::traditional::ecdsa::{
    SECP256K1_COMPACT_SIGNATURE_SIZE, SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE,
    SECP256K1_SECRET_KEY_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// ECDSA signature scheme over secp256k1
pub struct EcdsaSecp256k1;

fn message_digest(message: &[u8]) -> ApiResult<[u8; 32]> {
    Sha256::digest(message).with_context("ECDSA-secp256k1 message digest")
}

impl SignatureTrait for EcdsaSecp256k1 {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type SignatureData = Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "ECDSA-secp256k1"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (secret_key, public_key) =
            generate_keypair(rng).with_context("ECDSA-secp256k1 keypair")?;
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    /// Sign SHA-256(message)
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        let digest = message_digest(message)?;
        Ok(sign(secret_key, &digest)?.to_signature())
    }

    /// Verify a signature over SHA-256(message)
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        let digest = message_digest(message)?;
        if !verify(public_key, &digest, signature) {
            return Err(crate::Error::InvalidSignature("signature verification failed").into());
        }
        Ok(())
    }
}

impl RecoverableSignatureScheme for EcdsaSecp256k1 {
    type RecoverableSignature = RecoverableSignature;

    fn sign_recoverable(
        digest: &[u8; 32],
        secret_key: &Self::SecretKey,
    ) -> ApiResult<Self::RecoverableSignature> {
        Ok(sign(secret_key, digest)?)
    }

    fn recover(
        digest: &[u8; 32],
        signature: &Self::RecoverableSignature,
    ) -> ApiResult<Self::PublicKey> {
        Ok(signature.recover(digest)?)
    }
}

impl SignatureSerialize for EcdsaSecp256k1 {
    const PUBLIC_KEY_SIZE: usize = SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = SECP256K1_SECRET_KEY_SIZE;
    const SIGNATURE_SIZE: usize = SECP256K1_COMPACT_SIGNATURE_SIZE;

    fn serialize_public_key(key: &Self::PublicKey) -> Vec<u8> {
        serialize_public_key(key, true)
    }

    fn deserialize_public_key(bytes: &[u8]) -> ApiResult<Self::PublicKey> {
        Ok(parse_public_key(bytes)?)
    }

    fn serialize_secret_key(key: &Self::SecretKey) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(key.to_bytes().as_slice().to_vec())
    }

    fn deserialize_secret_key(bytes: &[u8]) -> ApiResult<Self::SecretKey> {
        Ok(SecretKey::from_bytes(bytes)?)
    }

    fn serialize_signature(sig: &Self::SignatureData) -> Vec<u8> {
        sig.to_compact().to_vec()
    }

    fn deserialize_signature(bytes: &[u8]) -> ApiResult<Self::SignatureData> {
        Ok(Signature::from_compact(bytes)?)
    }
}

impl Serialize for PublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(parse_public_key(bytes)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_compressed().to_vec()
    }
}

impl Serialize for RecoverableSignature {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(RecoverableSignature::from_bytes(bytes)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        RecoverableSignature::to_bytes(self).to_vec()
    }
}

impl SerializeSecret for SecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(SecretKey::from_bytes(bytes)?)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.to_bytes().as_slice().to_vec())
    }
}
