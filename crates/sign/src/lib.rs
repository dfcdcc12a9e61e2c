//! Digital Signature Schemes
//!
//! Deterministic, recoverable ECDSA over secp256k1: key handling, RFC 6979
//! signing, low-s verification and public-key recovery from a signature.

#![forbid(unsafe_code)]

// Tracing is optional. Without the `trace` feature these expand to nothing.
#[cfg(feature = "trace")]
macro_rules! ktrace {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}
#[cfg(not(feature = "trace"))]
macro_rules! ktrace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "trace")]
macro_rules! kdebug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}
#[cfg(not(feature = "trace"))]
macro_rules! kdebug {
    ($($arg:tt)*) => {};
}

pub mod error;
pub mod traditional;

pub use error::{Error, Result};

// Re-exports from traditional schemes
pub use traditional::ecdsa::k256::{
    derive_public_key, generate_keypair, parse_public_key, recover, serialize_public_key, sign,
    sign_with_entropy, validate_secret_key, verify, EcdsaSecp256k1, PublicKey,
    RecoverableSignature, RecoveryId, SecretKey, Signature,
};
