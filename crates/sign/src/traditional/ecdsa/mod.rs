//! ECDSA signature implementations
//!
//! Secure implementation of the Elliptic Curve Digital Signature Algorithm
//! over the Koblitz curve secp256k1, with recoverable signatures.

pub mod common;
pub mod k256;

// Re-export secp256k1 types
pub use k256::{EcdsaSecp256k1, PublicKey, RecoverableSignature, RecoveryId, SecretKey, Signature};
