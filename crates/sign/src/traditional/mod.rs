//! Traditional signature schemes
//!
//! Only ECDSA over secp256k1 is provided.

pub mod ecdsa;

// Re-export ECDSA types
pub use ecdsa::{EcdsaSecp256k1, PublicKey, RecoverableSignature, RecoveryId, SecretKey, Signature};
