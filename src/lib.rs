//! # ksig
//!
//! A pure Rust secp256k1 signing engine: deterministic recoverable ECDSA,
//! SEC1 public-key encodings and public-key recovery.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ksig = "0.3"
//! ```
//!
//! ```
//! use ksig::prelude::*;
//!
//! let sk = SecretKey::from_bytes(&[0x01; 32]).unwrap();
//! let digest = [0x02; 32];
//! let sig = ksig::sign::sign(&sk, &digest).unwrap();
//! assert!(ksig::sign::verify(&sk.public_key(), &digest, sig.signature()));
//! assert_eq!(sig.recover(&digest).unwrap(), sk.public_key());
//! ```
//!
//! ## Features
//!
//! - `sign` (default): keys, signing, verification and recovery
//! - `algorithms`: direct access to field, scalar and point arithmetic
//! - `trace`: `tracing` events for nonce retries and rejected inputs
//! - `serde`: serde support for public keys and signatures
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ksig-api`]: Public error type and signature traits
//! - [`ksig-common`]: Zeroizing secret containers
//! - [`ksig-algorithms`]: secp256k1 arithmetic, SHA-256, HMAC
//! - [`ksig-sign`]: ECDSA over secp256k1

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use ksig_api as api;
pub use ksig_common as common;
pub use ksig_internal as internal;
pub use ksig_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use ksig_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use ksig_sign as sign;

/// Common imports for ksig users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{RecoverableSignatureScheme, Serialize, SerializeSecret, Signature};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        EcdsaSecp256k1, PublicKey, RecoverableSignature, RecoveryId, SecretKey,
    };
}
