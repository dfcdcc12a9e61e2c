//! Constant-time primitives behind the ksig signing engine
//!
//! This crate provides the secp256k1 field, scalar and point arithmetic
//! together with the SHA-256 and HMAC-SHA256 primitives that ECDSA and
//! RFC 6979 nonce derivation are built from.
//!
//! # Security Features
//!
//! - Secret-dependent arithmetic avoids data-dependent branches and
//!   table lookups
//! - Scalars and hash state are zeroized when dropped
//! - MAC tags are compared in constant time

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha256};

// MAC implementations
pub mod mac;
pub use mac::Hmac;

// Elliptic Curve primitives
pub mod ec;
pub use ec::{k256, K256Point, K256Scalar};

// Re-export security types from ksig-common
pub use ksig_common::security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};
