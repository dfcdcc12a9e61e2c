//! Shared secret-holding types for the ksig library
//!
//! Hash state, HMAC pads and nonce generator state are kept in these
//! wrappers so they are wiped when they go out of scope.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod security;

pub use security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};
