//! Public API traits and types for the ksig library
//!
//! This crate provides the public API surface for the ksig workspace: the
//! error type every crate converts into and the signature scheme traits
//! implemented by the signing crate.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

pub use error::{Error, Result};

pub use traits::{RecoverableSignatureScheme, Serialize, SerializeSecret, Signature};

pub use traits::{serialize, signature};
