//! Trait definitions for signature schemes and byte serialization

pub mod serialize;
pub mod signature;

pub use serialize::{Serialize, SerializeSecret};
pub use signature::{RecoverableSignatureScheme, Signature, SignatureSerialize};
