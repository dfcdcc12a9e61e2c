//! Security primitives for handling sensitive material

pub mod secret;

pub use secret::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};
