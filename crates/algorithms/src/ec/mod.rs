//! Elliptic Curve Primitives
//!
//! Only the Koblitz curve secp256k1 is implemented.

pub mod k256;

pub use k256::{Point as K256Point, Scalar as K256Scalar};
