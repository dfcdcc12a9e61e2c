//! Constants for elliptic curve signature schemes

pub mod ecdsa;
