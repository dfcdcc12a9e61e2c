//! Domain parameters for ECDSA over short Weierstrass curves
//!
//! All values are big-endian byte strings.

/// Domain parameters of a 256-bit curve y^2 = x^3 + ax + b over F_p
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams256 {
    /// Field prime
    pub p: [u8; 32],
    /// Coefficient a
    pub a: [u8; 32],
    /// Coefficient b
    pub b: [u8; 32],
    /// Generator x-coordinate
    pub g_x: [u8; 32],
    /// Generator y-coordinate
    pub g_y: [u8; 32],
    /// Order of the generator
    pub n: [u8; 32],
    /// floor(n / 2), the largest s accepted in low-s form
    pub half_n: [u8; 32],
    /// Cofactor
    pub h: u32,
}

/// secp256k1 (SEC 2, section 2.4.1)
pub const SECP256K1: CurveParams256 = CurveParams256 {
    p: [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF,
        0xFC, 0x2F,
    ],
    a: [0u8; 32],
    b: [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0x07,
    ],
    g_x: [
        0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B,
        0x07, 0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8,
        0x17, 0x98,
    ],
    g_y: [
        0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08,
        0xA8, 0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10,
        0xD4, 0xB8,
    ],
    n: [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
        0x41, 0x41,
    ],
    half_n: [
        0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B,
        0x20, 0xA0,
    ],
    h: 1,
};

/// Size of a secp256k1 secret key in bytes
pub const SECP256K1_SECRET_KEY_SIZE: usize = 32;

/// Size of a compressed SEC1 public key in bytes
pub const SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// Size of an uncompressed SEC1 public key in bytes
pub const SECP256K1_UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

/// Size of a compact (r || s) signature in bytes
pub const SECP256K1_COMPACT_SIGNATURE_SIZE: usize = 64;

/// Size of a compact signature followed by its recovery id byte
pub const SECP256K1_RECOVERABLE_SIGNATURE_SIZE: usize = 65;

/// Size of the message digest accepted by the digest-level API
pub const SECP256K1_DIGEST_SIZE: usize = 32;
