//! Shared constants for secp256k1 operations

/// Size of a secp256k1 scalar in bytes (32 bytes = 256 bits)
pub const K256_SCALAR_SIZE: usize = 32;

/// Size of a secp256k1 field element in bytes (32 bytes = 256 bits)
pub const K256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an uncompressed secp256k1 point in bytes: 0x04 || x || y
pub const K256_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * K256_FIELD_ELEMENT_SIZE;

/// Size of a compressed secp256k1 point in bytes: 0x02/0x03 || x
pub const K256_POINT_COMPRESSED_SIZE: usize = 1 + K256_FIELD_ELEMENT_SIZE;

/// Number of 4-bit windows in a scalar
pub(crate) const K256_WINDOWS: usize = 64;

/// Entries per window (0·P ..= 15·P)
pub(crate) const K256_WINDOW_ENTRIES: usize = 16;

/// p = 2^256 - 2^32 - 977, little-endian limbs
pub(crate) const FIELD_MODULUS: [u32; 8] = [
    0xFFFFFC2F, 0xFFFFFFFE, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];

/// 2^256 - p = 2^32 + 977
pub(crate) const FIELD_FOLD: [u32; 2] = [0x000003D1, 0x00000001];

/// p - 2, big-endian, exponent for Fermat inversion
pub(crate) const FIELD_P_MINUS_2: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFC, 0x2D,
];

/// (p + 1) / 4, big-endian, exponent for square roots (p = 3 mod 4)
pub(crate) const FIELD_SQRT_EXP: [u8; 32] = [
    0x3F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xBF, 0xFF, 0xFF, 0x0C,
];

/// n, the order of G, little-endian limbs
pub(crate) const CURVE_ORDER: [u32; 8] = [
    0xD0364141, 0xBFD25E8C, 0xAF48A03B, 0xBAAEDCE6, 0xFFFFFFFE, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF,
];

/// 2^256 - n
pub(crate) const ORDER_FOLD: [u32; 5] = [0x2FC9BEBF, 0x402DA173, 0x50B75FC4, 0x45512319, 0x00000001];

/// floor(n / 2)
pub(crate) const HALF_ORDER: [u32; 8] = [
    0x681B20A0, 0xDFE92F46, 0x57A4501D, 0x5D576E73, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0x7FFFFFFF,
];

/// n - 2, big-endian, exponent for Fermat inversion
pub(crate) const ORDER_N_MINUS_2: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x3F,
];

/// Generator x-coordinate, little-endian limbs
pub(crate) const GENERATOR_X: [u32; 8] = [
    0x16F81798, 0x59F2815B, 0x2DCE28D9, 0x029BFCDB, 0xCE870B07, 0x55A06295, 0xF9DCBBAC, 0x79BE667E,
];

/// Generator y-coordinate, little-endian limbs
pub(crate) const GENERATOR_Y: [u32; 8] = [
    0xFB10D4B8, 0x9C47D08F, 0xA6855419, 0xFD17B448, 0x0E1108A8, 0x5DA4FBFC, 0x26A3C465, 0x483ADA77,
];

/// Curve coefficient b
pub(crate) const CURVE_B: u32 = 7;

/// 3·b, used by the complete addition formulas
pub(crate) const CURVE_B3: u32 = 21;
