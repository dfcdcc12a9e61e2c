//! Byte-order conversions between 32-byte big-endian encodings and
//! little-endian u32 limb arrays

/// Load a 32-byte big-endian integer into 8 little-endian u32 limbs
pub fn be_bytes_to_limbs(bytes: &[u8; 32]) -> [u32; 8] {
    let mut limbs = [0u32; 8];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let off = (7 - i) * 4;
        *limb = u32::from_be_bytes([bytes[off], bytes[off + 1], bytes[off + 2], bytes[off + 3]]);
    }
    limbs
}

/// Store 8 little-endian u32 limbs as a 32-byte big-endian integer
pub fn limbs_to_be_bytes(limbs: &[u32; 8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        let off = (7 - i) * 4;
        out[off..off + 4].copy_from_slice(&limb.to_be_bytes());
    }
    out
}
