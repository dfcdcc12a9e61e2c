//! Common utilities for ECDSA implementations

use crate::error::{Error, Result};

const SEQUENCE_TAG: u8 = 0x30;
const INTEGER_TAG: u8 = 0x02;

/// ECDSA signature components (r, s) as fixed-width big-endian integers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureComponents {
    /// Big-endian r
    pub r: [u8; 32],
    /// Big-endian s
    pub s: [u8; 32],
}

impl SignatureComponents {
    /// Serialize signature to DER format
    ///
    /// SEQUENCE { INTEGER r, INTEGER s }, each integer minimally encoded.
    pub fn to_der(&self) -> Vec<u8> {
        let r = encode_integer(&self.r);
        let s = encode_integer(&self.s);

        let mut der = Vec::with_capacity(6 + r.len() + s.len());
        der.push(SEQUENCE_TAG);
        // At most 2 × (2 + 33) = 70 bytes, so the short length form always applies
        der.push((4 + r.len() + s.len()) as u8);
        der.push(INTEGER_TAG);
        der.push(r.len() as u8);
        der.extend_from_slice(&r);
        der.push(INTEGER_TAG);
        der.push(s.len() as u8);
        der.extend_from_slice(&s);
        der
    }

    /// Parse a strict DER signature.
    ///
    /// Rejects long-form lengths, trailing bytes, negative or non-minimal
    /// integers and integers wider than 32 bytes.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        if der.len() < 8 {
            return Err(Error::malformed("DER signature", "too short"));
        }
        if der[0] != SEQUENCE_TAG {
            return Err(Error::malformed("DER signature", "invalid SEQUENCE tag"));
        }
        if der[1] as usize != der.len() - 2 {
            return Err(Error::malformed("DER signature", "SEQUENCE length mismatch"));
        }

        let (r, rest) = decode_integer(&der[2..])?;
        let (s, rest) = decode_integer(rest)?;
        if !rest.is_empty() {
            return Err(Error::malformed("DER signature", "trailing bytes"));
        }

        Ok(SignatureComponents { r, s })
    }
}

/// Strip leading zeros and add one back if the high bit is set
fn encode_integer(bytes: &[u8; 32]) -> Vec<u8> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(31);
    let trimmed = &bytes[start..];
    let mut out = Vec::with_capacity(trimmed.len() + 1);
    if trimmed[0] & 0x80 != 0 {
        out.push(0x00);
    }
    out.extend_from_slice(trimmed);
    out
}

/// Decode one INTEGER, returning it left-padded to 32 bytes and the rest
fn decode_integer(input: &[u8]) -> Result<([u8; 32], &[u8])> {
    if input.len() < 2 || input[0] != INTEGER_TAG {
        return Err(Error::malformed("DER signature", "invalid INTEGER tag"));
    }
    let len = input[1] as usize;
    if len == 0 || len > 33 || input.len() < 2 + len {
        return Err(Error::malformed("DER signature", "invalid INTEGER length"));
    }
    let body = &input[2..2 + len];
    if body[0] & 0x80 != 0 {
        return Err(Error::malformed("DER signature", "negative INTEGER"));
    }
    if len > 1 && body[0] == 0x00 && body[1] & 0x80 == 0 {
        return Err(Error::malformed("DER signature", "non-minimal INTEGER"));
    }
    let digits = if body[0] == 0x00 && len > 1 { &body[1..] } else { body };
    if digits.len() > 32 {
        return Err(Error::malformed("DER signature", "INTEGER wider than 32 bytes"));
    }

    let mut out = [0u8; 32];
    out[32 - digits.len()..].copy_from_slice(digits);
    Ok((out, &input[2 + len..]))
}
