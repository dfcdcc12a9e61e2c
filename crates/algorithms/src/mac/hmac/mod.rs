//! HMAC (RFC 2104 / FIPS 198-1), allocation-free
//!
//! Key-dependent work happens on fixed stack buffers sized to the largest
//! supported block.

use crate::error::{validate, Error, Result};
use crate::hash::HashFunction;
use ksig_common::security::{SecretBuffer, SecureZeroingType};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

const MAX_BLOCK: usize = 64;

/// HMAC over any [`HashFunction`] with a block of at most 64 bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Hmac<H: HashFunction + Clone + Zeroize> {
    hash: H,
    opad: SecretBuffer<MAX_BLOCK>,
    block_size: usize,
    is_finalized: bool,
}

impl<H> Hmac<H>
where
    H: HashFunction + Clone + Zeroize,
{
    const IPAD_BYTE: u8 = 0x36;
    const OPAD_BYTE: u8 = 0x5c;

    /// Create a new HMAC instance keyed with `key`.
    pub fn new(key: &[u8]) -> Result<Self> {
        let bs = H::block_size();
        validate::max_length("HMAC block size", bs, MAX_BLOCK)?;

        // Hash the key unconditionally so the running time depends only
        // on the public key length.
        let hashed = H::digest(key)?;

        let mut k_prime = SecretBuffer::<MAX_BLOCK>::zeroed();
        let mask = ((key.len() > bs) as u8).wrapping_neg();
        for (i, slot) in k_prime.as_mut_slice()[..bs].iter_mut().enumerate() {
            let k = key.get(i).copied().unwrap_or(0);
            let hk = hashed.as_ref().get(i).copied().unwrap_or(0);
            *slot = (hk & mask) | (k & !mask);
        }

        let mut ipad = SecretBuffer::<MAX_BLOCK>::zeroed();
        let mut opad = SecretBuffer::<MAX_BLOCK>::zeroed();
        for i in 0..bs {
            ipad.as_mut_slice()[i] = k_prime.as_slice()[i] ^ Self::IPAD_BYTE;
            opad.as_mut_slice()[i] = k_prime.as_slice()[i] ^ Self::OPAD_BYTE;
        }

        let mut hash = H::new();
        hash.update(&ipad.as_slice()[..bs])?;

        Ok(Self {
            hash,
            opad,
            block_size: bs,
            is_finalized: false,
        })
    }

    /// Feed additional `data` into the MAC.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.is_finalized {
            return Err(Error::param("hmac_state", "Cannot update after finalization"));
        }
        self.hash.update(data).map(|_| ())
    }

    /// Finalise and return the tag.
    pub fn finalize(&mut self) -> Result<H::Output> {
        if self.is_finalized {
            return Err(Error::param("hmac_state", "HMAC already finalized"));
        }
        self.is_finalized = true;

        let inner = self.hash.finalize()?;

        let mut outer = H::new();
        outer.update(&self.opad.as_slice()[..self.block_size])?;
        outer.update(inner.as_ref())?;
        outer.finalize()
    }

    /// One-shot MAC over the concatenation of `parts`.
    pub fn mac_parts(key: &[u8], parts: &[&[u8]]) -> Result<H::Output> {
        let mut h = Self::new(key)?;
        for part in parts {
            h.update(part)?;
        }
        h.finalize()
    }

    /// One-shot MAC helper.
    pub fn mac(key: &[u8], data: &[u8]) -> Result<H::Output> {
        Self::mac_parts(key, &[data])
    }

    /// Constant-time verification of `tag` against `key` / `data`.
    pub fn verify(key: &[u8], data: &[u8], tag: &[u8]) -> Result<()> {
        let expected = Self::mac(key, data)?;
        let expected = expected.as_ref();

        // Iterate over the public digest length regardless of tag length.
        let mut diff = 0u8;
        for (i, e) in expected.iter().enumerate() {
            diff |= e ^ tag.get(i).copied().unwrap_or(0);
        }
        diff |= ((tag.len() != expected.len()) as u8).wrapping_neg();

        validate::authentication(bool::from(diff.ct_eq(&0u8)), "HMAC")
    }
}

impl<H> SecureZeroingType for Hmac<H>
where
    H: HashFunction + Clone + Zeroize,
{
    fn zeroed() -> Self {
        Self {
            hash: H::new(),
            opad: SecretBuffer::zeroed(),
            block_size: 0,
            is_finalized: false,
        }
    }

    fn secure_clone(&self) -> Self {
        Self {
            hash: self.hash.clone(),
            opad: self.opad.secure_clone(),
            block_size: self.block_size,
            is_finalized: self.is_finalized,
        }
    }
}
