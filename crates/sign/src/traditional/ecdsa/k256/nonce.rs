//! RFC 6979 deterministic nonce generation with HMAC-SHA256
//!
//! The generator is seeded with int2octets(d), bits2octets(h) and optional
//! additional data (RFC 6979 §3.6), then streams candidates. Rejected
//! candidates and signing retries both draw the next value from the same
//! stream.

use crate::error::{Error, Result};
use ksig_algorithms::ec::k256 as ec;
use ksig_algorithms::hash::Sha256;
use ksig_algorithms::mac::Hmac;
use ksig_common::security::SecretBuffer;

/// Bound on out-of-range candidates per requested nonce. A candidate is
/// rejected with probability below 2⁻¹²⁷.
const MAX_CANDIDATES: usize = 64;

type HmacSha256 = Hmac<Sha256>;

/// HMAC_DRBG state (K, V) of RFC 6979 §3.2
pub(crate) struct NonceGenerator {
    k: SecretBuffer<32>,
    v: SecretBuffer<32>,
    retry: bool,
}

impl NonceGenerator {
    /// Steps b–g of RFC 6979 §3.2.
    ///
    /// `h1` must already be reduced mod n.
    pub(crate) fn new(secret: &[u8; 32], h1: &[u8; 32], extra: Option<&[u8; 32]>) -> Result<Self> {
        let extra: &[u8] = match extra {
            Some(data) => data,
            None => &[],
        };

        let mut k = SecretBuffer::new([0x00; 32]);
        let mut v = SecretBuffer::new([0x01; 32]);

        k = SecretBuffer::new(HmacSha256::mac_parts(
            k.as_slice(),
            &[v.as_slice(), &[0x00], secret, h1, extra],
        )?);
        v = SecretBuffer::new(HmacSha256::mac(k.as_slice(), v.as_slice())?);
        k = SecretBuffer::new(HmacSha256::mac_parts(
            k.as_slice(),
            &[v.as_slice(), &[0x01], secret, h1, extra],
        )?);
        v = SecretBuffer::new(HmacSha256::mac(k.as_slice(), v.as_slice())?);

        Ok(NonceGenerator { k, v, retry: false })
    }

    /// Step h: the next raw 32-byte candidate T.
    pub(crate) fn next_candidate(&mut self) -> Result<SecretBuffer<32>> {
        if self.retry {
            self.k = SecretBuffer::new(HmacSha256::mac_parts(
                self.k.as_slice(),
                &[self.v.as_slice(), &[0x00]],
            )?);
            self.v = SecretBuffer::new(HmacSha256::mac(self.k.as_slice(), self.v.as_slice())?);
        }
        self.retry = true;
        self.v = SecretBuffer::new(HmacSha256::mac(self.k.as_slice(), self.v.as_slice())?);
        Ok(self.v.clone())
    }

    /// The next candidate that lies in [1, n-1]
    pub(crate) fn next_nonce(&mut self) -> Result<ec::Scalar> {
        for _ in 0..MAX_CANDIDATES {
            let candidate = self.next_candidate()?;
            match ec::Scalar::from_secret_buffer(&candidate) {
                Ok(k) => return Ok(k),
                Err(_) => {
                    ktrace!("nonce candidate outside [1, n-1], drawing another");
                }
            }
        }
        Err(Error::SignatureGeneration {
            algorithm: "ECDSA-secp256k1",
            details: "no nonce candidate in range",
        })
    }
}
