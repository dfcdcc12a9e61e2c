//! Hash function implementations
//!
//! Only SHA-256 is provided. It drives the deterministic nonce generator
//! and the message-level signing API.

use crate::error::Result;

pub mod sha2;

pub use sha2::Sha256;

/// Trait for cryptographic hash functions
pub trait HashFunction: Sized {
    /// Fixed-size digest produced by this function
    type Output: AsRef<[u8]> + Clone;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Absorb more input
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Finish the computation and return the digest
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Output size in bytes
    fn output_size() -> usize;

    /// Internal block size in bytes
    fn block_size() -> usize;

    /// Hash `data` in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Returns the name of the hash function
    fn name() -> &'static str;
}
