//! secp256k1 scalar arithmetic modulo the group order n

use core::fmt;

use crate::ec::k256::constants::{
    CURVE_ORDER, HALF_ORDER, K256_SCALAR_SIZE, ORDER_FOLD, ORDER_N_MINUS_2,
};
use crate::ec::k256::limbs::{self, Limbs, NLIMBS};
use crate::error::{Error, Result};
use ksig_common::security::SecretBuffer;
use ksig_internal::endian::{be_bytes_to_limbs, limbs_to_be_bytes};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Integer modulo n, stored as 8 little-endian limbs in [0, n).
///
/// Zero is representable for intermediate values. Constructors used for
/// secrets reject it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar(pub(crate) Limbs);

impl Scalar {
    /// Strict secret-scalar constructor: the big-endian value must lie in
    /// [1, n−1].
    pub fn new(mut data: [u8; K256_SCALAR_SIZE]) -> Result<Self> {
        let scalar = Self::from_bytes(&data);
        data.zeroize();
        let scalar = scalar?;
        if bool::from(scalar.is_zero()) {
            return Err(Error::param("K256 Scalar", "Scalar cannot be zero"));
        }
        Ok(scalar)
    }

    /// Strict constructor from a `SecretBuffer`, same rules as [`Scalar::new`]
    pub fn from_secret_buffer(buffer: &SecretBuffer<K256_SCALAR_SIZE>) -> Result<Self> {
        Self::new(*buffer.as_array())
    }

    /// Canonical decoding: values ≥ n are rejected, zero is allowed.
    pub fn from_bytes(bytes: &[u8; K256_SCALAR_SIZE]) -> Result<Self> {
        let mut limbs = be_bytes_to_limbs(bytes);
        let in_range = limbs::lt(&limbs, &CURVE_ORDER);
        if !bool::from(in_range) {
            limbs.zeroize();
            return Err(Error::param("K256 Scalar", "Value ≥ group order"));
        }
        Ok(Scalar(limbs))
    }

    /// Decode and reduce once modulo n. Any 256-bit input is accepted
    /// since 2²⁵⁶ < 2n.
    pub fn from_bytes_reduced(bytes: &[u8; K256_SCALAR_SIZE]) -> Self {
        let limbs = be_bytes_to_limbs(bytes);
        Scalar(limbs::sub_if_ge(&limbs, &CURVE_ORDER))
    }

    /// The zero scalar
    pub const fn zero() -> Self {
        Scalar([0u32; NLIMBS])
    }

    /// The scalar 1
    pub const fn one() -> Self {
        Self::from_u32(1)
    }

    /// Small constant scalar
    pub const fn from_u32(v: u32) -> Self {
        Scalar([v, 0, 0, 0, 0, 0, 0, 0])
    }

    /// Big-endian encoding
    pub fn serialize(&self) -> [u8; K256_SCALAR_SIZE] {
        limbs_to_be_bytes(&self.0)
    }

    /// Little-endian 32-bit limbs
    pub fn as_limbs(&self) -> &[u32; NLIMBS] {
        &self.0
    }

    /// Set when the scalar is zero
    pub fn is_zero(&self) -> Choice {
        limbs::is_zero(&self.0)
    }

    /// Set when self > ⌊n/2⌋
    pub fn is_high(&self) -> Choice {
        limbs::lt(&HALF_ORDER, &self.0)
    }

    /// (self + other) mod n
    pub fn add_mod_n(&self, other: &Self) -> Self {
        Scalar(limbs::add_mod(&self.0, &other.0, &CURVE_ORDER))
    }

    /// (self − other) mod n
    pub fn sub_mod_n(&self, other: &Self) -> Self {
        Scalar(limbs::sub_mod(&self.0, &other.0, &CURVE_ORDER))
    }

    /// Schoolbook product folded with 2²⁵⁶ ≡ 2²⁵⁶ − n (mod n)
    pub fn mul_mod_n(&self, other: &Self) -> Self {
        let mut wide = limbs::mul_wide(&self.0, &other.0);
        let reduced = limbs::reduce_wide(&wide, &ORDER_FOLD, &CURVE_ORDER);
        wide.zeroize();
        Scalar(reduced)
    }

    /// −self mod n; zero maps to zero
    pub fn negate(&self) -> Self {
        Scalar::zero().sub_mod_n(self)
    }

    /// Replace self with −self when `choice` is set
    pub fn conditional_negate(&mut self, choice: Choice) {
        let negated = self.negate();
        self.0 = limbs::select(&self.0, &negated.0, choice);
    }

    /// Multiplicative inverse via Fermat: a^(n−2) mod n
    pub fn inv_mod_n(&self) -> Result<Self> {
        if bool::from(self.is_zero()) {
            return Err(Error::InvalidOperand {
                operation: "K256 scalar inversion",
            });
        }

        let mut result = Scalar::one();
        for &byte in ORDER_N_MINUS_2.iter() {
            for bit in (0..8).rev() {
                result = result.mul_mod_n(&result);
                if (byte >> bit) & 1 == 1 {
                    result = result.mul_mod_n(self);
                }
            }
        }
        Ok(result)
    }

    /// 4-bit window `i`, counting from the least-significant nibble
    #[inline(always)]
    pub(crate) fn nibble(&self, i: usize) -> u32 {
        (self.0[i / 8] >> ((i % 8) * 4)) & 0xF
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar([REDACTED])")
    }
}
