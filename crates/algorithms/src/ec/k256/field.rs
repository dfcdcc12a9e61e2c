//! secp256k1 base field arithmetic

use crate::ec::k256::constants::{
    FIELD_FOLD, FIELD_MODULUS, FIELD_P_MINUS_2, FIELD_SQRT_EXP, K256_FIELD_ELEMENT_SIZE,
};
use crate::ec::k256::limbs::{self, Limbs, NLIMBS};
use crate::error::{Error, Result};
use ksig_internal::endian::{be_bytes_to_limbs, limbs_to_be_bytes};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Element of 𝔽ₚ with p = 2²⁵⁶ − 2³² − 977.
///
/// Stored as 8 little-endian 32-bit limbs and always fully reduced.
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(pub(crate) Limbs);

impl FieldElement {
    /// Build a field element from a small literal
    #[inline]
    pub const fn from_u32(v: u32) -> Self {
        FieldElement([v, 0, 0, 0, 0, 0, 0, 0])
    }

    /// The additive identity
    #[inline]
    pub const fn zero() -> Self {
        FieldElement([0u32; NLIMBS])
    }

    /// The multiplicative identity
    #[inline]
    pub const fn one() -> Self {
        Self::from_u32(1)
    }

    /// Decode big-endian bytes. Values ≥ p are rejected.
    pub fn from_bytes(bytes: &[u8; K256_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let limbs = be_bytes_to_limbs(bytes);
        if !bool::from(limbs::lt(&limbs, &FIELD_MODULUS)) {
            return Err(Error::param("FieldElement K256", "Value ≥ modulus"));
        }
        Ok(FieldElement(limbs))
    }

    /// Encode as 32 big-endian bytes
    pub fn to_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        limbs_to_be_bytes(&self.0)
    }

    /// Set when the element is zero
    pub fn is_zero(&self) -> Choice {
        limbs::is_zero(&self.0)
    }

    /// Least-significant bit of the canonical value
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.0[0] & 1) as u8)
    }

    /// (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        FieldElement(limbs::add_mod(&self.0, &other.0, &FIELD_MODULUS))
    }

    /// (self − other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        FieldElement(limbs::sub_mod(&self.0, &other.0, &FIELD_MODULUS))
    }

    /// 2·self mod p
    #[inline(always)]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// −self mod p; zero maps to zero
    pub fn negate(&self) -> Self {
        FieldElement::zero().sub(self)
    }

    /// Schoolbook 8×8 product folded with 2²⁵⁶ ≡ 2³² + 977 (mod p)
    pub fn mul(&self, other: &Self) -> Self {
        let wide = limbs::mul_wide(&self.0, &other.0);
        FieldElement(limbs::reduce_wide(&wide, &FIELD_FOLD, &FIELD_MODULUS))
    }

    /// self² mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiply by a small constant
    #[inline]
    pub fn mul_small(&self, k: u32) -> Self {
        self.mul(&FieldElement::from_u32(k))
    }

    /// Multiplicative inverse via Fermat: a^(p−2) mod p
    pub fn invert(&self) -> Result<Self> {
        if bool::from(self.is_zero()) {
            return Err(Error::InvalidOperand {
                operation: "K256 field inversion",
            });
        }
        Ok(self.pow_p_minus_2())
    }

    /// a^(p−2), which is zero for a = 0. Used where a zero input is a
    /// valid encoding of the identity.
    pub(crate) fn pow_p_minus_2(&self) -> Self {
        self.pow_public(&FIELD_P_MINUS_2)
    }

    /// Square root via a^((p+1)/4), since p ≡ 3 (mod 4).
    ///
    /// Returns `None` when `self` is not a quadratic residue.
    pub fn sqrt(&self) -> Option<Self> {
        let root = self.pow_public(&FIELD_SQRT_EXP);
        if bool::from(root.square().ct_eq(self)) {
            Some(root)
        } else {
            None
        }
    }

    /// Left-to-right square-and-multiply. Branches only on bits of the
    /// exponent, which is always a public constant.
    fn pow_public(&self, exp: &[u8; 32]) -> Self {
        let mut result = FieldElement::one();
        for &byte in exp.iter() {
            for bit in (0..8).rev() {
                result = result.square();
                if (byte >> bit) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement(limbs::select(&a.0, &b.0, choice))
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::zero()
    }
}
