//! 256-bit arithmetic on 8 little-endian u32 limbs
//!
//! Shared by the base field and the scalar field. Everything here runs in
//! time independent of the limb values: loops have fixed bounds and
//! selections go through `subtle`.

use ksig_internal::constant_time::{ct_is_zero_words, ct_select_words, mask32};
use subtle::Choice;

pub(crate) const NLIMBS: usize = 8;

pub(crate) type Limbs = [u32; NLIMBS];

/// a + b, returning the sum and the carry out (0 or 1)
#[inline(always)]
pub(crate) fn adc(a: &Limbs, b: &Limbs) -> (Limbs, u32) {
    let mut r = [0u32; NLIMBS];
    let mut carry = 0u64;
    for i in 0..NLIMBS {
        let t = (a[i] as u64) + (b[i] as u64) + carry;
        r[i] = t as u32;
        carry = t >> 32;
    }
    (r, carry as u32)
}

/// a - b, returning the difference and the borrow out (1 iff a < b)
#[inline(always)]
pub(crate) fn sbb(a: &Limbs, b: &Limbs) -> (Limbs, u32) {
    let mut r = [0u32; NLIMBS];
    let mut borrow = 0u64;
    for i in 0..NLIMBS {
        let t = (a[i] as u64)
            .wrapping_sub(b[i] as u64)
            .wrapping_sub(borrow);
        r[i] = t as u32;
        borrow = t >> 63;
    }
    (r, borrow as u32)
}

#[inline(always)]
pub(crate) fn select(a: &Limbs, b: &Limbs, choice: Choice) -> Limbs {
    ct_select_words(a, b, choice)
}

#[inline(always)]
pub(crate) fn is_zero(a: &Limbs) -> Choice {
    ct_is_zero_words(a)
}

/// Choice set when a < b
#[inline(always)]
pub(crate) fn lt(a: &Limbs, b: &Limbs) -> Choice {
    let (_, borrow) = sbb(a, b);
    Choice::from(borrow as u8)
}

/// (a + b) mod m for a, b < m
#[inline(always)]
pub(crate) fn add_mod(a: &Limbs, b: &Limbs, m: &Limbs) -> Limbs {
    let (sum, carry) = adc(a, b);
    let (reduced, borrow) = sbb(&sum, m);
    // Keep the reduced value when the sum overflowed or did not borrow
    let use_reduced = carry | (borrow ^ 1);
    select(&sum, &reduced, Choice::from(use_reduced as u8))
}

/// (a - b) mod m for a, b < m
#[inline(always)]
pub(crate) fn sub_mod(a: &Limbs, b: &Limbs, m: &Limbs) -> Limbs {
    let (diff, borrow) = sbb(a, b);
    // Add m back only when the subtraction borrowed
    let mask = mask32(borrow);
    let mut addend = [0u32; NLIMBS];
    for i in 0..NLIMBS {
        addend[i] = m[i] & mask;
    }
    adc(&diff, &addend).0
}

/// Subtract m once when a >= m
#[inline(always)]
pub(crate) fn sub_if_ge(a: &Limbs, m: &Limbs) -> Limbs {
    let (reduced, borrow) = sbb(a, m);
    select(a, &reduced, Choice::from((borrow ^ 1) as u8))
}

/// Full 8x8 schoolbook product
pub(crate) fn mul_wide(a: &Limbs, b: &Limbs) -> [u32; 2 * NLIMBS] {
    let mut out = [0u32; 2 * NLIMBS];
    for i in 0..NLIMBS {
        let mut carry = 0u64;
        for j in 0..NLIMBS {
            let t = (a[i] as u64) * (b[j] as u64) + (out[i + j] as u64) + carry;
            out[i + j] = t as u32;
            carry = t >> 32;
        }
        out[i + NLIMBS] = carry as u32;
    }
    out
}

/// acc += a * b
///
/// The caller guarantees `a.len() + b.len() - 1 <= acc.len()` and that the
/// true sum fits in `acc`.
pub(crate) fn mul_acc(acc: &mut [u32], a: &[u32], b: &[u32]) {
    for (i, &ai) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &bj) in b.iter().enumerate() {
            let t = (ai as u64) * (bj as u64) + (acc[i + j] as u64) + carry;
            acc[i + j] = t as u32;
            carry = t >> 32;
        }
        for slot in acc[i + b.len()..].iter_mut() {
            let t = (*slot as u64) + carry;
            *slot = t as u32;
            carry = t >> 32;
        }
    }
}

/// low 256 bits of `wide` plus the remaining high limbs times `c`
fn fold<const W: usize, const O: usize>(wide: &[u32; W], c: &[u32]) -> [u32; O] {
    let mut out = [0u32; O];
    out[..NLIMBS].copy_from_slice(&wide[..NLIMBS]);
    mul_acc(&mut out, &wide[NLIMBS..], c);
    out
}

/// Reduce a 512-bit product modulo m, where `c = 2^256 - m` and c < 2^130.
///
/// Four folds with 2^256 = c (mod m) bring the value below 2^256. Bounds
/// for the scalar field (the wider case):
/// r1 < 2^386, r2 < 2^260, r3 < 2^256 + 2^133, r4 < 2^256.
/// The last step is one conditional subtraction since 2^256 < 2m.
pub(crate) fn reduce_wide(wide: &[u32; 2 * NLIMBS], c: &[u32], m: &Limbs) -> Limbs {
    let r1: [u32; 13] = fold(wide, c);
    let r2: [u32; 9] = fold(&r1, c);
    let r3: [u32; 9] = fold(&r2, c);
    let r4: [u32; 9] = fold(&r3, c);
    debug_assert_eq!(r4[NLIMBS], 0);

    let mut low = [0u32; NLIMBS];
    low.copy_from_slice(&r4[..NLIMBS]);
    sub_if_ge(&low, m)
}
