//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// The length check is not constant-time; lengths are public.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Returns `a` if `condition` is false, `b` if `condition` is true.
pub fn ct_select<T>(a: T, b: T, condition: Choice) -> T
where
    T: ConditionallySelectable,
{
    T::conditional_select(&a, &b, condition)
}

/// All-ones word when `bit` is 1, zero when it is 0.
///
/// `bit` must be 0 or 1.
#[inline(always)]
pub fn mask32(bit: u32) -> u32 {
    0u32.wrapping_sub(bit & 1)
}

/// Choice that is set when every word of `words` is zero
pub fn ct_is_zero_words(words: &[u32]) -> Choice {
    let mut acc = 0u32;
    for w in words {
        acc |= *w;
    }
    acc.ct_eq(&0)
}

/// Choose between two word arrays without branching on `choice`
pub fn ct_select_words<const N: usize>(a: &[u32; N], b: &[u32; N], choice: Choice) -> [u32; N] {
    let mut out = [0u32; N];
    for i in 0..N {
        out[i] = u32::conditional_select(&a[i], &b[i], choice);
    }
    out
}
