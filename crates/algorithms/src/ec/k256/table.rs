//! Precomputed multiples of the generator
//!
//! Window i holds j·16ⁱ·G for j in 0..16, so k·G is the sum of one entry
//! per window and needs no doublings. The table is built on first use and
//! is read-only afterwards.

use once_cell::sync::Lazy;
use subtle::{ConditionallySelectable, ConstantTimeEq};

use crate::ec::k256::constants::{K256_WINDOWS, K256_WINDOW_ENTRIES};
use crate::ec::k256::point::{Point, ProjectivePoint};
use crate::ec::k256::scalar::Scalar;

type Window = [ProjectivePoint; K256_WINDOW_ENTRIES];

pub(crate) struct GeneratorTable {
    windows: [Window; K256_WINDOWS],
}

static GENERATOR_TABLE: Lazy<GeneratorTable> = Lazy::new(GeneratorTable::build);

impl GeneratorTable {
    fn build() -> Self {
        let mut windows = [[ProjectivePoint::identity(); K256_WINDOW_ENTRIES]; K256_WINDOWS];
        let mut base = Point::generator().to_projective();
        for window in windows.iter_mut() {
            window[1] = base;
            for j in 2..K256_WINDOW_ENTRIES {
                window[j] = window[j - 1].add(&base);
            }
            base = base.double().double().double().double();
        }
        GeneratorTable { windows }
    }

    /// k·G with one constant-time lookup and one addition per window
    pub(crate) fn mul(&self, scalar: &Scalar) -> ProjectivePoint {
        let mut acc = ProjectivePoint::identity();
        for (i, window) in self.windows.iter().enumerate() {
            acc = acc.add(&select_entry(window, scalar.nibble(i)));
        }
        acc
    }
}

/// Shared handle to the generator table, building it if needed
pub(crate) fn generator_table() -> &'static GeneratorTable {
    &GENERATOR_TABLE
}

/// Read `window[index]` by scanning every entry.
pub(crate) fn select_entry(window: &Window, index: u32) -> ProjectivePoint {
    let mut out = ProjectivePoint::identity();
    for (j, entry) in window.iter().enumerate() {
        out.conditional_assign(entry, (j as u32).ct_eq(&index));
    }
    out
}
