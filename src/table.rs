// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

//! Table generation for `1/sqrt(x)` over `[1.0, 2.0)`.
//!
//! Entry `i` samples `x = 1 + i/256` and stores `floor(32768 / sqrt(x))`,
//! saturated to `u16::MAX`.

use std::ops::Index;

/// Number of table entries, one per 8-bit index.
pub const LUT_LEN: usize = 256;

/// Fractional bits of the Q1.15 output.
pub const FRAC_BITS: u32 = 15;

/// `2^FRAC_BITS` as a float.
pub const SCALE: f64 = (1u32 << FRAC_BITS) as f64;

/// Maps an index to its sample point in `[1.0, 2.0)`.
#[inline]
pub fn sample_point(index: u8) -> f64 {
    1.0 + f64::from(index) / LUT_LEN as f64
}

/// Truncates `y` to Q1.15 and saturates at `u16::MAX`.
///
/// Only the upper bound is clamped; callers pass `y > 0`.
#[inline]
pub fn quantize(y: f64) -> u16 {
    let q = (y * SCALE).floor() as u64;
    if q > u64::from(u16::MAX) {
        u16::MAX
    } else {
        q as u16
    }
}

/// Decodes a Q1.15 value.
#[inline]
pub fn to_real(q: u16) -> f64 {
    f64::from(q) / SCALE
}

/// Computes a single table entry.
#[inline]
pub fn entry(index: u8) -> u16 {
    quantize(1.0 / sample_point(index).sqrt())
}

/// Builds the full table.
pub fn generate() -> [u16; LUT_LEN] {
    let mut table = [0u16; LUT_LEN];
    for i in 0..=255u8 {
        table[usize::from(i)] = entry(i);
    }
    table
}

/// The generated reciprocal square root table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lut([u16; LUT_LEN]);

impl Lut {
    /// Generates the table.
    pub fn new() -> Self {
        Self(generate())
    }

    /// Looks up the entry for `index`.
    #[inline]
    pub fn get(&self, index: u8) -> u16 {
        self.0[usize::from(index)]
    }

    /// The entries in index order.
    pub fn as_slice(&self) -> &[u16] {
        &self.0
    }

    /// Iterates `(index, value)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u16)> + '_ {
        (0..=255u8).zip(self.0.iter().copied())
    }

    /// Largest absolute difference between a decoded entry and `1/sqrt(x)`.
    pub fn max_abs_error(&self) -> f64 {
        self.iter()
            .map(|(i, q)| (to_real(q) - 1.0 / sample_point(i).sqrt()).abs())
            .fold(0.0, f64::max)
    }
}

impl Default for Lut {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<u8> for Lut {
    type Output = u16;

    fn index(&self, index: u8) -> &u16 {
        &self.0[usize::from(index)]
    }
}
