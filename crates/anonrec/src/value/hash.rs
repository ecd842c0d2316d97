// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Deterministic hashing helpers for values and records.

use crate::config::{FNV1A_OFFSET_BASIS_64, FNV1A_PRIME_64, HASH_MULTIPLIER, HASH_SEED};

/// FNV-1a 64-bit accumulator (no per-process random state).
pub(crate) struct Fnv1a(u64);

impl Fnv1a {
    pub(crate) fn new() -> Self {
        Self(FNV1A_OFFSET_BASIS_64)
    }

    pub(crate) fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 ^= u64::from(byte);
            self.0 = self.0.wrapping_mul(FNV1A_PRIME_64);
        }
    }

    pub(crate) fn write_u8(&mut self, byte: u8) {
        self.write(&[byte]);
    }

    /// Fold the 64-bit state into 32 bits.
    pub(crate) fn finish_i32(&self) -> i32 {
        ((self.0 >> 32) ^ self.0) as u32 as i32
    }
}

/// Combine per-field hash codes in declaration order:
/// `acc = acc * HASH_MULTIPLIER + field` starting from `HASH_SEED`.
pub(crate) fn combine<I>(codes: I) -> i32
where
    I: IntoIterator<Item = i32>,
{
    codes.into_iter().fold(HASH_SEED, |acc, code| {
        HASH_MULTIPLIER.wrapping_mul(acc).wrapping_add(code)
    })
}
