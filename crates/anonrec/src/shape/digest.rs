// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Content digest of a field-name signature.

use sha2::{Digest, Sha256};
use std::fmt;

/// ShapeDigest - 32-byte SHA-256 of the delimited field-name signature
///
/// Embedded as uppercase hex in every generated shape name, so the name is
/// stable across processes and runs.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeDigest([u8; 32]);

impl ShapeDigest {
    /// Create from raw 32-byte array
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw 32-byte array
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hash arbitrary signature text.
    pub fn compute(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }
}

impl fmt::Debug for ShapeDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShapeDigest({})", self)
    }
}

impl fmt::Display for ShapeDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for ShapeDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
