// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structural keys for generic record shapes.

use super::digest::ShapeDigest;
use crate::config::{
    ARITY_SEPARATOR, DELIMITER_PAD, FIELD_DELIMITER, MUTABLE_MARKER, RECORD_MARKER,
};
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Whether two orderings of the same field names denote the same shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldOrder {
    /// Names are kept in the order supplied; `[a, b]` and `[b, a]` differ.
    #[default]
    Significant,
    /// Names are sorted ordinally before hashing and generation.
    Insignificant,
}

/// Canonical field-name list plus mutability flag.
///
/// Built transiently for a lookup; the registry keeps only the generated
/// name derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSignature {
    names: Vec<String>,
    mutable: bool,
}

impl TypeSignature {
    /// Validate and canonicalize a field-name list.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `names` is empty or contains a duplicate.
    pub fn new<S: AsRef<str>>(names: &[S], mutable: bool, order: FieldOrder) -> Result<Self> {
        if names.is_empty() {
            return Err(Error::InvalidArgument(
                "field name list must not be empty".to_string(),
            ));
        }

        let mut names: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        if order == FieldOrder::Insignificant {
            names.sort_unstable();
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(Error::InvalidArgument(format!(
                    "duplicate field name `{}`",
                    name
                )));
            }
        }

        Ok(Self { names, mutable })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Text fed to the digest: each name with its delimiters doubled,
    /// joined by delimiter + pad (`a,,b, c` for `["a,b", "c"]`).
    pub fn delimited(&self) -> String {
        let escaped = FIELD_DELIMITER.to_string().repeat(2);
        let mut joined = String::new();
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                joined.push(FIELD_DELIMITER);
                joined.push(DELIMITER_PAD);
            }
            joined.push_str(&name.replace(FIELD_DELIMITER, &escaped));
        }
        joined
    }

    pub fn digest(&self) -> ShapeDigest {
        ShapeDigest::compute(self.delimited().as_bytes())
    }

    /// Deterministic shape name, e.g. `<>anon__MutableRecord9F86...`2`.
    pub fn generated_name(&self, prefix: &str) -> String {
        format!(
            "{}{}{}{}{}{}",
            prefix,
            if self.mutable { MUTABLE_MARKER } else { "" },
            RECORD_MARKER,
            self.digest(),
            ARITY_SEPARATOR,
            self.names.len()
        )
    }
}
