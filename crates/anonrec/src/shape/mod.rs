// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generic record shapes.
//!
//! A [`RecordShape`] is the open form of a generated record type: named
//! field slots, each typed by its own type parameter, one constructor taking
//! the slots in declaration order, and one accessor per slot. Concrete field
//! kinds are bound later by [`TypeRegistry::instantiate`](crate::TypeRegistry::instantiate).
//!
//! Shapes are produced by the registry only; callers receive them behind an
//! `Arc` and never mutate them.

mod digest;
mod generator;
mod signature;

pub use digest::ShapeDigest;
pub use signature::{FieldOrder, TypeSignature};

pub(crate) use generator::generate;

use std::collections::HashMap;
use std::fmt;

/// Type parameter bound to one field slot (`T0`, `T1`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeParam {
    /// Position in the shape's parameter list.
    pub index: usize,
    /// Generated parameter name.
    pub name: String,
}

/// One named field of a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSlot {
    /// Field name.
    pub name: String,
    /// Type parameter typing this slot.
    pub param: TypeParam,
    /// Accessor supports writes (mutable shapes only).
    pub writable: bool,
}

/// The single constructor of a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    params: Vec<String>,
}

impl Constructor {
    /// Parameter names in declaration order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Position of a parameter by name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p == name)
    }
}

/// Generated generic record shape.
pub struct RecordShape {
    name: String,
    digest: ShapeDigest,
    mutable: bool,
    fields: Vec<FieldSlot>,
    type_params: Vec<TypeParam>,
    constructor: Constructor,
    index: HashMap<String, usize>,
    // Rendering prefixes: "{ a = ", ", b = ", ...
    labels: Vec<String>,
}

impl RecordShape {
    /// Deterministic generated name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn digest(&self) -> &ShapeDigest {
        &self.digest
    }

    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    /// Field slots in declaration order.
    pub fn fields(&self) -> &[FieldSlot] {
        &self.fields
    }

    /// Get field slot by name.
    pub fn field(&self, name: &str) -> Option<&FieldSlot> {
        self.field_index(name).map(|i| &self.fields[i])
    }

    /// Get field index by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Iterate over field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of fields (and type parameters).
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    pub fn type_params(&self) -> &[TypeParam] {
        &self.type_params
    }

    pub fn constructor(&self) -> &Constructor {
        &self.constructor
    }

    pub(crate) fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl fmt::Debug for RecordShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordShape")
            .field("name", &self.name)
            .field("mutable", &self.mutable)
            .field("fields", &self.constructor.params)
            .finish()
    }
}

impl fmt::Display for RecordShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
