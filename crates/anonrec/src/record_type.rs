// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Closed record types.
//!
//! A [`RecordType`] is a generic [`RecordShape`] with one [`ValueKind`] bound
//! to each type parameter. The registry memoizes closed types, so two handles
//! for the same shape and kinds are the same `Arc`; record equality relies on
//! that identity.

use crate::error::{Error, Result};
use crate::record::Record;
use crate::shape::{Constructor, RecordShape};
use crate::value::{Value, ValueKind};
use std::fmt;
use std::sync::Arc;

/// Field accessor of a closed type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    /// Field name.
    pub name: String,
    /// Field position (constructor parameter index).
    pub index: usize,
    /// Kind bound to the field.
    pub kind: ValueKind,
    /// Write support.
    pub writable: bool,
}

impl Accessor {
    /// Reads are always supported.
    pub fn can_read(&self) -> bool {
        true
    }

    pub fn can_write(&self) -> bool {
        self.writable
    }

    /// Check that `value` fits this field.
    pub(crate) fn check(&self, value: &Value) -> Result<()> {
        if self.kind.accepts(value) {
            Ok(())
        } else {
            Err(Error::FieldTypeMismatch {
                field: self.name.clone(),
                expected: self.kind.to_string(),
                actual: value.kind().to_string(),
            })
        }
    }
}

/// A generic shape with every type parameter bound.
pub struct RecordType {
    shape: Arc<RecordShape>,
    name: String,
    accessors: Vec<Accessor>,
}

impl RecordType {
    /// Bind `kinds` to the parameters of `shape`. Arity is checked by the
    /// registry before this is called.
    pub(crate) fn new(shape: Arc<RecordShape>, kinds: Vec<ValueKind>) -> Self {
        let name = format!(
            "{}<{}>",
            shape.name(),
            kinds
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
        let accessors = shape
            .fields()
            .iter()
            .zip(kinds)
            .map(|(slot, kind)| Accessor {
                name: slot.name.clone(),
                index: slot.param.index,
                kind,
                writable: slot.writable,
            })
            .collect();

        Self {
            shape,
            name,
            accessors,
        }
    }

    /// Closed type name: `{shape}<{kind}, ...>`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generic shape this type closes.
    pub fn shape(&self) -> &Arc<RecordShape> {
        &self.shape
    }

    /// Kinds bound to the fields, in declaration order.
    pub fn field_kinds(&self) -> impl Iterator<Item = &ValueKind> {
        self.accessors.iter().map(|a| &a.kind)
    }

    pub fn arity(&self) -> usize {
        self.accessors.len()
    }

    pub fn is_mutable(&self) -> bool {
        self.shape.is_mutable()
    }

    pub fn accessors(&self) -> &[Accessor] {
        &self.accessors
    }

    /// Get accessor by field name.
    pub fn accessor(&self, name: &str) -> Option<&Accessor> {
        self.shape
            .field_index(name)
            .map(|index| &self.accessors[index])
    }

    pub fn constructor(&self) -> &Constructor {
        self.shape.constructor()
    }

    /// Invoke the constructor with arguments in parameter order.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on wrong argument count, `FieldTypeMismatch` when an
    /// argument does not fit its field's kind.
    pub fn construct(self: &Arc<Self>, args: Vec<Value>) -> Result<Record> {
        if args.len() != self.arity() {
            return Err(Error::InvalidArgument(format!(
                "{} expects {} constructor arguments, got {}",
                self.name,
                self.arity(),
                args.len()
            )));
        }
        for (accessor, value) in self.accessors.iter().zip(&args) {
            accessor.check(value)?;
        }
        Ok(Record::from_parts(Arc::clone(self), args))
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordType")
            .field("name", &self.name)
            .field("mutable", &self.is_mutable())
            .finish()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
