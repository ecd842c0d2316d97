// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime field kinds bound to the type parameters of a generic shape.

use crate::record_type::RecordType;
use crate::value::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Concrete kind of a field in a closed record type.
///
/// `Record` kinds compare by type identity (the `Arc` pointer), never by
/// structure, so two independently resolved types stay distinct.
#[derive(Clone)]
pub enum ValueKind {
    /// Top kind: accepts every value, including `Null`.
    Any,
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Char,
    String,
    Sequence,
    Record(Arc<RecordType>),
    Opaque,
}

impl ValueKind {
    /// Kinds that admit `Value::Null`.
    pub fn is_nullable(&self) -> bool {
        matches!(
            self,
            Self::Any | Self::String | Self::Sequence | Self::Record(_) | Self::Opaque
        )
    }

    /// Check whether `value` may be stored in a field of this kind.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Any, _) => true,
            (kind, Value::Null) => kind.is_nullable(),
            (Self::Record(ty), Value::Record(r)) => Arc::ptr_eq(ty, r.record_type()),
            (kind, value) => *kind == value.kind(),
        }
    }

    fn tag(&self) -> u8 {
        match self {
            Self::Any => 0,
            Self::Bool => 1,
            Self::I8 => 2,
            Self::I16 => 3,
            Self::I32 => 4,
            Self::I64 => 5,
            Self::U8 => 6,
            Self::U16 => 7,
            Self::U32 => 8,
            Self::U64 => 9,
            Self::F32 => 10,
            Self::F64 => 11,
            Self::Char => 12,
            Self::String => 13,
            Self::Sequence => 14,
            Self::Record(_) => 15,
            Self::Opaque => 16,
        }
    }
}

impl PartialEq for ValueKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Record(a), Self::Record(b)) => Arc::ptr_eq(a, b),
            (a, b) => a.tag() == b.tag(),
        }
    }
}

impl Eq for ValueKind {}

impl Hash for ValueKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag().hash(state);
        if let Self::Record(ty) = self {
            std::ptr::hash(Arc::as_ptr(ty), state);
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Any => "any",
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Record(ty) => return f.write_str(ty.name()),
            Self::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

impl fmt::Debug for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(ty) => write!(f, "Record({})", ty.name()),
            other => write!(f, "{}", other),
        }
    }
}
