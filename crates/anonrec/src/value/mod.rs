// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic field values.
//!
//! Generated record types are only known at run time, so every field slot
//! holds a [`Value`]: a tagged union over the supported field kinds. Each
//! value carries its own default equality, hash and string conversion, which
//! the structural operations of [`Record`](crate::Record) combine field by
//! field.

mod convert;
mod hash;
mod kind;
mod opaque;

pub use convert::FromValue;
pub use kind::ValueKind;
pub use opaque::Opaque;

pub(crate) use hash::{combine, Fnv1a};

use crate::record::Record;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A dynamically typed field value.
#[derive(Debug, Clone)]
pub enum Value {
    // Absent value; typed as `ValueKind::Any`
    Null,

    // Primitives
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Char(char),
    String(String),

    // Composites
    Sequence(Vec<Value>),
    Record(Record),

    // Identity-compared handle to an arbitrary Rust value
    Opaque(Opaque),
}

impl Value {
    /// Check if value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Runtime kind of this value. `Null` is typed as the top kind.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Any,
            Self::Bool(_) => ValueKind::Bool,
            Self::I8(_) => ValueKind::I8,
            Self::I16(_) => ValueKind::I16,
            Self::I32(_) => ValueKind::I32,
            Self::I64(_) => ValueKind::I64,
            Self::U8(_) => ValueKind::U8,
            Self::U16(_) => ValueKind::U16,
            Self::U32(_) => ValueKind::U32,
            Self::U64(_) => ValueKind::U64,
            Self::F32(_) => ValueKind::F32,
            Self::F64(_) => ValueKind::F64,
            Self::Char(_) => ValueKind::Char,
            Self::String(_) => ValueKind::String,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Record(r) => ValueKind::Record(r.record_type().clone()),
            Self::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::I32(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::U64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as a nested record.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Try to get as an opaque handle.
    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Self::Opaque(o) => Some(o),
            _ => None,
        }
    }

    /// Deterministic hash code, stable across runs for everything but
    /// opaque handles (hashed by address).
    ///
    /// Values that compare equal always produce the same code; `Null` is 0.
    /// Scalars hash a tag byte plus their payload; floats are normalized so
    /// that `-0.0`/`0.0` and all NaNs hash alike.
    pub fn hash_code(&self) -> i32 {
        match self {
            Self::Null => 0,
            Self::Bool(v) => scalar_hash(1, &[u8::from(*v)]),
            Self::I8(v) => scalar_hash(2, &v.to_le_bytes()),
            Self::I16(v) => scalar_hash(3, &v.to_le_bytes()),
            Self::I32(v) => scalar_hash(4, &v.to_le_bytes()),
            Self::I64(v) => scalar_hash(5, &v.to_le_bytes()),
            Self::U8(v) => scalar_hash(6, &[*v]),
            Self::U16(v) => scalar_hash(7, &v.to_le_bytes()),
            Self::U32(v) => scalar_hash(8, &v.to_le_bytes()),
            Self::U64(v) => scalar_hash(9, &v.to_le_bytes()),
            Self::F32(v) => scalar_hash(10, &normalized_f64_bits(f64::from(*v)).to_le_bytes()),
            Self::F64(v) => scalar_hash(11, &normalized_f64_bits(*v).to_le_bytes()),
            Self::Char(v) => scalar_hash(12, &u32::from(*v).to_le_bytes()),
            Self::String(v) => scalar_hash(13, v.as_bytes()),
            Self::Sequence(items) => combine(items.iter().map(Value::hash_code)),
            Self::Record(r) => r.hash_code(),
            Self::Opaque(o) => scalar_hash(16, &(o.address() as u64).to_le_bytes()),
        }
    }
}

fn scalar_hash(tag: u8, payload: &[u8]) -> i32 {
    let mut hasher = Fnv1a::new();
    hasher.write_u8(tag);
    hasher.write(payload);
    hasher.finish_i32()
}

fn float_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

fn normalized_f64_bits(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

impl PartialEq for Value {
    // @audit-ok: Simple pattern matching - per-variant equality dispatch
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::I8(a), Self::I8(b)) => a == b,
            (Self::I16(a), Self::I16(b)) => a == b,
            (Self::I32(a), Self::I32(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::U8(a), Self::U8(b)) => a == b,
            (Self::U16(a), Self::U16(b)) => a == b,
            (Self::U32(a), Self::U32(b)) => a == b,
            (Self::U64(a), Self::U64(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => float_eq(f64::from(*a), f64::from(*b)),
            (Self::F64(a), Self::F64(b)) => float_eq(*a, *b),
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Sequence(a), Self::Sequence(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

// NaN == NaN under `float_eq`, so equality is reflexive for every variant.
impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(v) => write!(f, "{}", v),
            Self::I8(v) => write!(f, "{}", v),
            Self::I16(v) => write!(f, "{}", v),
            Self::I32(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::U8(v) => write!(f, "{}", v),
            Self::U16(v) => write!(f, "{}", v),
            Self::U32(v) => write!(f, "{}", v),
            Self::U64(v) => write!(f, "{}", v),
            // `-0.0 == 0.0`, so both render as `0`
            Self::F32(v) => write!(f, "{}", if *v == 0.0 { 0.0 } else { *v }),
            Self::F64(v) => write!(f, "{}", if *v == 0.0 { 0.0 } else { *v }),
            Self::Char(v) => write!(f, "{}", v),
            Self::String(v) => f.write_str(v),
            Self::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Self::Record(r) => write!(f, "{}", r),
            Self::Opaque(o) => f.write_str(o.type_name()),
        }
    }
}

// Conversion traits
macro_rules! impl_from_primitive {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Self::$variant(v)
            }
        }
    };
}

impl_from_primitive!(bool, Bool);
impl_from_primitive!(i8, I8);
impl_from_primitive!(i16, I16);
impl_from_primitive!(i32, I32);
impl_from_primitive!(i64, I64);
impl_from_primitive!(u8, U8);
impl_from_primitive!(u16, U16);
impl_from_primitive!(u32, U32);
impl_from_primitive!(u64, U64);
impl_from_primitive!(f32, F32);
impl_from_primitive!(f64, F64);
impl_from_primitive!(char, Char);
impl_from_primitive!(String, String);
impl_from_primitive!(Record, Record);
impl_from_primitive!(Opaque, Opaque);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_values() {
        let v = Value::from(42i32);
        assert_eq!(v.as_i32(), Some(42));
        assert_eq!(v.as_i64(), None);
        assert_eq!(v.kind(), ValueKind::I32);

        let v = Value::from(std::f64::consts::PI);
        assert_eq!(v.as_f64(), Some(std::f64::consts::PI));

        let v = Value::from("hello");
        assert_eq!(v.as_str(), Some("hello"));
        assert_eq!(v.kind(), ValueKind::String);
    }

    #[test]
    fn test_null_is_typed_as_any() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Null.kind(), ValueKind::Any);
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::Null.hash_code(), 0);
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn test_same_payload_different_kind_not_equal() {
        assert_ne!(Value::I32(1), Value::I64(1));
        assert_ne!(Value::U8(0), Value::Bool(false));
    }

    #[test]
    fn test_float_equality_and_hash() {
        let nan_a = Value::F64(f64::NAN);
        let nan_b = Value::F64(-f64::NAN);
        assert_eq!(nan_a, nan_b);
        assert_eq!(nan_a.hash_code(), nan_b.hash_code());

        let zero = Value::F64(0.0);
        let neg_zero = Value::F64(-0.0);
        assert_eq!(zero, neg_zero);
        assert_eq!(zero.hash_code(), neg_zero.hash_code());

        assert_ne!(Value::F32(1.5), Value::F32(2.5));
    }

    #[test]
    fn test_signed_zero_renders_alike() {
        assert_eq!(Value::F64(-0.0).to_string(), Value::F64(0.0).to_string());
        assert_eq!(Value::F32(-0.0).to_string(), "0");
        assert_eq!(Value::F32(1.1).to_string(), "1.1");
        assert_eq!(Value::F64(-2.5).to_string(), "-2.5");
    }

    #[test]
    fn test_equal_values_hash_and_render_alike() {
        let handle = Opaque::new(7u8);
        let pairs = [
            (Value::F64(f64::NAN), Value::F64(-f64::NAN)),
            (Value::F64(0.0), Value::F64(-0.0)),
            (Value::F32(f32::NAN), Value::F32(-f32::NAN)),
            (Value::F32(0.0), Value::F32(-0.0)),
            (Value::Opaque(handle.clone()), Value::Opaque(handle)),
            (
                Value::from(vec![Value::F64(0.0), Value::Null]),
                Value::from(vec![Value::F64(-0.0), Value::Null]),
            ),
        ];
        for (a, b) in &pairs {
            assert_eq!(a, b);
            assert_eq!(a.hash_code(), b.hash_code(), "{:?} vs {:?}", a, b);
            assert_eq!(a.to_string(), b.to_string(), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_hash_code_is_deterministic() {
        let a = Value::from("test");
        let b = Value::from(String::from("test"));
        assert_eq!(a.hash_code(), b.hash_code());
        assert_ne!(a.hash_code(), Value::from("test2").hash_code());
    }

    #[test]
    fn test_sequence_value() {
        let v = Value::from(vec![1u32, 2, 3, 4, 5]);
        let seq = v.as_sequence().expect("sequence");
        assert_eq!(seq.len(), 5);
        assert_eq!(seq[2], Value::U32(3));
        assert_eq!(v.to_string(), "[1, 2, 3, 4, 5]");
        assert_eq!(v, Value::from(vec![1u32, 2, 3, 4, 5]));
        assert_eq!(
            v.hash_code(),
            Value::from(vec![1u32, 2, 3, 4, 5]).hash_code()
        );
    }

    #[test]
    fn test_opaque_identity() {
        let a = Opaque::new(String::from("payload"));
        let same = Value::Opaque(a.clone());
        let other = Value::Opaque(Opaque::new(String::from("payload")));

        assert_eq!(Value::Opaque(a), same);
        assert_ne!(same, other);
        assert_eq!(same.to_string(), "alloc::string::String");
    }
}
