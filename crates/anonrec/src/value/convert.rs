// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Typed extraction from [`Value`].

use crate::error::{Error, Result};
use crate::record::Record;
use crate::value::{Opaque, Value, ValueKind};

/// Trait for converting from a stored [`Value`].
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self>;
}

fn mismatch(expected: impl ToString, got: &Value) -> Error {
    Error::ValueMismatch {
        expected: expected.to_string(),
        actual: got.kind().to_string(),
    }
}

// Implement FromValue for primitives
macro_rules! impl_from_value {
    ($ty:ty, $variant:ident) => {
        impl FromValue for $ty {
            fn from_value(value: &Value) -> Result<Self> {
                match value {
                    Value::$variant(v) => Ok(*v),
                    other => Err(mismatch(ValueKind::$variant, other)),
                }
            }
        }
    };
}

impl_from_value!(bool, Bool);
impl_from_value!(i8, I8);
impl_from_value!(i16, I16);
impl_from_value!(i32, I32);
impl_from_value!(i64, I64);
impl_from_value!(u8, U8);
impl_from_value!(u16, U16);
impl_from_value!(u32, U32);
impl_from_value!(u64, U64);
impl_from_value!(f32, F32);
impl_from_value!(f64, F64);
impl_from_value!(char, Char);

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(mismatch(ValueKind::String, other)),
        }
    }
}

impl FromValue for Vec<Value> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Sequence(items) => Ok(items.clone()),
            other => Err(mismatch(ValueKind::Sequence, other)),
        }
    }
}

impl FromValue for Record {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Record(r) => Ok(r.clone()),
            other => Err(mismatch("record", other)),
        }
    }
}

impl FromValue for Opaque {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Opaque(o) => Ok(o.clone()),
            other => Err(mismatch(ValueKind::Opaque, other)),
        }
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

/// `Null` maps to `None`; anything else must convert to `T`.
impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_extraction() {
        assert_eq!(i32::from_value(&Value::I32(5)), Ok(5));
        assert_eq!(bool::from_value(&Value::Bool(true)), Ok(true));
        assert_eq!(
            String::from_value(&Value::from("x")),
            Ok(String::from("x"))
        );
    }

    #[test]
    fn test_mismatch_reports_kinds() {
        let err = i32::from_value(&Value::from("x")).unwrap_err();
        assert_eq!(
            err,
            Error::ValueMismatch {
                expected: "i32".into(),
                actual: "string".into(),
            }
        );
    }

    #[test]
    fn test_option_extraction() {
        assert_eq!(Option::<i32>::from_value(&Value::Null), Ok(None));
        assert_eq!(Option::<i32>::from_value(&Value::I32(3)), Ok(Some(3)));
        assert!(Option::<i32>::from_value(&Value::Bool(false)).is_err());
    }
}
