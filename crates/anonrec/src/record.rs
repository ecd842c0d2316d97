// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Instances of generated record types.
//!
//! A [`Record`] stores one [`Value`] per field in constructor-parameter
//! order. Equality, hashing and rendering are structural over those values
//! but scoped to the closed type: records of two different closed types are
//! never equal, even when their field names and kinds coincide.
//!
//! # Example
//!
//! ```rust
//! use anonrec::{ObjectFactory, Value};
//! use indexmap::IndexMap;
//!
//! let factory = ObjectFactory::new();
//! let mut values = IndexMap::new();
//! values.insert("a".to_string(), Value::from(1));
//! values.insert("b".to_string(), Value::from("x"));
//!
//! let record = factory.create_object(&values)?;
//! assert_eq!(record.to_string(), "{ a = 1, b = x }");
//! assert_eq!(record.get_as::<i32>("a")?, 1);
//! # Ok::<(), anonrec::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::record_type::{Accessor, RecordType};
use crate::value::{combine, FromValue, Value};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A value of a closed generated type.
#[derive(Clone)]
pub struct Record {
    ty: Arc<RecordType>,
    values: Vec<Value>,
}

impl Record {
    /// Values were checked against `ty` by the caller.
    pub(crate) fn from_parts(ty: Arc<RecordType>, values: Vec<Value>) -> Self {
        Self { ty, values }
    }

    /// Closed type of this record.
    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.ty
    }

    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    /// Read a field by name.
    pub fn get(&self, name: &str) -> Result<&Value> {
        let accessor = self.accessor(name)?;
        Ok(&self.values[accessor.index])
    }

    /// Read a field by name and convert it.
    pub fn get_as<T: FromValue>(&self, name: &str) -> Result<T> {
        T::from_value(self.get(name)?)
    }

    /// Read a field by position.
    pub fn field(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// `(name, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.ty
            .accessors()
            .iter()
            .map(|a| a.name.as_str())
            .zip(&self.values)
    }

    /// Values in declaration order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Write a field through its accessor.
    ///
    /// # Errors
    ///
    /// - `UnknownField` if the type declares no such field
    /// - `ReadOnlyField` if the type was generated immutable
    /// - `FieldTypeMismatch` if the value does not fit the field's kind
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let accessor = self.accessor(name)?;
        if !accessor.can_write() {
            return Err(Error::ReadOnlyField(name.to_string()));
        }
        let value = value.into();
        accessor.check(&value)?;
        let index = accessor.index;
        self.values[index] = value;
        Ok(())
    }

    /// Structural hash: per-field hash codes folded in declaration order.
    pub fn hash_code(&self) -> i32 {
        combine(self.values.iter().map(Value::hash_code))
    }

    /// Equality against an arbitrary, possibly absent, object.
    ///
    /// Accepts a `Record` or a `Value::Record` wrapping one. `None` and any
    /// other object are unequal; no panic.
    pub fn equals_any(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|o| {
                o.downcast_ref::<Record>()
                    .or_else(|| o.downcast_ref::<Value>().and_then(Value::as_record))
            })
            .is_some_and(|r| self == r)
    }

    fn accessor(&self, name: &str) -> Result<&Accessor> {
        self.ty
            .accessor(name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ty, &other.ty) && self.values == other.values
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.ty.shape().labels().iter().zip(&self.values) {
            f.write_str(label)?;
            write!(f, "{}", value)?;
        }
        f.write_str(" }")
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in self.fields() {
            map.entry(&name, value);
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeRegistry;
    use crate::value::ValueKind;

    fn pair_type(registry: &TypeRegistry, mutable: bool) -> Arc<RecordType> {
        let shape = registry
            .resolve_or_create(&["a", "b"], mutable)
            .expect("shape");
        registry
            .instantiate(&shape, vec![ValueKind::I32, ValueKind::String])
            .expect("closed type")
    }

    fn pair(ty: &Arc<RecordType>, a: i32, b: &str) -> Record {
        ty.construct(vec![Value::from(a), Value::from(b)])
            .expect("construct")
    }

    #[test]
    fn test_display() {
        let registry = TypeRegistry::new();
        let ty = pair_type(&registry, false);
        assert_eq!(pair(&ty, 1, "x").to_string(), "{ a = 1, b = x }");

        let with_null = ty
            .construct(vec![Value::from(1), Value::Null])
            .expect("construct");
        assert_eq!(with_null.to_string(), "{ a = 1, b =  }");
    }

    #[test]
    fn test_structural_equality_and_hash() {
        let registry = TypeRegistry::new();
        let ty = pair_type(&registry, false);
        let a = pair(&ty, 1, "x");
        let b = pair(&ty, 1, "x");
        let c = pair(&ty, 2, "x");

        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(a.hash_code(), b.hash_code());
        assert_ne!(a, c);
    }

    #[test]
    fn test_different_types_never_equal() {
        let ours = TypeRegistry::new();
        let theirs = TypeRegistry::new();
        let a = pair(&pair_type(&ours, false), 1, "x");
        let b = pair(&pair_type(&theirs, false), 1, "x");

        // Same generated names, independently resolved types
        assert_eq!(a.type_name(), b.type_name());
        assert_ne!(a, b);

        let rw = pair(&pair_type(&ours, true), 1, "x");
        assert_ne!(a, rw);
    }

    #[test]
    fn test_equals_any() {
        let registry = TypeRegistry::new();
        let ty = pair_type(&registry, false);
        let a = pair(&ty, 1, "x");
        let b = pair(&ty, 1, "x");

        assert!(a.equals_any(Some(&b)));
        assert!(!a.equals_any(None));
        assert!(!a.equals_any(Some(&"{ a = 1, b = x }")));
        assert!(!a.equals_any(Some(&(1, "x"))));
    }

    #[test]
    fn test_equals_any_unwraps_record_values() {
        let registry = TypeRegistry::new();
        let ty = pair_type(&registry, false);
        let a = pair(&ty, 1, "x");

        assert!(a.equals_any(Some(&Value::from(pair(&ty, 1, "x")))));
        assert!(!a.equals_any(Some(&Value::from(pair(&ty, 2, "x")))));
        assert!(!a.equals_any(Some(&Value::from(1))));
        assert!(!a.equals_any(Some(&Value::Null)));
    }

    #[test]
    fn test_signed_zero_fields_render_alike() {
        let registry = TypeRegistry::new();
        let shape = registry.resolve_or_create(&["v"], false).expect("shape");
        let ty = registry
            .instantiate(&shape, vec![ValueKind::F64])
            .expect("closed type");
        let pos = ty.construct(vec![Value::F64(0.0)]).expect("construct");
        let neg = ty.construct(vec![Value::F64(-0.0)]).expect("construct");

        assert_eq!(pos, neg);
        assert_eq!(pos.hash_code(), neg.hash_code());
        assert_eq!(pos.to_string(), neg.to_string());
        assert_eq!(neg.to_string(), "{ v = 0 }");
    }

    #[test]
    fn test_set_requires_mutable_type() {
        let registry = TypeRegistry::new();
        let mut ro = pair(&pair_type(&registry, false), 1, "x");
        assert_eq!(
            ro.set("a", 5),
            Err(Error::ReadOnlyField("a".to_string()))
        );
        assert_eq!(ro.get_as::<i32>("a"), Ok(1));

        let mut rw = pair(&pair_type(&registry, true), 1, "x");
        rw.set("a", 5).expect("writable");
        assert_eq!(rw.get_as::<i32>("a"), Ok(5));
        assert!(matches!(
            rw.set("a", "five"),
            Err(Error::FieldTypeMismatch { .. })
        ));
        assert_eq!(rw.set("zz", 1), Err(Error::UnknownField("zz".to_string())));
    }

    #[test]
    fn test_accessors() {
        let registry = TypeRegistry::new();
        let record = pair(&pair_type(&registry, false), 7, "y");

        assert_eq!(record.len(), 2);
        assert_eq!(record.field(1), Some(&Value::from("y")));
        assert!(record.field(2).is_none());
        assert!(matches!(record.get("c"), Err(Error::UnknownField(_))));
        assert!(record.get_as::<String>("a").is_err());

        let names: Vec<&str> = record.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(record.clone().into_values(), record.values().to_vec());
    }

    #[test]
    fn test_nested_record_field() {
        let registry = TypeRegistry::new();
        let inner_ty = pair_type(&registry, false);
        let inner = pair(&inner_ty, 1, "x");

        let outer_shape = registry.resolve_or_create(&["inner"], false).expect("shape");
        let outer_ty = registry
            .instantiate(&outer_shape, vec![ValueKind::Record(Arc::clone(&inner_ty))])
            .expect("closed type");
        let outer = outer_ty
            .construct(vec![Value::from(inner.clone())])
            .expect("construct");

        assert_eq!(outer.to_string(), "{ inner = { a = 1, b = x } }");
        assert_eq!(outer.get_as::<Record>("inner"), Ok(inner));
    }
}
