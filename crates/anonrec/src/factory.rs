// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Object factory: records from name/value maps.
//!
//! The factory derives a field-kind signature from the runtime kinds of the
//! supplied values (`Null` maps to [`ValueKind::Any`]), resolves the matching
//! closed type through its [`TypeRegistry`] and invokes the constructor with
//! the values in parameter order.

use crate::error::{Error, Result};
use crate::record::Record;
use crate::record_type::RecordType;
use crate::registry::TypeRegistry;
use crate::shape::{FieldOrder, RecordShape};
use crate::value::{Value, ValueKind};
use indexmap::IndexMap;
use std::sync::Arc;

/// Builds records and record types against one registry.
#[derive(Debug, Clone)]
pub struct ObjectFactory {
    registry: Arc<TypeRegistry>,
    order: FieldOrder,
}

impl ObjectFactory {
    /// Factory over a fresh private registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(Arc::new(TypeRegistry::new()))
    }

    /// Factory over the process-wide registry.
    #[must_use]
    pub fn global() -> Self {
        Self::with_registry(TypeRegistry::global())
    }

    /// Factory over `registry`, using its configured default field order.
    #[must_use]
    pub fn with_registry(registry: Arc<TypeRegistry>) -> Self {
        let order = registry.config().default_order();
        Self { registry, order }
    }

    /// Override the field order policy.
    #[must_use]
    pub fn with_order(mut self, order: FieldOrder) -> Self {
        self.order = order;
        self
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    pub fn order(&self) -> FieldOrder {
        self.order
    }

    /// Create an immutable record holding `values`.
    ///
    /// Fields follow the map's insertion order under
    /// [`FieldOrder::Significant`], name order under
    /// [`FieldOrder::Insignificant`].
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `values` is empty.
    pub fn create_object(&self, values: &IndexMap<String, Value>) -> Result<Record> {
        if values.is_empty() {
            return Err(Error::InvalidArgument(
                "value map must not be empty".to_string(),
            ));
        }

        let pairs: Vec<(&str, ValueKind)> = values
            .iter()
            .map(|(name, value)| (name.as_str(), value.kind()))
            .collect();
        let ty = self.registry.create_type(&pairs, false, self.order)?;
        self.create_object_with_type(values, &ty)
    }

    /// Create a record of a caller-supplied type, looking up each
    /// constructor parameter by name. Keys the type does not declare are
    /// ignored.
    ///
    /// # Errors
    ///
    /// `MissingField` if a parameter has no entry in `values`;
    /// `FieldTypeMismatch` if a value does not fit its field.
    pub fn create_object_with_type(
        &self,
        values: &IndexMap<String, Value>,
        ty: &Arc<RecordType>,
    ) -> Result<Record> {
        let args = ty
            .constructor()
            .params()
            .iter()
            .map(|param| {
                values
                    .get(param)
                    .cloned()
                    .ok_or_else(|| Error::MissingField(param.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        ty.construct(args)
    }

    /// Immutable closed type for `(name, kind)` pairs.
    pub fn create_type<S: AsRef<str>>(
        &self,
        pairs: &[(S, ValueKind)],
    ) -> Result<Arc<RecordType>> {
        self.registry.create_type(pairs, false, self.order)
    }

    /// Read-write closed type for `(name, kind)` pairs.
    pub fn create_mutable_type<S: AsRef<str>>(
        &self,
        pairs: &[(S, ValueKind)],
    ) -> Result<Arc<RecordType>> {
        self.registry.create_type(pairs, true, self.order)
    }

    /// Immutable generic shape for `names`.
    pub fn create_shape<S: AsRef<str>>(&self, names: &[S]) -> Result<Arc<RecordShape>> {
        self.registry.resolve_or_create_with(names, false, self.order)
    }

    /// Read-write generic shape for `names`.
    pub fn create_mutable_shape<S: AsRef<str>>(&self, names: &[S]) -> Result<Arc<RecordShape>> {
        self.registry.resolve_or_create_with(names, true, self.order)
    }
}

impl Default for ObjectFactory {
    fn default() -> Self {
        Self::new()
    }
}
