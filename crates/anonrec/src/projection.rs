// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic projections: select a subset of named fields from wider rows.

use crate::error::{Error, Result};
use crate::record::Record;
use crate::record_type::RecordType;
use crate::registry::TypeRegistry;
use crate::shape::FieldOrder;
use crate::value::{Value, ValueKind};
use indexmap::IndexMap;
use std::sync::Arc;

/// A resolved selection over a source schema.
///
/// The projected type keeps the selected fields in source declaration
/// order, whatever order the selection lists them in.
#[derive(Debug, Clone)]
pub struct Projection {
    ty: Arc<RecordType>,
}

impl Projection {
    /// Resolve the projected type for `selected` within `schema`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty selection, `UnknownField` for a name
    /// the schema does not declare.
    pub fn new<S, N>(
        registry: &TypeRegistry,
        schema: &[(S, ValueKind)],
        selected: &[N],
    ) -> Result<Self>
    where
        S: AsRef<str>,
        N: AsRef<str>,
    {
        if selected.is_empty() {
            return Err(Error::InvalidArgument(
                "projection selects no fields".to_string(),
            ));
        }
        if let Some(unknown) = selected
            .iter()
            .map(|name| name.as_ref())
            .find(|name: &&str| !schema.iter().any(|(field, _)| field.as_ref() == *name))
        {
            return Err(Error::UnknownField(unknown.to_string()));
        }

        let pairs: Vec<(&str, ValueKind)> = schema
            .iter()
            .filter(|(field, _)| selected.iter().any(|n| n.as_ref() == field.as_ref()))
            .map(|(field, kind)| (field.as_ref(), kind.clone()))
            .collect();
        let ty = registry.create_type(&pairs, false, FieldOrder::Significant)?;
        log::debug!("[Projection] {} fields -> {}", schema.len(), ty.name());
        Ok(Self { ty })
    }

    /// Closed type of projected rows.
    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.ty
    }

    /// Selected field names in projected order.
    pub fn fields(&self) -> &[String] {
        self.ty.constructor().params()
    }

    /// Project a name/value row.
    ///
    /// # Errors
    ///
    /// `MissingField` if the row lacks a selected field.
    pub fn project_map(&self, row: &IndexMap<String, Value>) -> Result<Record> {
        let args = self
            .fields()
            .iter()
            .map(|name| {
                row.get(name)
                    .cloned()
                    .ok_or_else(|| Error::MissingField(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        self.ty.construct(args)
    }

    /// Project a record of a wider type.
    pub fn project_record(&self, row: &Record) -> Result<Record> {
        let args = self
            .fields()
            .iter()
            .map(|name| row.get(name).cloned())
            .collect::<Result<Vec<_>>>()?;
        self.ty.construct(args)
    }

    /// Project every row, stopping at the first failure.
    pub fn project_all<'a, I>(&self, rows: I) -> Result<Vec<Record>>
    where
        I: IntoIterator<Item = &'a IndexMap<String, Value>>,
    {
        rows.into_iter().map(|row| self.project_map(row)).collect()
    }
}
