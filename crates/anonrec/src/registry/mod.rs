// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Concurrent, append-only registry of generated record types.
//!
//! The registry guarantees that a generic shape is generated at most once
//! per `(field names, mutability)` signature and that a closed type is
//! created at most once per `(shape, kinds)` pair. Lookups of known shapes
//! take the read lock only; the create path rechecks under the write lock,
//! so concurrent first requests for one signature all observe the single
//! installed shape. Entries are never evicted.

mod stats;

pub use stats::LookupStats;

use crate::config::RegistryConfig;
use crate::error::{Error, Result};
use crate::record_type::RecordType;
use crate::shape::{generate, FieldOrder, RecordShape, TypeSignature};
use crate::value::ValueKind;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

static GLOBAL_REGISTRY: OnceLock<Arc<TypeRegistry>> = OnceLock::new();

/// Identifies a closed type within one registry.
#[derive(Clone, PartialEq, Eq, Hash)]
struct ClosedKey {
    shape: String,
    kinds: Vec<ValueKind>,
}

/// Memoizing store of generic shapes and their closed instantiations.
pub struct TypeRegistry {
    config: RegistryConfig,
    shapes: RwLock<HashMap<String, Arc<RecordShape>>>,
    closed: DashMap<ClosedKey, Arc<RecordType>>,
    stats: RwLock<LookupStats>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            shapes: RwLock::new(HashMap::new()),
            closed: DashMap::new(),
            stats: RwLock::new(LookupStats::default()),
        }
    }

    /// Process-wide registry (created on first use, never torn down).
    pub fn global() -> Arc<TypeRegistry> {
        GLOBAL_REGISTRY
            .get_or_init(|| Arc::new(TypeRegistry::new()))
            .clone()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Resolve the shape for `names` (in the given order), generating it on
    /// first request.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `names` is empty or repeats a name.
    pub fn resolve_or_create<S: AsRef<str>>(
        &self,
        names: &[S],
        mutable: bool,
    ) -> Result<Arc<RecordShape>> {
        self.resolve_or_create_with(names, mutable, FieldOrder::Significant)
    }

    /// Same as [`resolve_or_create`](Self::resolve_or_create) with an explicit
    /// order policy. Under [`FieldOrder::Insignificant`] the names are sorted,
    /// so every permutation resolves to one shape with sorted fields.
    pub fn resolve_or_create_with<S: AsRef<str>>(
        &self,
        names: &[S],
        mutable: bool,
        order: FieldOrder,
    ) -> Result<Arc<RecordShape>> {
        let signature = TypeSignature::new(names, mutable, order)?;
        let name = signature.generated_name(self.config.name_prefix());

        if let Some(hit) = self.try_peek(&name) {
            self.record_hit();
            return Ok(hit);
        }

        let mut shapes = self.shapes.write();
        if let Some(hit) = shapes.get(&name) {
            self.record_hit();
            return Ok(Arc::clone(hit));
        }

        let start = Instant::now();
        let shape = Arc::new(generate(&signature, name.clone()));
        shapes.insert(name, Arc::clone(&shape));
        drop(shapes);

        self.record_miss(start);
        log::debug!(
            "[TypeRegistry] Generated {} (fields={}, mutable={})",
            shape.name(),
            shape.arity(),
            mutable
        );
        Ok(shape)
    }

    /// Bind one kind per type parameter of `shape`.
    ///
    /// Memoized: identical `(shape, kinds)` return the same `Arc`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the number of kinds differs from the shape's
    /// arity or the shape was not generated by this registry.
    pub fn instantiate(
        &self,
        shape: &Arc<RecordShape>,
        kinds: Vec<ValueKind>,
    ) -> Result<Arc<RecordType>> {
        if kinds.len() != shape.arity() {
            return Err(Error::InvalidArgument(format!(
                "{} has {} type parameters, got {} kinds",
                shape.name(),
                shape.arity(),
                kinds.len()
            )));
        }
        if !self.owns(shape) {
            return Err(Error::InvalidArgument(format!(
                "{} is not registered in this registry",
                shape.name()
            )));
        }

        let key = ClosedKey {
            shape: shape.name().to_string(),
            kinds,
        };
        if let Some(hit) = self.closed.get(&key).map(|r| Arc::clone(r.value())) {
            return Ok(hit);
        }

        // The entry holds the shard lock, so only one caller builds the type
        let kinds = key.kinds.clone();
        let entry = self.closed.entry(key).or_insert_with(|| {
            let ty = Arc::new(RecordType::new(Arc::clone(shape), kinds));
            self.stats.write().instantiations += 1;
            log::trace!("[TypeRegistry] Instantiated {}", ty.name());
            ty
        });
        Ok(Arc::clone(entry.value()))
    }

    /// Resolve the shape for the pair names and bind the pair kinds.
    ///
    /// Under [`FieldOrder::Insignificant`] the pairs are sorted by name
    /// first so each kind stays with its field.
    pub fn create_type<S: AsRef<str>>(
        &self,
        pairs: &[(S, ValueKind)],
        mutable: bool,
        order: FieldOrder,
    ) -> Result<Arc<RecordType>> {
        let mut pairs: Vec<(&str, &ValueKind)> =
            pairs.iter().map(|(n, k)| (n.as_ref(), k)).collect();
        if order == FieldOrder::Insignificant {
            pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        }

        let names: Vec<&str> = pairs.iter().map(|(n, _)| *n).collect();
        let shape = self.resolve_or_create_with(&names, mutable, FieldOrder::Significant)?;
        let kinds = pairs.into_iter().map(|(_, k)| k.clone()).collect();
        self.instantiate(&shape, kinds)
    }

    /// Look up an already generated shape by name.
    pub fn get(&self, name: &str) -> Option<Arc<RecordShape>> {
        self.try_peek(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.shapes.read().contains_key(name)
    }

    /// Number of generic shapes generated so far.
    pub fn shape_count(&self) -> usize {
        self.shapes.read().len()
    }

    /// Number of closed types created so far.
    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }

    #[must_use]
    pub fn stats(&self) -> LookupStats {
        *self.stats.read()
    }

    fn owns(&self, shape: &Arc<RecordShape>) -> bool {
        self.shapes
            .read()
            .get(shape.name())
            .is_some_and(|own| Arc::ptr_eq(own, shape))
    }

    fn try_peek(&self, name: &str) -> Option<Arc<RecordShape>> {
        self.shapes.read().get(name).map(Arc::clone)
    }

    fn record_hit(&self) {
        let mut stats = self.stats.write();
        stats.hits = stats.hits.saturating_add(1);
    }

    fn record_miss(&self, start: Instant) {
        let mut stats = self.stats.write();
        stats.misses = stats.misses.saturating_add(1);
        stats.last_miss_ns = start.elapsed().as_nanos() as u64;
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("name_prefix", &self.config.name_prefix())
            .field("shapes", &self.shape_count())
            .field("closed", &self.closed_count())
            .finish()
    }
}
