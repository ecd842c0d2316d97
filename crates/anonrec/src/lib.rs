// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # anonrec - runtime anonymous record types
//!
//! Generates structural record types on demand, memoizes them by shape in a
//! concurrent registry and builds instances with value semantics: structural
//! equality, hash codes and `{ a = 1, b = x }` rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use anonrec::{ObjectFactory, Value};
//! use indexmap::IndexMap;
//!
//! let factory = ObjectFactory::new();
//!
//! let mut row = IndexMap::new();
//! row.insert("id".to_string(), Value::from(7u32));
//! row.insert("name".to_string(), Value::from("probe"));
//!
//! let a = factory.create_object(&row)?;
//! let b = factory.create_object(&row)?;
//! assert_eq!(a, b);
//! assert_eq!(a.hash_code(), b.hash_code());
//! assert_eq!(a.to_string(), "{ id = 7, name = probe }");
//! # Ok::<(), anonrec::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------+
//! |  ObjectFactory / Projection                                   |
//! |    name -> Value maps  ==>  Record                            |
//! +---------------------------------------------------------------+
//! |  TypeRegistry                                                 |
//! |    field names + mutability  ==>  RecordShape (generic)       |
//! |    RecordShape + ValueKinds  ==>  RecordType  (closed)        |
//! +---------------------------------------------------------------+
//! |  Value / ValueKind                                            |
//! |    per-field equality, hash and string conversion             |
//! +---------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TypeRegistry`] | Append-only, thread-safe store of generated shapes and closed types |
//! | [`RecordShape`] | Generic shape: field slots, type parameters, constructor |
//! | [`RecordType`] | Shape with a concrete [`ValueKind`] bound to every field |
//! | [`Record`] | Instance of a closed type |
//! | [`ObjectFactory`] | Builds records from name/value maps |
//! | [`Projection`] | Selects a subset of fields from wider rows |

/// Naming and hashing constants, per-registry configuration.
pub mod config;
/// Error types.
pub mod error;
/// Object creation from name/value maps.
pub mod factory;
/// Dynamic field projections.
pub mod projection;
/// Record instances.
pub mod record;
/// Closed record types and accessors.
pub mod record_type;
/// Shape memoization.
pub mod registry;
/// Generic shapes and their structural signatures.
pub mod shape;
/// Dynamically typed field values.
pub mod value;

pub use error::{Error, Result};
pub use factory::ObjectFactory;
pub use projection::Projection;
pub use record::Record;
pub use record_type::{Accessor, RecordType};
pub use registry::{LookupStats, TypeRegistry};
pub use shape::{FieldOrder, RecordShape, ShapeDigest, TypeSignature};
pub use value::{FromValue, Opaque, Value, ValueKind};
