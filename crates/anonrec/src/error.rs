// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error taxonomy for type resolution, object construction and field access.

use thiserror::Error;

/// Errors returned by the registry, factory and record accessors.
///
/// Every variant is reported synchronously to the immediate caller. Nothing
/// is retried, logged or installed in the registry when an operation fails.
///
/// # Example
///
/// ```rust
/// use anonrec::{Error, TypeRegistry};
///
/// let registry = TypeRegistry::new();
/// let empty: [&str; 0] = [];
/// match registry.resolve_or_create(&empty, false) {
///     Err(Error::InvalidArgument(msg)) => println!("rejected: {}", msg),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Empty field list or value map, duplicate field name, wrong arity.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A field required by the record type is absent from the value map.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// The record type declares no field with this name.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Write attempted through an accessor of an immutable record type.
    #[error("Field is read-only: {0}")]
    ReadOnlyField(String),

    /// A value is not assignable to the kind bound to its field.
    #[error("Field `{field}` expects {expected}, got {actual}")]
    FieldTypeMismatch {
        /// Field name
        field: String,
        /// Kind bound to the field
        expected: String,
        /// Kind of the rejected value
        actual: String,
    },

    /// Typed extraction of a value failed.
    #[error("Value mismatch: expected {expected}, got {actual}")]
    ValueMismatch {
        /// Requested kind
        expected: String,
        /// Kind actually stored
        actual: String,
    },
}

/// Convenient alias for API results using the crate `Error` type.
pub type Result<T> = std::result::Result<T, Error>;
