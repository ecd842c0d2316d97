// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry configuration - single source of truth for naming and hashing constants.
//!
//! # Architecture
//!
//! - **Level 1 (Static)**: compile-time constants used by the type generator
//!   (name markers, field delimiter, structural hash constants).
//! - **Level 2 (Dynamic)**: [`RegistryConfig`], chosen once per registry
//!   (generated-name namespace, default field order for object creation).
//!
//! Nothing here is read from the environment; two registries built with the
//! same `RegistryConfig` generate identical names for identical signatures.
//!
//! # Example
//!
//! ```rust
//! use anonrec::config::RegistryConfig;
//! use anonrec::FieldOrder;
//!
//! let config = RegistryConfig::new()
//!     .with_name_prefix("<>reports__")
//!     .with_default_order(FieldOrder::Insignificant);
//! assert_eq!(config.name_prefix(), "<>reports__");
//! ```

use crate::shape::FieldOrder;

// =======================================================================
// Generated names
// =======================================================================

/// Namespace embedded at the front of every generated shape name.
pub const DEFAULT_NAME_PREFIX: &str = "<>anon__";

/// Marker inserted into the names of read-write shapes.
pub const MUTABLE_MARKER: &str = "Mutable";

/// Marker preceding the signature digest in a generated name.
pub const RECORD_MARKER: &str = "Record";

/// Separates the digest from the field count (`...Record<HEX>`2`).
pub const ARITY_SEPARATOR: char = '`';

/// Prefix of generated type parameter names (`T0`, `T1`, ...).
pub const TYPE_PARAM_PREFIX: char = 'T';

// =======================================================================
// Signature encoding
// =======================================================================

/// Delimiter between field names in the digested signature text.
///
/// Literal occurrences inside a field name are doubled before joining.
pub const FIELD_DELIMITER: char = ',';

/// Follows every delimiter in the signature text. A delimiter is always
/// the last comma of a run, so doubled commas inside names stay unambiguous
/// even at the edges of a name.
pub const DELIMITER_PAD: char = ' ';

// =======================================================================
// Structural hash
// =======================================================================

/// Initial accumulator of a record's structural hash.
pub const HASH_SEED: i32 = -842_606_958;

/// Multiplier applied to the accumulator before each field's hash is added.
pub const HASH_MULTIPLIER: i32 = -1_521_134_295;

/// FNV-1a 64-bit offset basis used for per-value hashes.
pub const FNV1A_OFFSET_BASIS_64: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime used for per-value hashes.
pub const FNV1A_PRIME_64: u64 = 0x0100_0000_01b3;

// =======================================================================
// Runtime configuration
// =======================================================================

/// Per-registry options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    name_prefix: String,
    default_order: FieldOrder,
}

impl RegistryConfig {
    /// Default configuration: [`DEFAULT_NAME_PREFIX`], insertion-ordered fields.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            default_order: FieldOrder::Significant,
        }
    }

    /// Replace the generated-name namespace.
    #[must_use]
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Field order used by `ObjectFactory` when the caller does not pick one.
    #[must_use]
    pub fn with_default_order(mut self, order: FieldOrder) -> Self {
        self.default_order = order;
        self
    }

    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }

    pub fn default_order(&self) -> FieldOrder {
        self.default_order
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();
        assert_eq!(config.name_prefix(), DEFAULT_NAME_PREFIX);
        assert_eq!(config.default_order(), FieldOrder::Significant);
    }

    #[test]
    fn test_builder_overrides() {
        let config = RegistryConfig::new()
            .with_name_prefix("ns::")
            .with_default_order(FieldOrder::Insignificant);
        assert_eq!(config.name_prefix(), "ns::");
        assert_eq!(config.default_order(), FieldOrder::Insignificant);
    }
}
