// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

/// Registry lookup statistics.
///
/// `misses` counts generic shapes generated; `instantiations` counts closed
/// types created.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LookupStats {
    pub hits: u64,
    pub misses: u64,
    pub instantiations: u64,
    pub last_miss_ns: u64,
}

impl LookupStats {
    /// Total shape lookups served.
    pub fn lookups(&self) -> u64 {
        self.hits.saturating_add(self.misses)
    }
}
