//! # In-Memory Ledger Store
//!
//! `LedgerStore` implementation backed by a `HashMap`, for tests and local
//! embedding. A production host would back this port with its own storage
//! engine and per-invocation transaction scope.

use crate::domain::value_objects::StoreKey;
use crate::errors::StoreError;
use crate::ports::outbound::LedgerStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Returns true if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Snapshot of all entries, for test assertions.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<Vec<u8>, Vec<u8>> {
        self.entries.read().unwrap().clone()
    }
}

impl LedgerStore for MemoryStore {
    fn get(&self, key: &StoreKey) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.read().unwrap().get(key.as_bytes()).cloned())
    }

    fn put(&self, key: StoreKey, value: Vec<u8>) -> Result<(), StoreError> {
        self.entries.write().unwrap().insert(key.0, value);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
