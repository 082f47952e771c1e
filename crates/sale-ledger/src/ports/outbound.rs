//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the crowd-sale ledger depends on. The host environment
//! implements these; the in-memory adapters in [`crate::adapters`] implement
//! them for tests and local embedding.
//!
//! The host serializes invocations, so every port is synchronous. Atomicity
//! is the host's job: if an invocation returns a hard error, all writes made
//! through [`LedgerStore`] during that invocation are discarded.

use crate::domain::value_objects::{Address, StoreKey};
use crate::errors::StoreError;

// =============================================================================
// LEDGER STORE
// =============================================================================

/// The host's persistent key-value store, scoped to this contract.
///
/// Keys are raw bytes (see [`StoreKey`] for the layout); values are opaque
/// byte strings. An absent key is indistinguishable from never-written, and
/// reads as `None`.
pub trait LedgerStore: Send + Sync {
    /// Reads the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    fn get(&self, key: &StoreKey) -> Result<Option<Vec<u8>>, StoreError>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be written.
    fn put(&self, key: StoreKey, value: Vec<u8>) -> Result<(), StoreError>;

    /// Returns true if `key` holds a value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    fn contains(&self, key: &StoreKey) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

// =============================================================================
// WITNESS VERIFIER
// =============================================================================

/// Host-provided authorization proof verification.
///
/// `check_witness` answers whether the current transaction carries a valid
/// authorization proof for the given account. The ledger never inspects
/// signatures itself.
pub trait WitnessVerifier: Send + Sync {
    /// Returns true if the current transaction is authorized by `account`.
    fn check_witness(&self, account: &Address) -> bool;
}

// =============================================================================
// HEIGHT ORACLE
// =============================================================================

/// Host-provided block height, the time basis for the sale window.
pub trait HeightOracle: Send + Sync {
    /// Current block height. Monotonically increasing across invocations.
    fn current_height(&self) -> u64;
}

// =============================================================================
// SHARED-HANDLE IMPLEMENTATIONS
// =============================================================================

// The service owns its ports; tests keep a second handle to drive the
// adapters between invocations. Arc delegation keeps both views in sync.

impl<T: LedgerStore + ?Sized> LedgerStore for std::sync::Arc<T> {
    fn get(&self, key: &StoreKey) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, key: StoreKey, value: Vec<u8>) -> Result<(), StoreError> {
        (**self).put(key, value)
    }
}

impl<T: WitnessVerifier + ?Sized> WitnessVerifier for std::sync::Arc<T> {
    fn check_witness(&self, account: &Address) -> bool {
        (**self).check_witness(account)
    }
}

impl<T: HeightOracle + ?Sized> HeightOracle for std::sync::Arc<T> {
    fn current_height(&self) -> u64 {
        (**self).current_height()
    }
}

// =============================================================================
// TESTS
// =============================================================================
