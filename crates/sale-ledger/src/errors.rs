//! # Error Types
//!
//! Two failure styles, kept distinct:
//!
//! - **Hard failures** ([`InvocationError`]) abort the invocation entirely.
//!   The host discards every write the invocation made; the core performs
//!   no rollback of its own.
//! - **Soft failures** are not errors: the operation returns `false` and
//!   emits a diagnostic notification. Callers must check the boolean.

use thiserror::Error;

// =============================================================================
// INVOCATION ERRORS (hard failures)
// =============================================================================

/// Unrecoverable input errors that abort the whole invocation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvocationError {
    /// An address argument was not exactly 20 bytes.
    #[error("invalid address length: expected 20 bytes, got {actual}")]
    InvalidAddressLength {
        /// Length of the rejected payload.
        actual: usize,
    },

    /// An amount argument was negative.
    #[error("invalid amount: {0}")]
    NegativeAmount(i128),

    /// A method argument was missing or of the wrong kind.
    #[error("bad argument {index} for method {method}")]
    BadArgument {
        /// Method being dispatched.
        method: String,
        /// Zero-based argument position.
        index: usize,
    },

    /// The ledger store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

// =============================================================================
// STORE ERRORS
// =============================================================================

/// Errors from the host's persistent key-value store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Stored data could not be interpreted.
    #[error("store corruption detected")]
    Corrupted,

    /// The store is unreachable.
    #[error("store unavailable")]
    Unavailable,

    /// Other store error.
    #[error("store error: {0}")]
    Other(String),
}

// =============================================================================
// TESTS
// =============================================================================
