//! # Sale-Ledger - Crowd-Sale Token Ledger Core
//!
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! A token-issuance and crowd-sale ledger that executes inside a host
//! blockchain VM on every transaction that touches it. The core decides, per
//! invocation, whether an incoming transaction is an allowed contribution,
//! converts contributed value into minted tokens at fixed exchange rates,
//! enforces a time-boxed sale window measured in block height, and moves
//! balance between accounts under conservation invariants.
//!
//! The host invokes the contract in two modes for the same transaction:
//! **Verification** (pre-validation, no state mutation) and **Application**
//! (method dispatch against the ledger store). Both share one eligibility
//! predicate over the sale window and the transaction's contributions.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Balances never persisted negative | `service.rs` - transfer rejects insolvent debits |
//! | INVARIANT-2 | Conservation across transfers | `service.rs` - debit and credit in one invocation |
//! | INVARIANT-3 | Sale window well-formed at configuration | `service.rs` - `startSale` rejects `end <= start` |
//! | INVARIANT-4 | Initial supply granted at most once | `service.rs` - sentinel key guards `initialize` |
//!
//! ## Host Dependencies (outbound ports)
//!
//! | Collaborator | Trait | Purpose |
//! |--------------|-------|---------|
//! | Storage engine | `LedgerStore` | Persistent key-value state, atomic per invocation |
//! | Signature host | `WitnessVerifier` | Authorization proof per account |
//! | Consensus | `HeightOracle` | Block height, the sale window's time basis |
//!
//! ## Usage Example
//!
//! ```
//! use sale_ledger::prelude::*;
//!
//! let config = ContractConfig::new(
//!     Address::new([0xCC; 20]), // contract identity
//!     Address::new([0x01; 20]), // owner
//!     Address::new([0x02; 20]), // KYC administrator
//! );
//! let (service, _store, witness, _height) = create_test_service(config);
//! witness.grant(Address::new([0x01; 20]));
//!
//! let outcome = service
//!     .invoke(
//!         Trigger::Application,
//!         methods::INITIALIZE,
//!         &[],
//!         &TransactionView::empty(),
//!     )
//!     .unwrap();
//! assert_eq!(outcome.notifications.transfers().len(), 1);
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{
        ContractConfig, ContributionObservation, RecognizedAsset, ReturnValue, TokenMetadata,
        TransactionView, Trigger, TxOutput, Value,
    };

    // Value objects
    pub use crate::domain::value_objects::{Address, AssetId, StoreKey, U256};

    // Domain services
    pub use crate::domain::services::{
        compute_minted, decode_uint, encode_uint, observe_contribution, resolve_sender,
        sent_to_contract,
    };

    // Invariants
    pub use crate::domain::invariants::{
        check_conservation_invariant, check_solvency_invariant, check_transfer_invariants,
        check_window_invariant, InvariantCheckResult, InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::{methods, InvocationOutcome, SaleContractApi};
    pub use crate::ports::outbound::{HeightOracle, LedgerStore, WitnessVerifier};

    // Events
    pub use crate::events::{diagnostics, Notification, NotificationLog};

    // Errors
    pub use crate::errors::{InvocationError, StoreError};

    // Adapters
    pub use crate::adapters::{FixedHeightOracle, MemoryStore, StaticWitnessVerifier};

    // Service
    pub use crate::service::{create_test_service, SaleContractService, ServiceStats};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
