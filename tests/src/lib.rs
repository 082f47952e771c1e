//! # Sale-Ledger Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Shared identities, transactions, and setup
//! └── integration/      # End-to-end invocation choreography
//!     ├── flows.rs      # Sale lifecycle: initialize, startSale, mint, refund
//!     └── conservation.rs # Ledger properties over randomized transfer runs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p sale-tests
//!
//! # By category
//! cargo test -p sale-tests integration::flows::
//! cargo test -p sale-tests integration::conservation::
//! ```

pub mod fixtures;
pub mod integration;
