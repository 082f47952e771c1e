//! # Adapters Layer (Outer Hexagon)
//!
//! In-memory implementations of the outbound ports, used by the test harness
//! and by hosts embedding the ledger without their own storage engine.
//!
//! A production host replaces these with adapters over its storage engine,
//! witness verifier, and consensus-delivered block height.

pub mod chain;
pub mod memory_store;
pub mod witness;

pub use chain::*;
pub use memory_store::*;
pub use witness::*;
