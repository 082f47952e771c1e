//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for the crowd-sale ledger.
//!
//! - **Driving Port (Inbound)**: `SaleContractApi` - what the host VM invokes
//! - **Driven Ports (Outbound)**: `LedgerStore`, `WitnessVerifier`,
//!   `HeightOracle` - what the host supplies
//!
//! No concrete implementations in this module.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
