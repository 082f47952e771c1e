//! # Integration Tests
//!
//! End-to-end invocation choreography against the public `SaleContractApi`,
//! driving the in-memory adapters exactly as a host VM would: one
//! verification-mode and one application-mode invocation per transaction.

pub mod conservation;
