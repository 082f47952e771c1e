//! # Domain Layer (Inner Hexagon)
//!
//! Pure business logic for the crowd-sale ledger.
//! NO I/O, NO host calls, NO external dependencies.
//!
//! - `value_objects`: addresses, asset ids, store keys, `U256`.
//! - `entities`: triggers, invocation values, transaction view, configuration.
//! - `services`: contribution scanner, minting formula, storage codecs.
//! - `invariants`: balance and window invariants checkable from outside.

pub mod entities;
pub mod invariants;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use invariants::*;
pub use services::*;
pub use value_objects::*;
