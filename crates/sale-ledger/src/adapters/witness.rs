//! # Static Witness Verifier
//!
//! `WitnessVerifier` implementation holding an explicit set of accounts
//! whose authorization proof is considered valid for the current
//! transaction. Tests grant and revoke witnesses between invocations to
//! model who signed what.

use crate::domain::value_objects::Address;
use crate::ports::outbound::WitnessVerifier;
use std::collections::HashSet;
use std::sync::RwLock;

/// Witness verifier backed by an explicit allow-set.
#[derive(Debug, Default)]
pub struct StaticWitnessVerifier {
    valid: RwLock<HashSet<Address>>,
}

impl StaticWitnessVerifier {
    /// Creates a verifier that accepts no witnesses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a verifier accepting exactly the given accounts.
    #[must_use]
    pub fn accepting(accounts: &[Address]) -> Self {
        Self {
            valid: RwLock::new(accounts.iter().copied().collect()),
        }
    }

    /// Marks an account's witness as valid.
    pub fn grant(&self, account: Address) {
        self.valid.write().unwrap().insert(account);
    }

    /// Invalidates an account's witness.
    pub fn revoke(&self, account: &Address) {
        self.valid.write().unwrap().remove(account);
    }

    /// Clears all granted witnesses.
    pub fn clear(&self) {
        self.valid.write().unwrap().clear();
    }
}

impl WitnessVerifier for StaticWitnessVerifier {
    fn check_witness(&self, account: &Address) -> bool {
        self.valid.read().unwrap().contains(account)
    }
}

// =============================================================================
// TESTS
// =============================================================================
