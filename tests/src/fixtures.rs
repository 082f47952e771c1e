//! # Test Fixtures
//!
//! Shared identities, configurations, and transaction builders for the
//! integration suite.

use rand::{RngCore, SeedableRng};
use sale_ledger::prelude::*;

/// Installs a test subscriber so `RUST_LOG`-filtered traces show up in
/// failing test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deterministic test identities, decoded from fixed hex strings so the
/// suite exercises real 20-byte payloads rather than repeated fill bytes.
pub mod identities {
    use super::*;

    fn decode(hex_str: &str) -> Address {
        let bytes = hex::decode(hex_str).expect("fixture hex");
        Address::from_slice(&bytes).expect("fixture length")
    }

    /// The contract's own identity.
    #[must_use]
    pub fn contract() -> Address {
        decode("d336d7eb9975a29b2404fdd28185e532a9a18f9e")
    }

    /// The owner account.
    #[must_use]
    pub fn owner() -> Address {
        decode("23ba2703c53263e8d6e522dc32203339dcd8eee9")
    }

    /// The KYC administrator account.
    #[must_use]
    pub fn kyc_admin() -> Address {
        decode("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c")
    }

    /// A contributing account.
    #[must_use]
    pub fn alice() -> Address {
        decode("aaaa00000000000000000000000000000000aaaa")
    }

    /// Another account.
    #[must_use]
    pub fn bob() -> Address {
        decode("bbbb00000000000000000000000000000000bbbb")
    }
}

/// Standard contract configuration over the fixture identities.
#[must_use]
pub fn test_config() -> ContractConfig {
    ContractConfig::new(
        identities::contract(),
        identities::owner(),
        identities::kyc_admin(),
    )
}

/// A transaction contributing `utility` and `fuel` units to the contract,
/// with spent-output provenance pointing at `sender`.
#[must_use]
pub fn contribution_tx(
    config: &ContractConfig,
    sender: Address,
    utility: u64,
    fuel: u64,
) -> TransactionView {
    let mut tx = TransactionView::empty();
    tx.references.push(TxOutput::new(
        config.utility_asset.id,
        utility.saturating_add(fuel).max(1),
        sender,
    ));
    if utility > 0 {
        tx.outputs
            .push(TxOutput::new(config.utility_asset.id, utility, config.contract));
    }
    if fuel > 0 {
        tx.outputs
            .push(TxOutput::new(config.fuel_asset.id, fuel, config.contract));
    }
    tx
}

/// A fresh random 20-byte account from a seeded generator.
#[must_use]
pub fn random_account(rng: &mut rand::rngs::StdRng) -> Address {
    let mut bytes = [0u8; 20];
    rng.fill_bytes(&mut bytes);
    Address::new(bytes)
}

/// Seeded generator so property runs are reproducible.
#[must_use]
pub fn seeded_rng(seed: u64) -> rand::rngs::StdRng {
    rand::rngs::StdRng::seed_from_u64(seed)
}
