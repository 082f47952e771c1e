//! # Domain Services
//!
//! Pure functions over the transaction view and stored bytes: the
//! contribution scanner, the fixed-rate minting formula, and the codecs for
//! values persisted in the ledger store.
//!
//! Everything here is deterministic and side-effect free; the service layer
//! wires these against the host ports.

use crate::domain::entities::{ContractConfig, ContributionObservation, TransactionView};
use crate::domain::value_objects::{Address, AssetId, U256};

// =============================================================================
// CONTRIBUTION SCANNER
// =============================================================================

/// Sums the value of every output paying `contract` in the given asset.
///
/// Each recognized asset is scanned independently; amounts are never merged
/// across asset types. Returns zero when no output matches.
#[must_use]
pub fn sent_to_contract(tx: &TransactionView, contract: &Address, asset: &AssetId) -> u64 {
    tx.outputs
        .iter()
        .filter(|output| output.recipient == *contract && output.asset == *asset)
        .fold(0u64, |sum, output| sum.saturating_add(output.value))
}

/// Scans both recognized assets and returns the per-asset contribution.
#[must_use]
pub fn observe_contribution(tx: &TransactionView, config: &ContractConfig) -> ContributionObservation {
    ContributionObservation {
        utility: sent_to_contract(tx, &config.contract, &config.utility_asset.id),
        fuel: sent_to_contract(tx, &config.contract, &config.fuel_asset.id),
    }
}

/// Resolves the contributing account from spent-output provenance.
///
/// Returns the source of the first referenced output whose asset matches
/// either recognized asset. This is a best-effort heuristic, not an
/// authenticated claim: a transaction spending someone else's matching output
/// first will attribute the contribution to that account.
#[must_use]
pub fn resolve_sender(tx: &TransactionView, config: &ContractConfig) -> Option<Address> {
    tx.references
        .iter()
        .find(|reference| config.recognizes(&reference.asset))
        .map(|reference| reference.recipient)
}

// =============================================================================
// MINTING FORMULA
// =============================================================================

/// Converts an observed contribution into newly minted tokens.
///
/// Each asset's term is gated on its own contribution being non-zero, but
/// both terms divide the *utility* contribution by the respective rate. The
/// fuel amount never enters the sum. That is how the ported on-chain contract
/// computes it; it is almost certainly an inversion, and it is kept
/// byte-for-byte rather than corrected (see DESIGN.md).
#[must_use]
pub fn compute_minted(observation: &ContributionObservation, config: &ContractConfig) -> U256 {
    let mut new_tokens = U256::zero();

    if observation.utility > 0 {
        new_tokens += U256::from(observation.utility / config.utility_asset.swap_rate);
    }

    if observation.fuel > 0 {
        new_tokens += U256::from(observation.utility / config.fuel_asset.swap_rate);
    }

    new_tokens
}

// =============================================================================
// STORED VALUE CODECS
// =============================================================================

/// Marker value stored under presence-flag keys (KYC, initialization).
pub const PRESENCE_FLAG: &[u8] = b"\x01";

/// Encodes an integer for the ledger store as 32 big-endian bytes.
#[must_use]
pub fn encode_uint(value: U256) -> Vec<u8> {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    bytes.to_vec()
}

/// Decodes a stored integer. An absent or empty slot reads as zero.
#[must_use]
pub fn decode_uint(raw: Option<&[u8]>) -> U256 {
    match raw {
        Some(bytes) if !bytes.is_empty() && bytes.len() <= 32 => U256::from_big_endian(bytes),
        _ => U256::zero(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
