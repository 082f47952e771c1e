//! # Core Domain Entities
//!
//! Main business entities for the crowd-sale ledger: the invocation model
//! (trigger, arguments, return values), the host transaction view that the
//! contribution scanner inspects, and the contract configuration.

use crate::domain::value_objects::{Address, AssetId, U256};
use serde::{Deserialize, Serialize};

// =============================================================================
// TRIGGER MODE
// =============================================================================

/// Host-declared intent for an invocation.
///
/// The host invokes the contract twice per transaction: once in
/// `Verification` mode ("should this transaction be allowed to proceed") and
/// once in `Application` mode ("execute the named method"). Both invocations
/// evaluate the same eligibility predicate over the sale window and the
/// transaction's contributions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    /// Pre-validation: decide admissibility without mutating state.
    Verification,
    /// Execution: dispatch the named method against the ledger store.
    Application,
    /// Any trigger mode this contract does not recognize.
    Unknown,
}

// =============================================================================
// INVOCATION ARGUMENTS & RETURN VALUES
// =============================================================================

/// A single argument in the host's variable-length invocation argument list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// Raw bytes (addresses arrive as 20-byte payloads).
    Bytes(Vec<u8>),
    /// Signed integer. Negative values are representable so that the
    /// transfer engine can reject them as a hard input error.
    Int(i128),
}

impl Value {
    /// Returns the byte payload, if this value is `Bytes`.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            Self::Int(_) => None,
        }
    }

    /// Returns the integer payload, if this value is `Int`.
    #[must_use]
    pub fn as_int(&self) -> Option<i128> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Bytes(_) => None,
        }
    }
}

/// Typed return value of a dispatched method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnValue {
    /// Boolean result (transfer, startSale, kycRegister, mintTokens,
    /// the verification-mode admissibility answer, and unknown methods).
    Bool(bool),
    /// Small integer result (decimals).
    Int(i128),
    /// Unsigned 256-bit result (balanceOf, totalSupply).
    Uint(U256),
    /// String result (name, symbol).
    Str(String),
    /// No result (initialize).
    Void,
}

// =============================================================================
// TRANSACTION VIEW
// =============================================================================

/// One value-transfer output in the host's transaction model.
///
/// An output credits `recipient` with `value` units of `asset`. The same
/// shape describes a referenced (spent) output, where `recipient` is the
/// previously credited source now being spent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Asset being transferred.
    pub asset: AssetId,
    /// Amount in the asset's base units.
    pub value: u64,
    /// Destination identifier (or spent-output provenance for references).
    pub recipient: Address,
}

impl TxOutput {
    /// Creates a new output.
    #[must_use]
    pub fn new(asset: AssetId, value: u64, recipient: Address) -> Self {
        Self {
            asset,
            value,
            recipient,
        }
    }
}

/// The host-supplied view of the current transaction.
///
/// This is data, not a port: the host hands the full output and
/// referenced-output lists to every invocation, and the contribution scanner
/// derives per-asset amounts from them without further host calls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionView {
    /// Outputs created by this transaction.
    pub outputs: Vec<TxOutput>,
    /// Outputs referenced (spent) by this transaction.
    pub references: Vec<TxOutput>,
}

impl TransactionView {
    /// An empty transaction carrying no value.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

// =============================================================================
// CONTRIBUTION OBSERVATION
// =============================================================================

/// Per-invocation observation of value sent to the contract.
///
/// Derived by the contribution scanner; never persisted. The two recognized
/// assets are tracked independently and never merged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContributionObservation {
    /// Amount contributed in the utility asset.
    pub utility: u64,
    /// Amount contributed in the fuel asset.
    pub fuel: u64,
}

impl ContributionObservation {
    /// Returns true if neither recognized asset carried a contribution.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.utility == 0 && self.fuel == 0
    }
}

// =============================================================================
// CONTRACT CONFIGURATION
// =============================================================================

/// A recognized contribution asset together with its fixed exchange rate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedAsset {
    /// The asset identifier matched against transaction outputs.
    pub id: AssetId,
    /// Contribution units per minted token.
    pub swap_rate: u64,
    /// Human-readable tag carried in refund notifications.
    pub tag: String,
}

/// Static token metadata served by the constant methods.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Decimal places.
    pub decimals: u8,
    /// Total supply in base units, granted once to the owner.
    pub total_supply: U256,
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self {
            name: "Tutorial Token".to_string(),
            symbol: "TT".to_string(),
            decimals: 2,
            total_supply: U256::from(100_000u64),
        }
    }
}

/// Contract configuration, provided at construction.
///
/// Privileged identities and asset identifiers are explicit configuration so
/// the ledger logic stays testable against synthetic identities; nothing in
/// the engines hard-codes an address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// The contract's own identity; outputs paying this address count as
    /// contributions.
    pub contract: Address,
    /// Owner account: passes verification unconditionally, configures the
    /// sale, and receives the initial supply.
    pub owner: Address,
    /// KYC administrator account: the only identity allowed to register
    /// accounts in the KYC registry.
    pub kyc_admin: Address,
    /// First recognized contribution asset.
    pub utility_asset: RecognizedAsset,
    /// Second recognized contribution asset.
    pub fuel_asset: RecognizedAsset,
    /// Token metadata served by the constant methods.
    pub metadata: TokenMetadata,
    /// Whether the eligibility predicate consults the KYC registry.
    /// Disabled by default; the registry itself is always writable.
    pub enforce_kyc: bool,
}

impl ContractConfig {
    /// Utility asset identifier of the original deployment.
    pub const DEFAULT_UTILITY_ASSET: [u8; 32] = [
        155, 124, 255, 218, 166, 116, 190, 174, 15, 147, 14, 190, 96, 133, 175, 144, 147, 229,
        254, 86, 179, 74, 92, 34, 12, 205, 207, 110, 252, 51, 111, 197,
    ];

    /// Fuel asset identifier of the original deployment.
    pub const DEFAULT_FUEL_ASSET: [u8; 32] = [
        231, 45, 40, 105, 121, 238, 108, 177, 183, 230, 93, 253, 223, 178, 227, 132, 16, 11, 141,
        20, 142, 119, 88, 222, 66, 228, 22, 139, 113, 121, 44, 96,
    ];

    /// Creates a configuration with the given identities and the default
    /// assets, rates, and metadata.
    #[must_use]
    pub fn new(contract: Address, owner: Address, kyc_admin: Address) -> Self {
        Self {
            contract,
            owner,
            kyc_admin,
            utility_asset: RecognizedAsset {
                id: AssetId::new(Self::DEFAULT_UTILITY_ASSET),
                swap_rate: 2,
                tag: "Neo".to_string(),
            },
            fuel_asset: RecognizedAsset {
                id: AssetId::new(Self::DEFAULT_FUEL_ASSET),
                swap_rate: 5,
                tag: "Gas".to_string(),
            },
            metadata: TokenMetadata::default(),
            enforce_kyc: false,
        }
    }

    /// Returns true if the asset matches either recognized asset.
    #[must_use]
    pub fn recognizes(&self, asset: &AssetId) -> bool {
        *asset == self.utility_asset.id || *asset == self.fuel_asset.id
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self::new(Address::ZERO, Address::ZERO, Address::ZERO)
    }
}

// =============================================================================
// TESTS
// =============================================================================
