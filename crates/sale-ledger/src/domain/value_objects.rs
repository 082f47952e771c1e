//! # Value Objects
//!
//! Immutable domain primitives for the crowd-sale ledger.
//! These types represent concepts defined by their value, not identity.

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export U256 from primitive-types for persisted balance arithmetic
pub use primitive_types::U256;

// =============================================================================
// ADDRESS (20 bytes)
// =============================================================================

/// A 20-byte account identifier in the host's address encoding.
///
/// Balance keys, witness checks, and KYC records are all keyed by `Address`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address (0x0000...0000).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a slice. Returns `None` if the length is not 20.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 20 {
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[18..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 20] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

// =============================================================================
// ASSET ID (32 bytes)
// =============================================================================

/// A 32-byte asset identifier in the host's transaction model.
///
/// The contract recognizes exactly two assets (configured in
/// [`ContractConfig`](crate::domain::entities::ContractConfig)); contributions
/// arriving in any other asset are invisible to the scanner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AssetId(pub [u8; 32]);

impl AssetId {
    /// The zero asset id.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates an asset id from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates an asset id from a slice. Returns `None` if the length is not 32.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 32 {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId(0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...)")
    }
}

impl From<[u8; 32]> for AssetId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

// =============================================================================
// STORE KEY (variable length)
// =============================================================================

/// A key in the host's persistent key-value store.
///
/// The contract uses a flat keyspace: each account's balance lives under the
/// raw account bytes, KYC flags under a `kyc_` prefix, and the sale window
/// and initialization sentinel under fixed named keys.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreKey(pub Vec<u8>);

impl StoreKey {
    /// Fixed key holding the sale window's start height.
    pub const SALE_START: &'static [u8] = b"SaleStart";

    /// Fixed key holding the sale window's end height.
    pub const SALE_END: &'static [u8] = b"SaleEnd";

    /// Fixed sentinel key marking the one-time initial supply grant.
    pub const INITIALIZED: &'static [u8] = b"initialized";

    /// Prefix for per-account KYC presence flags.
    pub const KYC_PREFIX: &'static [u8] = b"kyc_";

    /// Balance key for an account: the raw 20 account bytes.
    #[must_use]
    pub fn balance(account: &Address) -> Self {
        Self(account.as_bytes().to_vec())
    }

    /// KYC flag key for an account: `"kyc_"` followed by the account bytes.
    #[must_use]
    pub fn kyc(account: &Address) -> Self {
        let mut key = Self::KYC_PREFIX.to_vec();
        key.extend_from_slice(account.as_bytes());
        Self(key)
    }

    /// Sale window start key.
    #[must_use]
    pub fn sale_start() -> Self {
        Self(Self::SALE_START.to_vec())
    }

    /// Sale window end key.
    #[must_use]
    pub fn sale_end() -> Self {
        Self(Self::SALE_END.to_vec())
    }

    /// Initialization sentinel key.
    #[must_use]
    pub fn initialized() -> Self {
        Self(Self::INITIALIZED.to_vec())
    }

    /// Returns the underlying key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) if s.bytes().all(|b| b.is_ascii_graphic()) => {
                write!(f, "StoreKey({s:?})")
            }
            _ => {
                write!(f, "StoreKey(0x")?;
                for byte in &self.0 {
                    write!(f, "{byte:02x}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<Vec<u8>> for StoreKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

// =============================================================================
// TESTS
// =============================================================================
