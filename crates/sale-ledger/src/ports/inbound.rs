//! # Driving Ports (API - Inbound)
//!
//! The interface the host VM drives. One entrypoint covers both trigger
//! modes; the method name string and argument list form the invocation ABI.

use crate::domain::entities::{ReturnValue, TransactionView, Trigger, Value};
use crate::errors::InvocationError;
use crate::events::NotificationLog;
use serde::{Deserialize, Serialize};

// =============================================================================
// METHOD NAMES (invocation ABI)
// =============================================================================

/// Accepted method name strings.
pub mod methods {
    /// `name() -> string`
    pub const NAME: &str = "name";
    /// `symbol() -> string`
    pub const SYMBOL: &str = "symbol";
    /// `decimals() -> integer`
    pub const DECIMALS: &str = "decimals";
    /// `totalSupply() -> integer`
    pub const TOTAL_SUPPLY: &str = "totalSupply";
    /// `initialize() -> void`
    pub const INITIALIZE: &str = "initialize";
    /// `balanceOf(account) -> integer`
    pub const BALANCE_OF: &str = "balanceOf";
    /// `transfer(from, to, amount) -> bool`
    pub const TRANSFER: &str = "transfer";
    /// `startSale(start, end) -> bool`
    pub const START_SALE: &str = "startSale";
    /// `kycRegister(account) -> bool`
    pub const KYC_REGISTER: &str = "kycRegister";
    /// `mintTokens() -> bool`
    pub const MINT_TOKENS: &str = "mintTokens";
}

// =============================================================================
// INVOCATION OUTCOME
// =============================================================================

/// Result of a completed (non-aborted) invocation: the dispatched method's
/// return value plus everything the invocation emitted, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationOutcome {
    /// The dispatched method's return value.
    pub value: ReturnValue,
    /// Ordered notification log for this invocation.
    pub notifications: NotificationLog,
}

impl InvocationOutcome {
    /// Creates an outcome.
    #[must_use]
    pub fn new(value: ReturnValue, notifications: NotificationLog) -> Self {
        Self {
            value,
            notifications,
        }
    }

    /// Returns the boolean result, treating every non-`Bool(true)` value as
    /// false. Mirrors how the host interprets a verification-mode answer.
    #[must_use]
    pub fn allowed(&self) -> bool {
        matches!(self.value, ReturnValue::Bool(true))
    }
}

// =============================================================================
// CONTRACT API
// =============================================================================

/// The contract entrypoint as the host VM sees it.
///
/// The host invokes this once per trigger mode per transaction. A returned
/// `Err` is a hard failure: the host discards every storage write the
/// invocation made. `Ok` outcomes may still carry a soft `Bool(false)`.
pub trait SaleContractApi {
    /// Handles one invocation in the given trigger mode.
    ///
    /// # Errors
    ///
    /// Returns [`InvocationError`] on malformed input (wrong address length,
    /// negative amount, bad argument) or on store failure.
    fn invoke(
        &self,
        trigger: Trigger,
        method: &str,
        args: &[Value],
        tx: &TransactionView,
    ) -> Result<InvocationOutcome, InvocationError>;
}

// =============================================================================
// TESTS
// =============================================================================
