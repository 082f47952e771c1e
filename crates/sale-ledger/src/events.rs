//! # Notifications
//!
//! Structured records emitted during an invocation. The host contract model
//! exposes a fire-and-forget notify primitive; here emissions are collected
//! into an ordered per-invocation log that the embedder (and the test
//! harness) can inspect after the invocation returns.

use crate::domain::value_objects::{Address, U256};
use serde::{Deserialize, Serialize};

// =============================================================================
// NOTIFICATION RECORDS
// =============================================================================

/// Diagnostic message strings emitted on soft failures.
pub mod diagnostics {
    /// Contribution attempted outside the sale window.
    pub const SALE_NOT_OPEN: &str = "Sale is not open";
    /// Contribution blocked by the KYC registry (enforcement enabled only).
    pub const KYC_FAILURE: &str = "KYC Failure";
    /// Non-owner attempted a privileged operation.
    pub const NOT_AUTHORIZED: &str = "Not authorized";
    /// `startSale` called with `end <= start`.
    pub const INVALID_WINDOW: &str = "Invalid Start/End";
    /// Transfer source failed the witness check.
    pub const WITNESS_FAILED: &str = "Address check failed";
    /// The host declared a trigger mode this contract does not handle.
    pub const UNSUPPORTED_TRIGGER: &str = "Unsupported trigger type";
    /// Sender resolution found no referenced output in a recognized asset.
    pub const SENDER_NOT_FOUND: &str = "no output matching that hash was found";
    /// Confirmation that a sale window was persisted.
    pub const SALE_RECORDED: &str = "Sale Start/End Recorded";
}

/// A single emitted notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// Token movement. `from: None` denotes minted supply: tokens were
    /// issued without debiting any account.
    Transfer {
        /// Debited account, or `None` for issuance.
        from: Option<Address>,
        /// Credited account.
        to: Address,
        /// Amount moved.
        amount: U256,
    },

    /// Advisory refund notice. Emitted when a contribution arrived while
    /// ineligible; it does not itself move value back. Off-chain tooling is
    /// expected to act on it.
    Refund {
        /// Tag of the contributed asset.
        asset_tag: String,
        /// Contributed amount in the asset's base units.
        amount: u64,
        /// Account the refund should go to.
        to: Address,
    },

    /// Free-form diagnostic string (see [`diagnostics`]).
    Diagnostic {
        /// The message text.
        message: String,
    },
}

impl Notification {
    /// Shorthand for a diagnostic record.
    #[must_use]
    pub fn diagnostic(message: &str) -> Self {
        Self::Diagnostic {
            message: message.to_string(),
        }
    }
}

// =============================================================================
// NOTIFICATION LOG
// =============================================================================

/// Ordered log of notifications emitted during one invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification.
    pub fn emit(&mut self, notification: Notification) {
        self.entries.push(notification);
    }

    /// Appends a diagnostic message.
    pub fn emit_diagnostic(&mut self, message: &str) {
        self.emit(Notification::diagnostic(message));
    }

    /// Emitted notifications, in emission order.
    #[must_use]
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Number of emitted notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the log, returning the entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<Notification> {
        self.entries
    }

    /// Returns all transfer notifications in the log.
    #[must_use]
    pub fn transfers(&self) -> Vec<&Notification> {
        self.entries
            .iter()
            .filter(|n| matches!(n, Notification::Transfer { .. }))
            .collect()
    }

    /// Returns all refund notifications in the log.
    #[must_use]
    pub fn refunds(&self) -> Vec<&Notification> {
        self.entries
            .iter()
            .filter(|n| matches!(n, Notification::Refund { .. }))
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
