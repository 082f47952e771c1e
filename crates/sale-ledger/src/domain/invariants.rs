//! # Domain Invariants
//!
//! Critical invariants that MUST hold across ledger mutations. The engines
//! enforce them inline; these checks exist so tests and debug assertions can
//! verify an outcome independently of the code that produced it.
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Balances never go negative | `service.rs` - transfer rejects insolvent debits |
//! | INVARIANT-2 | Conservation across transfers | `service.rs` - debit and credit within one invocation |
//! | INVARIANT-3 | Sale window well-formed at configuration | `service.rs` - `startSale` rejects `end <= start` |
//! | INVARIANT-4 | Initial supply granted at most once | `service.rs` - sentinel key guards `initialize` |

use crate::domain::value_objects::U256;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-1: a debit may not drive the source balance below zero.
#[must_use]
pub fn check_solvency_invariant(source_balance: U256, amount: U256) -> bool {
    source_balance >= amount
}

/// INVARIANT-2: a successful transfer of `amount` moves exactly `amount`.
///
/// The source decreases by `amount`, the destination increases by `amount`,
/// and the combined balance is unchanged.
#[must_use]
pub fn check_conservation_invariant(
    pre_from: U256,
    pre_to: U256,
    post_from: U256,
    post_to: U256,
    amount: U256,
) -> bool {
    post_from == pre_from.saturating_sub(amount)
        && post_to == pre_to.saturating_add(amount)
        && pre_from.saturating_add(pre_to) == post_from.saturating_add(post_to)
}

/// INVARIANT-3: a persisted sale window always satisfies `end > start`.
#[must_use]
pub fn check_window_invariant(start: U256, end: U256) -> bool {
    end > start
}

/// Checks a completed transfer outcome against all applicable invariants.
#[must_use]
pub fn check_transfer_invariants(
    pre_from: U256,
    pre_to: U256,
    post_from: U256,
    post_to: U256,
    amount: U256,
) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_solvency_invariant(pre_from, amount) {
        violations.push(InvariantViolation::InsolventDebit {
            balance: pre_from,
            amount,
        });
    }

    if !check_conservation_invariant(pre_from, pre_to, post_from, post_to, amount) {
        violations.push(InvariantViolation::ConservationBroken {
            moved_out: pre_from.saturating_sub(post_from),
            moved_in: post_to.saturating_sub(pre_to),
        });
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of an invariant check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A debit exceeded the source balance.
    InsolventDebit {
        /// Balance before the debit.
        balance: U256,
        /// Amount the debit attempted to move.
        amount: U256,
    },
    /// Debited and credited amounts differ.
    ConservationBroken {
        /// Amount removed from the source.
        moved_out: U256,
        /// Amount added to the destination.
        moved_in: U256,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsolventDebit { balance, amount } => {
                write!(f, "insolvent debit: balance {balance} < amount {amount}")
            }
            Self::ConservationBroken { moved_out, moved_in } => {
                write!(
                    f,
                    "conservation broken: moved out {moved_out}, moved in {moved_in}"
                )
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
