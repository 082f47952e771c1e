//! # Sale Contract Service
//!
//! The trigger dispatcher and the engines behind it, wired against the
//! outbound ports. This is the behavioral core: verification-mode
//! admissibility, the refund check that precedes every application-mode
//! call, and the minting, transfer, KYC, and sale-configuration engines.
//!
//! Execution is synchronous and strictly sequential per invocation; the host
//! serializes invocations and discards all writes of an invocation that
//! returns a hard error.

use crate::domain::entities::{
    ContractConfig, ReturnValue, TransactionView, Trigger, Value,
};
use crate::domain::invariants::check_conservation_invariant;
use crate::domain::services::{
    compute_minted, decode_uint, encode_uint, observe_contribution, resolve_sender, PRESENCE_FLAG,
};
use crate::domain::value_objects::{Address, StoreKey, U256};
use crate::errors::InvocationError;
use crate::events::{diagnostics, Notification, NotificationLog};
use crate::ports::inbound::{methods, InvocationOutcome, SaleContractApi};
use crate::ports::outbound::{HeightOracle, LedgerStore, WitnessVerifier};

use std::sync::RwLock;
use tracing::{debug, info, instrument, warn};

// =============================================================================
// SERVICE STATISTICS
// =============================================================================

/// Counters maintained across invocations.
#[derive(Debug, Default, Clone)]
pub struct ServiceStats {
    /// Total invocations handled (all triggers).
    pub invocations_handled: u64,
    /// Verification-mode invocations answered `true`.
    pub verifications_allowed: u64,
    /// Mint operations performed.
    pub mints_performed: u64,
    /// Refund notifications advised.
    pub refunds_advised: u64,
    /// Invocations with an unknown trigger or method.
    pub rejected_invocations: u64,
}

// =============================================================================
// SALE CONTRACT SERVICE
// =============================================================================

/// The crowd-sale ledger, generic over its host ports.
pub struct SaleContractService<S: LedgerStore, W: WitnessVerifier, H: HeightOracle> {
    /// Static configuration: identities, assets, rates, metadata.
    config: ContractConfig,
    /// Persistent key-value store supplied by the host.
    store: S,
    /// Host witness-check primitive.
    witness: W,
    /// Host block-height delivery.
    height: H,
    /// Invocation counters.
    stats: RwLock<ServiceStats>,
}

impl<S: LedgerStore, W: WitnessVerifier, H: HeightOracle> SaleContractService<S, W, H> {
    /// Creates a service over the given ports.
    pub fn new(config: ContractConfig, store: S, witness: W, height: H) -> Self {
        Self {
            config,
            store,
            witness,
            height,
            stats: RwLock::new(ServiceStats::default()),
        }
    }

    /// Current service statistics.
    pub fn stats(&self) -> ServiceStats {
        self.stats.read().unwrap().clone()
    }

    /// The configuration this service was built with.
    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    // =========================================================================
    // ELIGIBILITY PREDICATE (shared by both trigger modes)
    // =========================================================================

    /// Reads the configured sale window and compares it against the current
    /// height.
    ///
    /// The comparison is `start > current && end < current`, exactly as the
    /// ported on-chain contract evaluates it. For any window satisfying the
    /// configuration invariant `end > start` this can never be true, so the
    /// sale never reads as open; the sense is almost certainly inverted, and
    /// it is preserved rather than corrected (see DESIGN.md).
    fn is_sale_open(&self) -> Result<bool, InvocationError> {
        let start = decode_uint(self.store.get(&StoreKey::sale_start())?.as_deref());
        let end = decode_uint(self.store.get(&StoreKey::sale_end())?.as_deref());
        let current = U256::from(self.height.current_height());

        Ok(start > current && end < current)
    }

    /// Resolves the contributing account, emitting a diagnostic when no
    /// referenced output is in a recognized asset.
    fn resolve_sender_logged(
        &self,
        tx: &TransactionView,
        log: &mut NotificationLog,
    ) -> Option<Address> {
        let sender = resolve_sender(tx, &self.config);
        if sender.is_none() {
            log.emit_diagnostic(diagnostics::SENDER_NOT_FOUND);
        }
        sender
    }

    /// The eligibility predicate: may the current transaction contribute?
    ///
    /// Requires the sale window to read as open and the transaction to carry
    /// a non-zero contribution in at least one recognized asset. The KYC
    /// check participates only when `enforce_kyc` is configured.
    fn can_sender_contribute(
        &self,
        tx: &TransactionView,
        log: &mut NotificationLog,
    ) -> Result<bool, InvocationError> {
        if !self.is_sale_open()? {
            log.emit_diagnostic(diagnostics::SALE_NOT_OPEN);
            return Ok(false);
        }

        if self.config.enforce_kyc {
            let verified = match self.resolve_sender_logged(tx, log) {
                Some(sender) => self.is_kyc_verified(&sender)?,
                None => false,
            };
            if !verified {
                log.emit_diagnostic(diagnostics::KYC_FAILURE);
                return Ok(false);
            }
        }

        // A transaction carrying no recognized contribution is a withdrawal
        // attempt; the owner witness check upstream supersedes this.
        let observation = observe_contribution(tx, &self.config);
        Ok(!observation.is_empty())
    }

    // =========================================================================
    // TRIGGER PATHS
    // =========================================================================

    /// Verification mode: should this transaction be allowed to proceed?
    fn verify(
        &self,
        tx: &TransactionView,
        log: &mut NotificationLog,
    ) -> Result<bool, InvocationError> {
        if self.witness.check_witness(&self.config.owner) {
            return Ok(true);
        }

        self.can_sender_contribute(tx, log)
    }

    /// Refund check run before every application-mode dispatch.
    ///
    /// When the transaction is not eligible but did send value in a
    /// recognized asset, an advisory `Refund` notification is emitted per
    /// asset. Nothing is moved back here; off-chain tooling acts on the
    /// notification.
    fn perform_fund_transfer_check(
        &self,
        tx: &TransactionView,
        log: &mut NotificationLog,
    ) -> Result<(), InvocationError> {
        if self.can_sender_contribute(tx, log)? {
            return Ok(());
        }

        let observation = observe_contribution(tx, &self.config);
        if observation.is_empty() {
            return Ok(());
        }

        let Some(sender) = self.resolve_sender_logged(tx, log) else {
            return Ok(());
        };

        if observation.utility > 0 {
            warn!(
                asset = %self.config.utility_asset.tag,
                amount = observation.utility,
                to = %sender,
                "Ineligible contribution, advising refund"
            );
            log.emit(Notification::Refund {
                asset_tag: self.config.utility_asset.tag.clone(),
                amount: observation.utility,
                to: sender,
            });
            self.stats.write().unwrap().refunds_advised += 1;
        }

        if observation.fuel > 0 {
            warn!(
                asset = %self.config.fuel_asset.tag,
                amount = observation.fuel,
                to = %sender,
                "Ineligible contribution, advising refund"
            );
            log.emit(Notification::Refund {
                asset_tag: self.config.fuel_asset.tag.clone(),
                amount: observation.fuel,
                to: sender,
            });
            self.stats.write().unwrap().refunds_advised += 1;
        }

        Ok(())
    }

    /// Application-mode method dispatch.
    fn dispatch(
        &self,
        method: &str,
        args: &[Value],
        tx: &TransactionView,
        log: &mut NotificationLog,
    ) -> Result<ReturnValue, InvocationError> {
        match method {
            methods::NAME => Ok(ReturnValue::Str(self.config.metadata.name.clone())),
            methods::SYMBOL => Ok(ReturnValue::Str(self.config.metadata.symbol.clone())),
            methods::DECIMALS => Ok(ReturnValue::Int(i128::from(self.config.metadata.decimals))),
            methods::TOTAL_SUPPLY => Ok(ReturnValue::Uint(self.config.metadata.total_supply)),
            methods::INITIALIZE => {
                self.initialize(log)?;
                Ok(ReturnValue::Void)
            }
            methods::BALANCE_OF => {
                let account = address_arg(args, 0, method)?;
                Ok(ReturnValue::Uint(self.balance_of(&account)?))
            }
            methods::TRANSFER => {
                let from = address_arg(args, 0, method)?;
                let to = address_arg(args, 1, method)?;
                let amount = uint_arg(args, 2, method)?;
                Ok(ReturnValue::Bool(self.transfer(&from, &to, amount, log)?))
            }
            methods::START_SALE => {
                let start = uint_arg(args, 0, method)?;
                let end = uint_arg(args, 1, method)?;
                Ok(ReturnValue::Bool(self.start_sale(start, end, log)?))
            }
            methods::KYC_REGISTER => {
                let account = address_arg(args, 0, method)?;
                Ok(ReturnValue::Bool(self.kyc_register(&account)?))
            }
            methods::MINT_TOKENS => Ok(ReturnValue::Bool(self.mint_tokens(tx, log)?)),
            _ => {
                debug!(method, "Unrecognized method");
                self.stats.write().unwrap().rejected_invocations += 1;
                Ok(ReturnValue::Bool(false))
            }
        }
    }

    // =========================================================================
    // MINTING ENGINE
    // =========================================================================

    /// Converts the transaction's contribution into newly issued balance.
    ///
    /// Performs no window or eligibility check of its own; the dispatcher's
    /// verification path and refund check are expected to have gated the
    /// transaction already. Always reports success.
    fn mint_tokens(
        &self,
        tx: &TransactionView,
        log: &mut NotificationLog,
    ) -> Result<bool, InvocationError> {
        let Some(sender) = self.resolve_sender_logged(tx, log) else {
            // No provenance in a recognized asset: nothing to credit.
            return Ok(true);
        };

        let observation = observe_contribution(tx, &self.config);
        let minted = compute_minted(&observation, &self.config);

        let key = StoreKey::balance(&sender);
        let balance = decode_uint(self.store.get(&key)?.as_deref());
        self.store.put(key, encode_uint(balance + minted))?;

        info!(to = %sender, amount = %minted, "Minted tokens");
        self.stats.write().unwrap().mints_performed += 1;

        log.emit(Notification::Transfer {
            from: None,
            to: sender,
            amount: minted,
        });

        Ok(true)
    }

    // =========================================================================
    // TRANSFER ENGINE
    // =========================================================================

    /// Moves balance between two accounts.
    ///
    /// Soft-fails (false, no mutation) on a missing witness or an insolvent
    /// debit. A zero amount or a self-transfer emits the transfer
    /// notification without touching storage and reports success.
    fn transfer(
        &self,
        from: &Address,
        to: &Address,
        amount: U256,
        log: &mut NotificationLog,
    ) -> Result<bool, InvocationError> {
        if !self.witness.check_witness(from) {
            warn!(from = %from, "Transfer witness check failed");
            log.emit_diagnostic(diagnostics::WITNESS_FAILED);
            return Ok(false);
        }

        if amount.is_zero() || from == to {
            // Signalled as a transfer even though no balance differs.
            log.emit(Notification::Transfer {
                from: Some(*from),
                to: *to,
                amount,
            });
            return Ok(true);
        }

        let from_key = StoreKey::balance(from);
        let to_key = StoreKey::balance(to);
        let from_balance = decode_uint(self.store.get(&from_key)?.as_deref());
        let to_balance = decode_uint(self.store.get(&to_key)?.as_deref());

        if from_balance < amount {
            debug!(from = %from, balance = %from_balance, amount = %amount, "Insolvent debit rejected");
            return Ok(false);
        }

        let new_from = from_balance - amount;
        let new_to = to_balance + amount;
        self.store.put(from_key, encode_uint(new_from))?;
        self.store.put(to_key, encode_uint(new_to))?;

        debug_assert!(check_conservation_invariant(
            from_balance,
            to_balance,
            new_from,
            new_to,
            amount
        ));

        log.emit(Notification::Transfer {
            from: Some(*from),
            to: *to,
            amount,
        });

        Ok(true)
    }

    /// Stored balance of an account; implicitly zero when absent.
    fn balance_of(&self, account: &Address) -> Result<U256, InvocationError> {
        Ok(decode_uint(
            self.store.get(&StoreKey::balance(account))?.as_deref(),
        ))
    }

    // =========================================================================
    // SALE CONFIGURATION
    // =========================================================================

    /// One-time initial supply grant to the owner.
    ///
    /// Owner witness required; silently a no-op otherwise, and idempotent
    /// once the sentinel is set.
    fn initialize(&self, log: &mut NotificationLog) -> Result<(), InvocationError> {
        if !self.witness.check_witness(&self.config.owner) {
            debug!("initialize called without owner witness");
            return Ok(());
        }

        if self.store.contains(&StoreKey::initialized())? {
            return Ok(());
        }

        let supply = self.config.metadata.total_supply;
        self.store
            .put(StoreKey::balance(&self.config.owner), encode_uint(supply))?;
        self.store
            .put(StoreKey::initialized(), PRESENCE_FLAG.to_vec())?;

        info!(owner = %self.config.owner, supply = %supply, "Initial supply granted");

        log.emit(Notification::Transfer {
            from: None,
            to: self.config.owner,
            amount: supply,
        });

        Ok(())
    }

    /// Persists the sale window. Owner-only; rejects `end <= start`.
    fn start_sale(
        &self,
        start: U256,
        end: U256,
        log: &mut NotificationLog,
    ) -> Result<bool, InvocationError> {
        if !self.witness.check_witness(&self.config.owner) {
            warn!("startSale called without owner witness");
            log.emit_diagnostic(diagnostics::NOT_AUTHORIZED);
            return Ok(false);
        }

        if end <= start {
            log.emit_diagnostic(diagnostics::INVALID_WINDOW);
            return Ok(false);
        }

        self.store.put(StoreKey::sale_start(), encode_uint(start))?;
        self.store.put(StoreKey::sale_end(), encode_uint(end))?;

        info!(start = %start, end = %end, "Sale window recorded");
        log.emit_diagnostic(diagnostics::SALE_RECORDED);

        Ok(true)
    }

    // =========================================================================
    // KYC REGISTRY
    // =========================================================================

    /// Registers an account in the KYC allow-list. Administrator-only.
    fn kyc_register(&self, account: &Address) -> Result<bool, InvocationError> {
        if !self.witness.check_witness(&self.config.kyc_admin) {
            debug!(account = %account, "kycRegister without administrator witness");
            return Ok(false);
        }

        self.store
            .put(StoreKey::kyc(account), PRESENCE_FLAG.to_vec())?;
        Ok(true)
    }

    /// Returns true if the account holds a KYC presence flag.
    ///
    /// Consulted by the eligibility predicate only when `enforce_kyc` is
    /// configured; the registry itself is always maintained.
    pub fn is_kyc_verified(&self, account: &Address) -> Result<bool, InvocationError> {
        Ok(self.store.contains(&StoreKey::kyc(account))?)
    }
}

impl<S: LedgerStore, W: WitnessVerifier, H: HeightOracle> SaleContractApi
    for SaleContractService<S, W, H>
{
    #[instrument(skip(self, args, tx), fields(trigger = ?trigger, method = method))]
    fn invoke(
        &self,
        trigger: Trigger,
        method: &str,
        args: &[Value],
        tx: &TransactionView,
    ) -> Result<InvocationOutcome, InvocationError> {
        let mut log = NotificationLog::new();

        let value = match trigger {
            Trigger::Verification => {
                let allowed = self.verify(tx, &mut log)?;
                if allowed {
                    self.stats.write().unwrap().verifications_allowed += 1;
                }
                ReturnValue::Bool(allowed)
            }
            Trigger::Application => {
                self.perform_fund_transfer_check(tx, &mut log)?;
                self.dispatch(method, args, tx, &mut log)?
            }
            Trigger::Unknown => {
                warn!("Unsupported trigger type");
                log.emit_diagnostic(diagnostics::UNSUPPORTED_TRIGGER);
                self.stats.write().unwrap().rejected_invocations += 1;
                ReturnValue::Bool(false)
            }
        };

        self.stats.write().unwrap().invocations_handled += 1;

        Ok(InvocationOutcome::new(value, log))
    }
}

// =============================================================================
// ARGUMENT HELPERS
// =============================================================================

/// Extracts a 20-byte address argument. Wrong length is a hard failure.
fn address_arg(args: &[Value], index: usize, method: &str) -> Result<Address, InvocationError> {
    let bytes = args
        .get(index)
        .and_then(Value::as_bytes)
        .ok_or_else(|| InvocationError::BadArgument {
            method: method.to_string(),
            index,
        })?;

    Address::from_slice(bytes).ok_or(InvocationError::InvalidAddressLength {
        actual: bytes.len(),
    })
}

/// Extracts a non-negative integer argument. A negative value is a hard
/// failure; balances and heights are never persisted negative.
fn uint_arg(args: &[Value], index: usize, method: &str) -> Result<U256, InvocationError> {
    let value = args
        .get(index)
        .and_then(Value::as_int)
        .ok_or_else(|| InvocationError::BadArgument {
            method: method.to_string(),
            index,
        })?;

    if value < 0 {
        return Err(InvocationError::NegativeAmount(value));
    }

    Ok(U256::from(value as u128))
}

// =============================================================================
// TEST SERVICE FACTORY
// =============================================================================

/// Builds a service over the in-memory adapters, returning handles to drive
/// them between invocations.
#[allow(clippy::type_complexity)]
pub fn create_test_service(
    config: ContractConfig,
) -> (
    SaleContractService<
        std::sync::Arc<crate::adapters::MemoryStore>,
        std::sync::Arc<crate::adapters::StaticWitnessVerifier>,
        std::sync::Arc<crate::adapters::FixedHeightOracle>,
    >,
    std::sync::Arc<crate::adapters::MemoryStore>,
    std::sync::Arc<crate::adapters::StaticWitnessVerifier>,
    std::sync::Arc<crate::adapters::FixedHeightOracle>,
) {
    use std::sync::Arc;

    let store = Arc::new(crate::adapters::MemoryStore::new());
    let witness = Arc::new(crate::adapters::StaticWitnessVerifier::new());
    let height = Arc::new(crate::adapters::FixedHeightOracle::new());

    let service = SaleContractService::new(
        config,
        Arc::clone(&store),
        Arc::clone(&witness),
        Arc::clone(&height),
    );

    (service, store, witness, height)
}

// =============================================================================
// TESTS
// =============================================================================
