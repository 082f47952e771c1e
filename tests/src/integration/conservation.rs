//! # Ledger Properties
//!
//! Randomized transfer runs checked against an independent model: balances
//! never go negative, every successful transfer moves exactly its amount,
//! and total supply is constant across any sequence of transfers.

#[cfg(test)]
mod tests {
    use crate::fixtures::{
        init_tracing, random_account, seeded_rng, test_config, identities,
    };
    use primitive_types::U256;
    use rand::Rng;
    use sale_ledger::prelude::*;
    use std::collections::HashMap;

    /// Independent balance model mirroring what the ledger should hold.
    struct Model {
        balances: HashMap<Address, U256>,
    }

    impl Model {
        fn new() -> Self {
            Self {
                balances: HashMap::new(),
            }
        }

        fn balance(&self, account: &Address) -> U256 {
            self.balances.get(account).copied().unwrap_or_default()
        }

        fn apply_transfer(&mut self, from: &Address, to: &Address, amount: U256) {
            let from_balance = self.balance(from);
            let to_balance = self.balance(to);
            self.balances.insert(*from, from_balance - amount);
            self.balances.insert(*to, to_balance + amount);
        }

        fn total(&self) -> U256 {
            self.balances
                .values()
                .fold(U256::zero(), |sum, balance| sum + *balance)
        }
    }

    fn transfer_args(from: &Address, to: &Address, amount: u64) -> [Value; 3] {
        [
            Value::Bytes(from.as_bytes().to_vec()),
            Value::Bytes(to.as_bytes().to_vec()),
            Value::Int(i128::from(amount)),
        ]
    }

    #[test]
    fn test_randomized_transfers_conserve_supply() {
        init_tracing();
        let config = test_config();
        let owner = identities::owner();
        let (service, _, witness, _) = create_test_service(config);
        witness.grant(owner);

        // Seed the ledger with the initial supply.
        service
            .invoke(
                Trigger::Application,
                methods::INITIALIZE,
                &[],
                &TransactionView::empty(),
            )
            .unwrap();

        let mut rng = seeded_rng(0xC0FFEE);
        let mut accounts = vec![owner];
        for _ in 0..6 {
            let account = random_account(&mut rng);
            witness.grant(account);
            accounts.push(account);
        }

        let mut model = Model::new();
        model.balances.insert(owner, U256::from(100_000u64));
        let initial_total = model.total();

        let tx = TransactionView::empty();
        for _ in 0..500 {
            let from = accounts[rng.gen_range(0..accounts.len())];
            let to = accounts[rng.gen_range(0..accounts.len())];
            let amount = rng.gen_range(0..2_000u64);

            let args = transfer_args(&from, &to, amount);
            let outcome = service
                .invoke(Trigger::Application, methods::TRANSFER, &args, &tx)
                .unwrap();

            let pre_from = model.balance(&from);
            let pre_to = model.balance(&to);
            let moved = U256::from(amount);

            match outcome.value {
                ReturnValue::Bool(true) => {
                    if amount > 0 && from != to {
                        model.apply_transfer(&from, &to, moved);
                        assert!(check_transfer_invariants(
                            pre_from,
                            pre_to,
                            model.balance(&from),
                            model.balance(&to),
                            moved,
                        )
                        .is_valid());
                    }
                    // Zero amounts and self-transfers still announce a
                    // transfer but change nothing.
                }
                ReturnValue::Bool(false) => {
                    // Only an insolvent debit refuses here; every account
                    // has a witness granted.
                    assert!(
                        pre_from < moved,
                        "transfer refused despite sufficient balance"
                    );
                }
                other => panic!("unexpected transfer result {other:?}"),
            }

            // The ledger agrees with the model after every step.
            for account in &accounts {
                let args = [Value::Bytes(account.as_bytes().to_vec())];
                let outcome = service
                    .invoke(Trigger::Application, methods::BALANCE_OF, &args, &tx)
                    .unwrap();
                assert_eq!(outcome.value, ReturnValue::Uint(model.balance(account)));
            }
        }

        assert_eq!(model.total(), initial_total, "supply drifted");
    }

    #[test]
    fn test_insolvent_debit_never_mutates() {
        init_tracing();
        let config = test_config();
        let owner = identities::owner();
        let (service, _, witness, _) = create_test_service(config);
        witness.grant(owner);
        witness.grant(identities::alice());

        service
            .invoke(
                Trigger::Application,
                methods::INITIALIZE,
                &[],
                &TransactionView::empty(),
            )
            .unwrap();

        let tx = TransactionView::empty();

        // Alice holds nothing; any positive debit must refuse and leave both
        // balances untouched.
        let args = transfer_args(&identities::alice(), &owner, 1);
        let outcome = service
            .invoke(Trigger::Application, methods::TRANSFER, &args, &tx)
            .unwrap();
        assert_eq!(outcome.value, ReturnValue::Bool(false));

        let args = [Value::Bytes(owner.as_bytes().to_vec())];
        let outcome = service
            .invoke(Trigger::Application, methods::BALANCE_OF, &args, &tx)
            .unwrap();
        assert_eq!(outcome.value, ReturnValue::Uint(U256::from(100_000u64)));

        let args = [Value::Bytes(identities::alice().as_bytes().to_vec())];
        let outcome = service
            .invoke(Trigger::Application, methods::BALANCE_OF, &args, &tx)
            .unwrap();
        assert_eq!(outcome.value, ReturnValue::Uint(U256::zero()));
    }

    #[test]
    fn test_minting_grows_supply_by_exact_quotient() {
        init_tracing();
        let config = test_config();
        let mut rng = seeded_rng(42);
        let (service, _, _, _) = create_test_service(config.clone());

        let mut expected_total = U256::zero();
        for _ in 0..50 {
            let sender = random_account(&mut rng);
            let utility = rng.gen_range(0..1_000u64);
            let tx = crate::fixtures::contribution_tx(&config, sender, utility, 0);

            service
                .invoke(Trigger::Application, methods::MINT_TOKENS, &[], &tx)
                .unwrap();
            expected_total += U256::from(utility / 2);

            let args = [Value::Bytes(sender.as_bytes().to_vec())];
            let outcome = service
                .invoke(
                    Trigger::Application,
                    methods::BALANCE_OF,
                    &args,
                    &TransactionView::empty(),
                )
                .unwrap();
            assert_eq!(outcome.value, ReturnValue::Uint(U256::from(utility / 2)));
        }

        // Sum over fresh accounts equals the sum of the per-mint quotients.
        assert!(expected_total <= U256::from(50u64 * 500));
    }
}
