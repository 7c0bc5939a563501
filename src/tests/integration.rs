// Integration Tests - End-to-end relay scenarios
// Mirrors the behaviour an external caller observes: signer accounts,
// a funded producer, and balance deltas across the two operations.

#[cfg(test)]
mod scenario_tests {
    use crate::contracts::gasless::GaslessRelay;
    use crate::execution::Invocation;
    use crate::genesis::GenesisConfig;
    use crate::types::{AccountId, BlockContext, COIN, MILLICOIN};
    use ed25519_dalek::SigningKey;
    use rand::rngs::OsRng;

    // ===== HELPER FUNCTIONS =====

    /// Fresh account backed by a real keypair, like a harness signer
    fn signer() -> AccountId {
        let signing_key = SigningKey::generate(&mut OsRng);
        AccountId::from_public_key(&signing_key.verifying_key())
    }

    fn context_for(producer: AccountId) -> BlockContext {
        BlockContext::new(1, 1_700_000_000, producer)
    }

    // ===== SCENARIO 1: MINER SUBSIDIZES USER =====

    #[test]
    fn test_miner_can_subsidize_user() {
        let miner = signer();
        let user = signer();
        let mut ledger = GenesisConfig::dev(miner).build().unwrap();
        let relay = GaslessRelay::default();

        let subsidy = 100 * MILLICOIN; // 0.1 COIN
        let user_before = ledger.balance(&user);

        relay
            .subsidize_gas(
                &mut ledger,
                &context_for(miner),
                &Invocation::new(miner, subsidy),
                user,
                subsidy,
            )
            .unwrap();

        assert_eq!(ledger.balance(&user) - user_before, subsidy);
        assert_eq!(ledger.balance(&miner), 10_000 * COIN - subsidy);
    }

    // ===== SCENARIO 2: NON-MINER CANNOT SUBSIDIZE =====

    #[test]
    fn test_non_miner_cannot_subsidize_user() {
        let miner = signer();
        let user = signer();
        let alien = signer();
        let mut ledger = GenesisConfig::dev(miner)
            .with_account(alien, 10 * COIN)
            .build()
            .unwrap();
        let relay = GaslessRelay::default();

        let subsidy = 100 * MILLICOIN;
        let err = relay
            .subsidize_gas(
                &mut ledger,
                &context_for(miner),
                &Invocation::new(alien, subsidy),
                user,
                subsidy,
            )
            .unwrap_err();

        assert_eq!(err.to_string(), "You're not a miner of the block");
        assert_eq!(ledger.balance(&user), 0);
        assert_eq!(ledger.balance(&alien), 10 * COIN);
        assert_eq!(ledger.balance(&miner), 10_000 * COIN);
    }

    // ===== SCENARIO 3: USER REFUNDS MINER =====

    #[test]
    fn test_user_can_refund_miner() {
        let miner = signer();
        let user = signer();
        let mut ledger = GenesisConfig::dev(miner)
            .with_account(user, 100 * COIN)
            .build()
            .unwrap();
        let relay = GaslessRelay::default();

        let refund = 10 * COIN;
        let miner_before = ledger.balance(&miner);
        let user_before = ledger.balance(&user);

        relay
            .refund_to_miner(
                &mut ledger,
                &context_for(miner),
                &Invocation::new(user, refund),
                AccountId::ZERO,
                refund,
            )
            .unwrap();

        assert_eq!(ledger.balance(&miner) - miner_before, refund);
        assert_eq!(user_before - ledger.balance(&user), refund);
    }

    // ===== FULL ROUND TRIP =====

    #[test]
    fn test_subsidize_then_refund_round_trip() {
        let miner = signer();
        let user = signer();
        let mut ledger = GenesisConfig::dev(miner).build().unwrap();
        let relay = GaslessRelay::default();
        let ctx = context_for(miner);

        let amount = 5 * COIN;
        relay
            .subsidize_gas(&mut ledger, &ctx, &Invocation::new(miner, amount), user, amount)
            .unwrap();
        relay
            .refund_to_miner(
                &mut ledger,
                &ctx,
                &Invocation::new(user, amount),
                AccountId::ZERO,
                amount,
            )
            .unwrap();

        // Everything ends where it started
        assert_eq!(ledger.balance(&miner), 10_000 * COIN);
        assert_eq!(ledger.balance(&user), 0);
        assert_eq!(ledger.total_issuance(), 10_000 * COIN);
    }

    // ===== CONTEXT IS PER-INVOCATION =====

    #[test]
    fn test_producer_change_between_blocks() {
        let old_miner = signer();
        let new_miner = signer();
        let user = signer();
        let mut ledger = GenesisConfig::dev(old_miner)
            .with_account(user, 100 * COIN)
            .build()
            .unwrap();
        let relay = GaslessRelay::default();

        // Block 1: old_miner is the producer and may subsidize
        let block1 = BlockContext::new(1, 1_700_000_000, old_miner);
        relay
            .subsidize_gas(
                &mut ledger,
                &block1,
                &Invocation::new(old_miner, COIN),
                user,
                COIN,
            )
            .unwrap();

        // Block 2: the producer changed; old_miner is rejected and the
        // refund routes to the new producer
        let block2 = BlockContext::new(2, 1_700_000_006, new_miner);
        let err = relay
            .subsidize_gas(
                &mut ledger,
                &block2,
                &Invocation::new(old_miner, COIN),
                user,
                COIN,
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "You're not a miner of the block");

        relay
            .refund_to_miner(
                &mut ledger,
                &block2,
                &Invocation::new(user, COIN),
                AccountId::ZERO,
                COIN,
            )
            .unwrap();
        assert_eq!(ledger.balance(&new_miner), COIN);
        assert_eq!(ledger.balance(&old_miner), 10_000 * COIN - COIN);
    }
}
