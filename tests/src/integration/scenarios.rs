//! # Single-Ledger Scenarios
//!
//! End-to-end flows over one ledger, using the engine crates directly:
//!
//! 1. **Genesis**: a fresh ledger is valid and ends at the fixed genesis block
//! 2. **Seal**: a pooled transaction is sealed into the next block
//! 3. **Consensus**: a longer valid peer chain replaces the local one
//! 4. **Rejection**: a longer tampered chain is ignored
//! 5. **Queries**: balances and history are derived from sealed blocks

#[cfg(test)]
mod tests {
    use crate::fixtures::{
        easy_miner, easy_resolver, easy_validator, ledger_of_len, mine,
    };
    use ml_01_proof_of_work::hash_block;
    use ml_02_ledger::Ledger;
    use ml_03_consensus::{ChainValidator, ValidationError, ValidationPolicy};
    use ml_04_query_index::QueryIndex;
    use proptest::prelude::*;
    use shared_types::{ChainSnapshot, GENESIS_HASH};

    // =========================================================================
    // GENESIS AND SEALING
    // =========================================================================

    #[test]
    fn test_genesis_only_chain() {
        let ledger = Ledger::new();
        let last = ledger.last_block().unwrap();

        assert_eq!(last.number, 1);
        assert_eq!(last.hash, GENESIS_HASH);
        assert!(ChainValidator::default().is_valid(ledger.chain()));
    }

    #[test]
    fn test_pooled_transaction_is_sealed() {
        let mut ledger = Ledger::new();
        let tx = Ledger::create_transaction(50, "addrA", "addrB");
        ledger.add_to_pending_pool(tx.clone()).unwrap();

        let block = mine(&mut ledger, &easy_miner());

        assert_eq!(block.transactions, vec![tx]);
        assert!(ledger.pending_transactions().is_empty());
        assert_eq!(
            hash_block(&block.previous_block_hash, &block.content(), block.nonce).unwrap(),
            block.hash
        );
        assert!(easy_validator(ValidationPolicy::Strict).is_valid(ledger.chain()));
    }

    #[test]
    fn test_transactions_sealed_in_arrival_order() {
        let mut ledger = Ledger::new();
        let txs: Vec<_> = (0..5)
            .map(|i| Ledger::create_transaction(i, "addrA", "addrB"))
            .collect();
        for tx in &txs {
            ledger.add_to_pending_pool(tx.clone()).unwrap();
        }

        let block = mine(&mut ledger, &easy_miner());
        assert_eq!(block.transactions, txs);
    }

    // =========================================================================
    // CONSENSUS
    // =========================================================================

    #[test]
    fn test_longer_valid_peer_chain_is_adopted() {
        let local = ledger_of_len(3, "local");
        let peer = ledger_of_len(5, "peer");

        let resolution = easy_resolver().resolve(
            local.chain().to_vec(),
            local.pending_transactions().to_vec(),
            vec![peer.snapshot()],
        );

        assert!(resolution.replaced);
        assert_eq!(resolution.chain, peer.chain());
    }

    #[test]
    fn test_longer_invalid_peer_chain_is_ignored() {
        let local = ledger_of_len(3, "local");
        let mut peer = ledger_of_len(5, "peer").snapshot();
        peer.chain[2].previous_block_hash = "mismatched".to_string();

        let resolution = easy_resolver().resolve(
            local.chain().to_vec(),
            local.pending_transactions().to_vec(),
            vec![peer],
        );

        assert!(!resolution.replaced);
        assert_eq!(resolution.chain, local.chain());
    }

    #[test]
    fn test_resolution_never_shortens() {
        let local = ledger_of_len(4, "local");
        let peers = vec![
            ChainSnapshot::default(),
            ledger_of_len(1, "a").snapshot(),
            ledger_of_len(3, "b").snapshot(),
            ledger_of_len(4, "c").snapshot(),
        ];

        let resolution = easy_resolver().resolve(local.chain().to_vec(), vec![], peers);
        assert!(!resolution.replaced);
        assert_eq!(resolution.chain.len(), 4);
    }

    #[test]
    fn test_chain_from_peer_json_validates() {
        let peer = ledger_of_len(3, "peer").snapshot();
        let payload = serde_json::to_string(&peer).unwrap();
        let decoded: ChainSnapshot = serde_json::from_str(&payload).unwrap();

        assert_eq!(
            easy_validator(ValidationPolicy::Strict).validate(&decoded.chain),
            Ok(())
        );
    }

    #[test]
    fn test_stored_hash_tamper_strict_only() {
        let mut chain = ledger_of_len(2, "x").chain().to_vec();
        chain[1].hash = format!("0{}", "a".repeat(63));

        assert_eq!(
            easy_validator(ValidationPolicy::Strict).validate(&chain),
            Err(ValidationError::HashMismatch { number: 2 })
        );
        assert!(easy_validator(ValidationPolicy::Legacy).is_valid(&chain));
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    #[test]
    fn test_address_summary_over_sealed_blocks() {
        let miner = easy_miner();
        let mut ledger = Ledger::new();

        let credit_50 = Ledger::create_transaction(50, "addrA", "addrB");
        ledger.add_to_pending_pool(credit_50.clone()).unwrap();
        mine(&mut ledger, &miner);

        let credit_30 = Ledger::create_transaction(30, "addrC", "addrB");
        let debit_20 = Ledger::create_transaction(20, "addrB", "addrD");
        ledger.add_to_pending_pool(credit_30.clone()).unwrap();
        ledger.add_to_pending_pool(debit_20.clone()).unwrap();
        mine(&mut ledger, &miner);

        // Still pending: must not count.
        ledger
            .add_to_pending_pool(Ledger::create_transaction(1000, "addrX", "addrB"))
            .unwrap();

        let summary = QueryIndex::new(ledger.chain()).address_summary("addrB");
        assert_eq!(summary.balance, 60);
        assert_eq!(summary.history, vec![credit_50, credit_30, debit_20]);
    }

    #[test]
    fn test_transaction_lookup_finds_block() {
        let miner = easy_miner();
        let mut ledger = Ledger::new();
        mine(&mut ledger, &miner);
        let tx = Ledger::create_transaction(7, "addrA", "addrB");
        ledger.add_to_pending_pool(tx.clone()).unwrap();
        let block = mine(&mut ledger, &miner);

        let index = QueryIndex::new(ledger.chain());
        let found = index.find_transaction(&tx.transaction_id).unwrap();
        assert_eq!(found.block.hash, block.hash);
        assert_eq!(index.find_block_by_hash(&block.hash), Some(&block));
    }

    // =========================================================================
    // PROPERTIES
    // =========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_any_field_tamper_is_detected(
            block_idx in 1usize..4,
            field in 0u8..4,
        ) {
            let mut chain = ledger_of_len(4, "prop").chain().to_vec();
            let block = &mut chain[block_idx];
            match field {
                0 => block.transactions[0].amount += 1,
                1 => block.transactions[0].sender.push('!'),
                2 => block.transactions[0].recipient.push('!'),
                _ => block.nonce += 1,
            }

            prop_assert!(!easy_validator(ValidationPolicy::Strict).is_valid(&chain));
        }

        #[test]
        fn prop_appended_chains_are_valid(len in 1usize..6) {
            let ledger = ledger_of_len(len, "prop");
            prop_assert!(easy_validator(ValidationPolicy::Strict).is_valid(ledger.chain()));
            prop_assert_eq!(ledger.len(), len);
        }
    }
}
