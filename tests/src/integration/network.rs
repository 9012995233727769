//! # Multi-Node Flows
//!
//! Replication over the in-process network:
//!
//! 1. **Broadcast**: a submitted transaction reaches every peer's pool
//! 2. **Mining**: a mined block is appended by every peer, then the reward
//!    is pooled everywhere
//! 3. **Catch-up**: a late node adopts the network's chain via consensus
//! 4. **Divergence**: two isolated miners converge on the longer chain

#[cfg(test)]
mod tests {
    use crate::fixtures::{easy_node_config, ledger_of_len};
    use node_runtime::adapters::LocalNetwork;
    use node_runtime::{build_local_mesh, Node, NodeError};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[tokio::test]
    async fn test_transaction_and_block_replicate() {
        let nodes = build_local_mesh(3, &easy_node_config("origin")).unwrap();
        let (origin, _) = &nodes[0];

        let (tx, next_number) = origin.submit_transaction(50, "addrA", "addrB").await.unwrap();
        assert_eq!(next_number, 2);
        for (peer, _) in &nodes {
            assert_eq!(peer.snapshot().await.pending_transactions, vec![tx.clone()]);
        }

        let block = origin.mine().await.unwrap();

        for (peer, _) in &nodes {
            let snapshot = peer.snapshot().await;
            assert_eq!(snapshot.len(), 2);
            assert_eq!(snapshot.chain[1], block);
            assert_eq!(snapshot.pending_transactions.len(), 1);
            assert!(snapshot.pending_transactions[0].is_reward());
            assert_eq!(peer.address_summary("addrB").await.balance, 50);
        }
    }

    #[tokio::test]
    async fn test_mining_on_different_nodes_keeps_mesh_in_sync() {
        let nodes = build_local_mesh(3, &easy_node_config("origin")).unwrap();

        for (node, _) in &nodes {
            node.mine().await.unwrap();
        }

        let reference = nodes[0].0.snapshot().await;
        assert_eq!(reference.len(), 4);
        for (node, _) in &nodes[1..] {
            assert_eq!(node.snapshot().await.chain, reference.chain);
        }

        // Each reward except the last has been sealed.
        let first_miner = nodes[0].0.address().to_string();
        assert_eq!(nodes[2].0.address_summary(&first_miner).await.balance, 322);
    }

    #[tokio::test]
    async fn test_late_node_catches_up() {
        let nodes = build_local_mesh(2, &easy_node_config("origin")).unwrap();
        let (origin, _) = &nodes[0];
        let (tx, _) = origin.submit_transaction(10, "addrA", "addrB").await.unwrap();
        origin.mine().await.unwrap();
        origin.mine().await.unwrap();

        let network = Arc::new(LocalNetwork::new());
        network.connect("origin", origin.ledger());
        network.connect("peer", nodes[1].0.ledger());
        let late = Node::new(easy_node_config("late"), network).unwrap();

        assert!(late.run_consensus().await.unwrap());
        assert_eq!(late.snapshot().await, origin.snapshot().await);
        assert!(late.transaction(&tx.transaction_id).await.is_some());
    }

    #[tokio::test]
    async fn test_isolated_miners_converge_on_longer_chain() {
        let left_ledger = Arc::new(Mutex::new(ledger_of_len(1, "left")));
        let right_ledger = Arc::new(Mutex::new(ledger_of_len(1, "right")));

        let left_net = Arc::new(LocalNetwork::new());
        let right_net = Arc::new(LocalNetwork::new());
        left_net.connect("right", Arc::clone(&right_ledger));
        right_net.connect("left", Arc::clone(&left_ledger));
        left_net.set_reachable("right", false);
        right_net.set_reachable("left", false);

        let left = Node::with_ledger(
            easy_node_config("left"),
            left_ledger,
            Arc::clone(&left_net) as Arc<dyn node_runtime::PeerTransport>,
        )
        .unwrap();
        let right = Node::with_ledger(
            easy_node_config("right"),
            right_ledger,
            Arc::clone(&right_net) as Arc<dyn node_runtime::PeerTransport>,
        )
        .unwrap();

        left.mine().await.unwrap();
        right.mine().await.unwrap();
        right.mine().await.unwrap();

        // Partitioned: consensus cannot run.
        assert!(matches!(
            left.run_consensus().await,
            Err(NodeError::Transport(_))
        ));

        left_net.set_reachable("right", true);
        right_net.set_reachable("left", true);

        assert!(left.run_consensus().await.unwrap());
        assert!(!right.run_consensus().await.unwrap());
        assert_eq!(left.snapshot().await.chain, right.snapshot().await.chain);
        assert_eq!(left.snapshot().await.len(), 3);
    }

    #[tokio::test]
    async fn test_concurrent_mining_serializes_on_ledger() {
        let node = Arc::new(
            Node::new(
                easy_node_config("solo"),
                Arc::new(node_runtime::adapters::NullTransport),
            )
            .unwrap(),
        );

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let node = Arc::clone(&node);
                tokio::spawn(async move { node.mine().await })
            })
            .collect();

        let mut numbers = Vec::new();
        for handle in handles {
            numbers.push(handle.await.unwrap().unwrap().number);
        }
        numbers.sort_unstable();

        assert_eq!(numbers, vec![2, 3, 4, 5]);
        let snapshot = node.snapshot().await;
        for pair in snapshot.chain.windows(2) {
            assert_eq!(pair[1].previous_block_hash, pair[0].hash);
        }
    }
}
