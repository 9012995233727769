//! # Mini-Ledger Node Runtime
//!
//! Demo entry point: starts a small in-process network, moves value between
//! two addresses, mines, and lets a late-joining node catch up through
//! consensus.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (`ML_LOG_LEVEL`, `ML_JSON_LOGS`)
//! 2. Load node configuration from the environment
//! 3. Start `1 + ML_DEMO_PEERS` fully connected nodes
//! 4. Submit a transaction and mine it on the first node
//! 5. Start a new node connected only to the first and run consensus
//! 6. Report chain state and balances

use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use tracing::info;

use ml_telemetry::{init_telemetry, TelemetryConfig};
use node_runtime::adapters::LocalNetwork;
use node_runtime::{build_local_mesh, Node, NodeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env()).context("Failed to initialize telemetry")?;

    let config = NodeConfig::from_env().context("Invalid node configuration")?;

    info!("===========================================");
    info!("  Mini-Ledger Node Runtime");
    info!("  Node address: {}", config.node_address);
    info!("  Difficulty prefix: {}", config.pow.difficulty_prefix);
    info!("  Peers: {}", config.demo_peers);
    info!("===========================================");

    let nodes = build_local_mesh(config.demo_peers + 1, &config)
        .context("Failed to start local network")?;
    let (origin, _) = nodes.first().context("Local network has no nodes")?;

    let (tx, expected_block) = origin
        .submit_transaction(50, "alice", "bob")
        .await
        .context("Failed to submit transaction")?;
    info!(
        transaction_id = %tx.transaction_id,
        expected_block,
        "Transaction submitted"
    );

    let block = origin.mine().await.context("Failed to mine block")?;
    info!(number = block.number, hash = %block.hash, nonce = block.nonce, "Block mined");

    for (peer, _) in &nodes[1..] {
        let snapshot = peer.snapshot().await;
        ensure!(
            snapshot.chain.last() == Some(&block),
            "peer {} did not receive block {}",
            peer.address(),
            block.number
        );
    }

    let network = Arc::new(LocalNetwork::new());
    network.connect("origin", origin.ledger());
    let joiner = Node::new(
        NodeConfig {
            node_address: format!("{}-joiner", config.node_address),
            ..config.clone()
        },
        network,
    )
    .context("Failed to start joining node")?;

    let replaced = joiner.run_consensus().await.context("Consensus failed")?;
    info!(replaced, "Late-joining node ran consensus");

    let snapshot = joiner.snapshot().await;
    info!(
        chain_len = snapshot.len(),
        pending = snapshot.pending_transactions.len(),
        "Joined chain state"
    );

    for address in ["alice", "bob", origin.address()] {
        let summary = serde_json::to_string(&joiner.address_summary(address).await)?;
        info!(address, %summary, "Address summary");
    }

    Ok(())
}
