//! # Node Container
//!
//! Holds one node's engine instances and its view of the network.
//!
//! ## Locking
//!
//! Each node owns a [`SharedLedger`]. Every read and write goes through its
//! async mutex, so a seal and the append that follows it are atomic with
//! respect to incoming blocks, transactions and chain replacement. The lock
//! is never held while talking to peers.

pub mod config;

pub use config::{ConfigError, NodeConfig};

use crate::adapters::LocalNetwork;
use crate::error::{NodeError, NodeResult};
use crate::ports::PeerTransport;
use ml_01_proof_of_work::ProofOfWork;
use ml_02_ledger::Ledger;
use ml_03_consensus::{ChainValidator, ConsensusResolver};
use ml_04_query_index::{AddressSummary, QueryIndex};
use ml_telemetry::{log_block_event, log_tx_event};
use shared_types::{new_transaction_id, Block, ChainSnapshot, Transaction, SYSTEM_SENDER};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Ledger state shared between a node and the peers that deliver to it.
pub type SharedLedger = Arc<Mutex<Ledger>>;

/// A single ledger replica.
pub struct Node {
    config: NodeConfig,
    ledger: SharedLedger,
    miner: ProofOfWork,
    resolver: ConsensusResolver,
    transport: Arc<dyn PeerTransport>,
}

impl Node {
    /// Create a node with a fresh genesis-only ledger.
    pub fn new(config: NodeConfig, transport: Arc<dyn PeerTransport>) -> NodeResult<Self> {
        Self::with_ledger(config, Arc::new(Mutex::new(Ledger::new())), transport)
    }

    /// Create a node around an existing shared ledger.
    pub fn with_ledger(
        config: NodeConfig,
        ledger: SharedLedger,
        transport: Arc<dyn PeerTransport>,
    ) -> NodeResult<Self> {
        config.validate()?;
        let miner = ProofOfWork::from_config(&config.pow)?;
        let validator = ChainValidator::from_config(&config.validator, miner.policy());

        tracing::info!(
            node_address = %config.node_address,
            difficulty_prefix = %config.pow.difficulty_prefix,
            policy = ?config.validator.policy,
            "Node created"
        );

        Ok(Self {
            config,
            ledger,
            miner,
            resolver: ConsensusResolver::new(validator),
            transport,
        })
    }

    /// Address mining rewards are paid to.
    pub fn address(&self) -> &str {
        &self.config.node_address
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Handle to this node's ledger, for wiring peers.
    pub fn ledger(&self) -> SharedLedger {
        Arc::clone(&self.ledger)
    }

    /// Create a transaction, pool it locally and broadcast it.
    ///
    /// Returns the transaction and the block number it is expected to land
    /// in. The number is advisory.
    #[tracing::instrument(skip(self, sender, recipient))]
    pub async fn submit_transaction(
        &self,
        amount: u64,
        sender: impl Into<String> + Send,
        recipient: impl Into<String> + Send,
    ) -> NodeResult<(Transaction, u64)> {
        let tx = Ledger::create_transaction(amount, sender, recipient);
        let next_number = self.ledger.lock().await.add_to_pending_pool(tx.clone())?;
        log_tx_event!(info, "Transaction submitted", tx, next_number);

        self.broadcast_transaction(&tx).await;
        Ok((tx, next_number))
    }

    /// Pool a transaction broadcast by a peer. Not re-broadcast.
    pub async fn receive_transaction(&self, tx: Transaction) -> NodeResult<u64> {
        let next_number = self.ledger.lock().await.add_to_pending_pool(tx.clone())?;
        log_tx_event!(debug, "Transaction received", tx, next_number);
        Ok(next_number)
    }

    /// Seal the pending pool into a new block, broadcast it, then pool and
    /// broadcast this node's mining reward.
    ///
    /// The reward lands in the block after the one just mined.
    #[tracing::instrument(skip(self), fields(node_address = %self.config.node_address))]
    pub async fn mine(&self) -> NodeResult<Block> {
        let guard = Arc::clone(&self.ledger).lock_owned().await;
        let miner = self.miner.clone();

        let block = tokio::task::spawn_blocking(move || -> NodeResult<Block> {
            let mut ledger = guard;
            let previous_hash = ledger.last_block()?.hash.clone();
            let content = ledger.next_block_content()?;
            let seal = miner.seal(&previous_hash, &content)?;
            Ok(ledger.append_block(seal.nonce, previous_hash, seal.hash)?)
        })
        .await
        .map_err(|e| NodeError::MiningTask(e.to_string()))??;

        log_block_event!(info, "Block mined", block);

        if let Err(e) = self.transport.broadcast_block(&block).await {
            log_block_event!(warn, "Block broadcast incomplete", block, error = %e);
        }

        let reward = Ledger::create_transaction(
            self.config.mining_reward,
            SYSTEM_SENDER,
            self.config.node_address.clone(),
        );
        self.ledger.lock().await.add_to_pending_pool(reward.clone())?;
        log_tx_event!(info, "Mining reward pooled", reward);
        self.broadcast_transaction(&reward).await;

        Ok(block)
    }

    /// Append a block sealed by a peer if it extends the local tip.
    pub async fn receive_block(&self, block: Block) -> NodeResult<Block> {
        let accepted = self.ledger.lock().await.accept_block(block)?;
        log_block_event!(debug, "Block received", accepted);
        Ok(accepted)
    }

    /// Fetch every peer's chain and adopt the longest valid one if it is
    /// longer than the local chain. Returns whether the chain was replaced.
    #[tracing::instrument(skip(self), fields(node_address = %self.config.node_address))]
    pub async fn run_consensus(&self) -> NodeResult<bool> {
        let snapshots = self.transport.fetch_snapshots().await?;
        let mut ledger = self.ledger.lock().await;
        let replaced = self.resolver.apply(&mut ledger, snapshots);
        tracing::info!(replaced, chain_len = ledger.len(), "Consensus round complete");
        Ok(replaced)
    }

    /// Full chain and pending pool.
    pub async fn snapshot(&self) -> ChainSnapshot {
        self.ledger.lock().await.snapshot()
    }

    pub async fn block_by_hash(&self, hash: &str) -> Option<Block> {
        let ledger = self.ledger.lock().await;
        QueryIndex::new(ledger.chain())
            .find_block_by_hash(hash)
            .cloned()
    }

    /// A sealed transaction and the block that embeds it.
    pub async fn transaction(&self, transaction_id: &str) -> Option<(Transaction, Block)> {
        let ledger = self.ledger.lock().await;
        QueryIndex::new(ledger.chain())
            .find_transaction(transaction_id)
            .map(|found| (found.transaction.clone(), found.block.clone()))
    }

    /// History and balance of `address` over sealed blocks.
    pub async fn address_summary(&self, address: &str) -> AddressSummary {
        let ledger = self.ledger.lock().await;
        QueryIndex::new(ledger.chain()).address_summary(address)
    }

    async fn broadcast_transaction(&self, tx: &Transaction) {
        if let Err(e) = self.transport.broadcast_transaction(tx).await {
            log_tx_event!(warn, "Transaction broadcast incomplete", tx, error = %e);
        }
    }
}

/// Start `count` fully connected nodes sharing `base`'s settings.
///
/// The first node keeps `base.node_address`; the others get fresh addresses.
/// Returns the nodes and their networks, index-aligned.
pub fn build_local_mesh(
    count: usize,
    base: &NodeConfig,
) -> NodeResult<Vec<(Node, Arc<LocalNetwork>)>> {
    let ledgers: Vec<SharedLedger> = (0..count)
        .map(|_| Arc::new(Mutex::new(Ledger::new())))
        .collect();

    let mut nodes = Vec::with_capacity(count);
    for (i, ledger) in ledgers.iter().enumerate() {
        let network = Arc::new(LocalNetwork::new());
        for (j, peer) in ledgers.iter().enumerate() {
            if i != j {
                network.connect(format!("node-{j}"), Arc::clone(peer));
            }
        }

        let config = if i == 0 {
            base.clone()
        } else {
            NodeConfig {
                node_address: new_transaction_id(),
                ..base.clone()
            }
        };

        let transport: Arc<dyn PeerTransport> = Arc::<LocalNetwork>::clone(&network);
        let node = Node::with_ledger(config, Arc::clone(ledger), transport)?;
        nodes.push((node, network));
    }

    tracing::info!(count, "Local mesh started");
    Ok(nodes)
}
