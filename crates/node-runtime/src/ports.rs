//! # Outbound Ports
//!
//! How a node talks to its peers. The engine only needs three things from
//! the network: push a sealed block, push a pending transaction, and pull
//! every peer's chain for consensus.

use async_trait::async_trait;
use shared_types::{Block, ChainSnapshot, Transaction};
use thiserror::Error;

/// Transport errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// A peer could not be reached.
    #[error("Peer {peer} unreachable: {reason}")]
    Unreachable { peer: String, reason: String },
}

/// Peer-to-peer transport used by [`crate::Node`].
///
/// Broadcasts are best effort: a peer that rejects a block or transaction
/// is not an error for the sender. Errors are reserved for peers that could
/// not be reached at all.
#[async_trait]
pub trait PeerTransport: Send + Sync {
    /// Deliver a freshly sealed block to every peer.
    async fn broadcast_block(&self, block: &Block) -> Result<(), TransportError>;

    /// Deliver a pending transaction to every peer.
    async fn broadcast_transaction(&self, transaction: &Transaction) -> Result<(), TransportError>;

    /// Collect the chain and pending pool reported by every peer.
    async fn fetch_snapshots(&self) -> Result<Vec<ChainSnapshot>, TransportError>;
}
