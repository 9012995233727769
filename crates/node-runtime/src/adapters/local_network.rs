//! # In-Process Network
//!
//! Connects nodes running in the same process by handing each node the
//! shared ledgers of its peers. Delivery is a direct call into the peer's
//! ledger under its async lock.
//!
//! ## Registration
//!
//! Peers are keyed by ledger identity: registering the same ledger twice,
//! under any name, is a no-op. A peer can be marked unreachable to simulate
//! a partition.

use crate::container::SharedLedger;
use crate::ports::{PeerTransport, TransportError};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{Block, ChainSnapshot, Transaction};
use std::sync::Arc;

#[derive(Clone)]
struct LocalPeer {
    name: String,
    ledger: SharedLedger,
    reachable: bool,
}

/// In-memory peer registry and transport.
#[derive(Default)]
pub struct LocalNetwork {
    peers: RwLock<Vec<LocalPeer>>,
}

impl LocalNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a peer. Returns `false` if its ledger is already registered.
    pub fn connect(&self, name: impl Into<String>, ledger: SharedLedger) -> bool {
        let mut peers = self.peers.write();
        if peers.iter().any(|p| Arc::ptr_eq(&p.ledger, &ledger)) {
            return false;
        }
        let name = name.into();
        tracing::debug!(peer = %name, "Peer registered");
        peers.push(LocalPeer {
            name,
            ledger,
            reachable: true,
        });
        true
    }

    /// Mark a peer reachable or not. Returns `false` for an unknown name.
    pub fn set_reachable(&self, name: &str, reachable: bool) -> bool {
        let mut peers = self.peers.write();
        match peers.iter_mut().find(|p| p.name == name) {
            Some(peer) => {
                peer.reachable = reachable;
                true
            }
            None => false,
        }
    }

    /// Names of registered peers, in registration order.
    pub fn peer_names(&self) -> Vec<String> {
        self.peers.read().iter().map(|p| p.name.clone()).collect()
    }

    pub fn peer_count(&self) -> usize {
        self.peers.read().len()
    }

    /// Snapshot of the registry. The lock is not held across awaits.
    fn peers(&self) -> Vec<LocalPeer> {
        self.peers.read().clone()
    }
}

fn unreachable(peer: &LocalPeer) -> TransportError {
    TransportError::Unreachable {
        peer: peer.name.clone(),
        reason: "peer marked unreachable".to_string(),
    }
}

#[async_trait]
impl PeerTransport for LocalNetwork {
    /// Delivers to every reachable peer, then reports the first unreachable
    /// one if any.
    async fn broadcast_block(&self, block: &Block) -> Result<(), TransportError> {
        let mut failure = None;

        for peer in self.peers() {
            if !peer.reachable {
                failure.get_or_insert_with(|| unreachable(&peer));
                continue;
            }
            let result = peer.ledger.lock().await.accept_block(block.clone());
            if let Err(e) = result {
                tracing::debug!(peer = %peer.name, error = %e, "Peer declined block");
            }
        }

        failure.map_or(Ok(()), Err)
    }

    async fn broadcast_transaction(&self, transaction: &Transaction) -> Result<(), TransportError> {
        let mut failure = None;

        for peer in self.peers() {
            if !peer.reachable {
                failure.get_or_insert_with(|| unreachable(&peer));
                continue;
            }
            let result = peer
                .ledger
                .lock()
                .await
                .add_to_pending_pool(transaction.clone());
            if let Err(e) = result {
                tracing::debug!(peer = %peer.name, error = %e, "Peer declined transaction");
            }
        }

        failure.map_or(Ok(()), Err)
    }

    /// All-or-nothing: a single unreachable peer fails the whole fetch.
    async fn fetch_snapshots(&self) -> Result<Vec<ChainSnapshot>, TransportError> {
        let peers = self.peers();
        if let Some(peer) = peers.iter().find(|p| !p.reachable) {
            return Err(unreachable(peer));
        }

        let mut snapshots = Vec::with_capacity(peers.len());
        for peer in peers {
            snapshots.push(peer.ledger.lock().await.snapshot());
        }
        Ok(snapshots)
    }
}
