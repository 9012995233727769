//! Transport for a node without peers.

use crate::ports::{PeerTransport, TransportError};
use async_trait::async_trait;
use shared_types::{Block, ChainSnapshot, Transaction};

/// A transport with no peers: broadcasts go nowhere and consensus sees
/// no competing chains.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTransport;

#[async_trait]
impl PeerTransport for NullTransport {
    async fn broadcast_block(&self, _block: &Block) -> Result<(), TransportError> {
        Ok(())
    }

    async fn broadcast_transaction(&self, _transaction: &Transaction) -> Result<(), TransportError> {
        Ok(())
    }

    async fn fetch_snapshots(&self) -> Result<Vec<ChainSnapshot>, TransportError> {
        Ok(Vec::new())
    }
}
