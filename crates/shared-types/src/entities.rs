//! # Core Domain Entities
//!
//! Defines the ledger entities exchanged between nodes.
//!
//! ## Clusters
//!
//! - **Chain**: `Block`, `BlockContent`, `Transaction`
//! - **Replication**: `ChainSnapshot`
//!
//! All types serialize with camelCase field names. Field declaration order is
//! significant: `BlockContent` and `Transaction` are hashed through their JSON
//! encoding, and `serde_json` writes fields in declaration order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// CONSTANTS
// =============================================================================

/// A block digest rendered as a string.
///
/// Sealed blocks carry 64 lowercase hex characters; the genesis block carries
/// the sentinel [`GENESIS_HASH`].
pub type BlockHash = String;

/// Sentinel hash of the genesis block.
pub const GENESIS_HASH: &str = "Hello world!";

/// Fixed nonce of the genesis block (exempt from proof-of-work).
pub const GENESIS_NONCE: u64 = 1337;

/// Number of the genesis block.
pub const GENESIS_NUMBER: u64 = 1;

/// Timestamp of the genesis block. Fixed so every replica starts from an
/// identical first block.
pub const GENESIS_TIMESTAMP: i64 = 0;

/// Reserved sender address for system-issued (reward) transactions.
pub const SYSTEM_SENDER: &str = "00";

// =============================================================================
// CLUSTER A: THE CHAIN
// =============================================================================

/// A value transfer between two addresses.
///
/// Immutable once created. There is no signature: the ledger does not
/// authorize spends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Amount transferred in base units.
    pub amount: u64,
    /// Sender address (`"00"` for rewards).
    pub sender: String,
    /// Recipient address.
    pub recipient: String,
    /// Globally unique identifier (32 hex characters).
    pub transaction_id: String,
}

impl Transaction {
    /// Create a transaction with a freshly generated id.
    pub fn new(amount: u64, sender: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            amount,
            sender: sender.into(),
            recipient: recipient.into(),
            transaction_id: new_transaction_id(),
        }
    }

    /// Whether this transaction was issued by the system rather than a user.
    pub fn is_reward(&self) -> bool {
        self.sender == SYSTEM_SENDER
    }

    /// Whether `address` is the sender or the recipient.
    pub fn involves(&self, address: &str) -> bool {
        self.sender == address || self.recipient == address
    }
}

/// Generate a transaction id: UUID v4 without dashes.
pub fn new_transaction_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// The provisional content of a block that proof-of-work seals.
///
/// Field order (`transactions`, then `number`) is part of the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContent {
    /// Transactions to embed, in pool order.
    pub transactions: Vec<Transaction>,
    /// Number the block will carry.
    pub number: u64,
}

/// A sealed block.
///
/// Created once at seal time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Position in the chain (genesis = 1).
    pub number: u64,
    /// Creation instant, Unix milliseconds.
    pub timestamp: i64,
    /// Embedded transactions.
    pub transactions: Vec<Transaction>,
    /// Nonce found by proof-of-work.
    pub nonce: u64,
    /// Digest sealing this block.
    pub hash: BlockHash,
    /// Digest of the preceding block (empty for genesis).
    pub previous_block_hash: BlockHash,
}

impl Block {
    /// The hard-coded first block of every chain.
    pub fn genesis() -> Self {
        Self {
            number: GENESIS_NUMBER,
            timestamp: GENESIS_TIMESTAMP,
            transactions: Vec::new(),
            nonce: GENESIS_NONCE,
            hash: GENESIS_HASH.to_string(),
            previous_block_hash: String::new(),
        }
    }

    /// Whether this block has the genesis number.
    pub fn is_genesis(&self) -> bool {
        self.number == GENESIS_NUMBER
    }

    /// The content that was hashed when this block was sealed.
    pub fn content(&self) -> BlockContent {
        BlockContent {
            transactions: self.transactions.clone(),
            number: self.number,
        }
    }
}

/// Current wall-clock time in Unix milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// =============================================================================
// CLUSTER B: REPLICATION
// =============================================================================

/// A node's full ledger state as reported to peers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainSnapshot {
    /// The chain, genesis first.
    pub chain: Vec<Block>,
    /// Transactions not yet sealed.
    pub pending_transactions: Vec<Transaction>,
}

impl ChainSnapshot {
    /// Number of blocks in the reported chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether the reported chain has no blocks at all.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
