//! # Error Types
//!
//! Defines error types shared across the engine crates.

use thiserror::Error;

/// Errors raised by ledger mutation and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The chain has no genesis block. Unreachable for a ledger built with
    /// `Ledger::new`; fatal if encountered.
    #[error("Chain is empty: no genesis block")]
    EmptyChain,

    /// A block received from a peer does not extend the local tip.
    #[error("Block {number} rejected: {reason}")]
    BlockRejected { number: u64, reason: String },

    /// The tip carries the largest representable number, so no block can
    /// follow it.
    #[error("Block {number} has no representable successor number")]
    NumberOverflow { number: u64 },
}

impl LedgerError {
    /// Check if error is critical (the ledger is unusable)
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::EmptyChain)
    }
}
