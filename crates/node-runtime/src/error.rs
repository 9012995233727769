//! Node error types

use crate::container::ConfigError;
use crate::ports::TransportError;
use ml_01_proof_of_work::PowError;
use shared_types::LedgerError;
use thiserror::Error;

/// Errors surfaced by [`crate::Node`] operations.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Ledger state rejected the operation.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Sealing failed.
    #[error(transparent)]
    Pow(#[from] PowError),

    /// Peers could not be reached.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Node configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The blocking mining worker panicked or was cancelled.
    #[error("Mining task failed: {0}")]
    MiningTask(String),
}

impl NodeError {
    /// Whether the node cannot continue serving requests.
    pub fn is_critical(&self) -> bool {
        match self {
            Self::Ledger(e) => e.is_critical(),
            Self::Pow(e) => e.is_critical(),
            Self::MiningTask(_) => true,
            Self::Transport(_) | Self::Config(_) => false,
        }
    }
}

/// Result alias for node operations.
pub type NodeResult<T> = Result<T, NodeError>;
