//! Error types for the proof-of-work subsystem

use crate::codec::CodecError;
use thiserror::Error;

/// Result type alias for proof-of-work operations
pub type Result<T> = std::result::Result<T, PowError>;

/// Errors that can occur while sealing or verifying a block
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PowError {
    /// Block content could not be encoded
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Every nonce was tried without a passing digest
    #[error("Mining failed: nonce space exhausted")]
    NonceSpaceExhausted,

    /// Recomputed digest does not satisfy the difficulty predicate
    #[error("Insufficient work: digest {hash} does not meet the target")]
    InsufficientWork {
        /// The rejected digest
        hash: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PowError {
    /// Check if error is critical (mining cannot proceed with this setup)
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::InvalidConfig(_) | Self::Codec(_))
    }
}
