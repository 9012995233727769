//! Error types for the consensus subsystem

use ml_01_proof_of_work::CodecError;

/// Reasons a candidate chain is invalid.
///
/// Reported to callers as "not adopted"; never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Chain is empty: no genesis block")]
    EmptyChain,

    #[error("Invalid genesis block: {reason}")]
    InvalidGenesis { reason: &'static str },

    #[error("Block {number}: recomputed digest does not meet the difficulty target")]
    InsufficientWork { number: u64 },

    #[error("Block {number}: stored hash does not match recomputed digest")]
    HashMismatch { number: u64 },

    #[error("Block {number}: previous hash does not match preceding block")]
    BrokenLink { number: u64 },

    #[error("Invalid block number: expected {expected}, got {actual}")]
    NonSequentialNumber { expected: u64, actual: u64 },

    #[error("Block {number} has no representable successor number")]
    NumberOverflow { number: u64 },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;
