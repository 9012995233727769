//! Nonce search

use super::difficulty::{DifficultyPolicy, FixedPrefix};
use crate::codec::{digest, encode_content, serialize_encoded};
use crate::config::PoWConfig;
use crate::error::{PowError, Result};
use shared_types::{BlockContent, BlockHash};
use std::sync::Arc;

/// Result of a successful nonce search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seal {
    /// First nonce whose digest satisfies the policy.
    pub nonce: u64,
    /// The passing digest.
    pub hash: BlockHash,
    /// Number of digests computed, including the passing one.
    pub attempts: u64,
}

/// PoW nonce search service
///
/// Single-threaded and deterministic: the returned nonce is always the
/// smallest passing one. The search is CPU-bound and blocking with no timeout
/// or cancellation; async callers should run it on a blocking worker.
#[derive(Clone, Debug)]
pub struct ProofOfWork {
    policy: Arc<dyn DifficultyPolicy>,
}

impl ProofOfWork {
    /// Create a miner using the given difficulty policy.
    pub fn new(policy: Arc<dyn DifficultyPolicy>) -> Self {
        Self { policy }
    }

    /// Create a miner from configuration.
    pub fn from_config(config: &PoWConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(Arc::new(FixedPrefix::new(
            config.difficulty_prefix.clone(),
        ))))
    }

    /// The policy shared with validators.
    pub fn policy(&self) -> Arc<dyn DifficultyPolicy> {
        Arc::clone(&self.policy)
    }

    /// Search for the first nonce sealing `content` on top of `previous_hash`.
    #[tracing::instrument(
        skip(self, content),
        fields(number = content.number, tx_count = content.transactions.len())
    )]
    pub fn seal(&self, previous_hash: &str, content: &BlockContent) -> Result<Seal> {
        let encoded = encode_content(content)?;

        tracing::debug!(policy = ?self.policy, "Starting PoW search");

        let mut nonce = 0u64;
        loop {
            let hash = digest(&serialize_encoded(previous_hash, &encoded, nonce));
            if self.policy.is_valid_digest(&hash) {
                let attempts = nonce.saturating_add(1);
                tracing::info!(nonce, attempts, hash = %hash, "PoW search successful");
                return Ok(Seal {
                    nonce,
                    hash,
                    attempts,
                });
            }
            nonce = nonce.checked_add(1).ok_or_else(|| {
                tracing::warn!("PoW search failed: nonce space exhausted");
                PowError::NonceSpaceExhausted
            })?;
        }
    }

    /// Recompute the digest for a given nonce and check it against the policy.
    ///
    /// Returns the digest when it passes.
    pub fn verify(
        &self,
        previous_hash: &str,
        content: &BlockContent,
        nonce: u64,
    ) -> Result<BlockHash> {
        let hash = crate::codec::hash_block(previous_hash, content, nonce)?;
        if self.policy.is_valid_digest(&hash) {
            Ok(hash)
        } else {
            Err(PowError::InsufficientWork { hash })
        }
    }
}

impl Default for ProofOfWork {
    fn default() -> Self {
        Self::new(Arc::new(FixedPrefix::default()))
    }
}
