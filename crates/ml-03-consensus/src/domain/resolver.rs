//! # Longest-Valid-Chain Resolution
//!
//! ## Rule
//!
//! 1. Among peer chains strictly longer than the local chain, take the
//!    longest. On equal maximal lengths the first one seen wins.
//! 2. Validate only that candidate. If it is invalid, keep the local chain;
//!    shorter valid alternatives are not considered.
//! 3. On success adopt the candidate chain and its reported pending pool.

use super::ChainValidator;
use ml_02_ledger::Ledger;
use shared_types::{Block, ChainSnapshot, Transaction};

/// Outcome of a resolution round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The canonical chain after resolution.
    pub chain: Vec<Block>,
    /// The pending pool that goes with it.
    pub pending_transactions: Vec<Transaction>,
    /// Whether a peer chain was adopted.
    pub replaced: bool,
}

/// Longest-valid-chain resolver.
#[derive(Clone, Debug, Default)]
pub struct ConsensusResolver {
    validator: ChainValidator,
}

impl ConsensusResolver {
    pub fn new(validator: ChainValidator) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &ChainValidator {
        &self.validator
    }

    /// Pick the peer snapshot that should replace a local chain of
    /// `local_len` blocks, if any.
    pub fn select_candidate(
        &self,
        local_len: usize,
        peers: Vec<ChainSnapshot>,
    ) -> Option<ChainSnapshot> {
        let peer_count = peers.len();
        let mut max_len = local_len;
        let mut longest: Option<ChainSnapshot> = None;

        for peer in peers {
            if peer.len() > max_len {
                max_len = peer.len();
                longest = Some(peer);
            }
        }

        let Some(candidate) = longest else {
            tracing::debug!(local_len, peer_count, "No longer peer chain");
            return None;
        };

        match self.validator.validate(&candidate.chain) {
            Ok(()) => {
                tracing::info!(
                    local_len,
                    candidate_len = candidate.len(),
                    "Adopting longer valid peer chain"
                );
                Some(candidate)
            }
            Err(e) => {
                tracing::warn!(
                    local_len,
                    candidate_len = candidate.len(),
                    error = %e,
                    "Longest peer chain is invalid, keeping local chain"
                );
                None
            }
        }
    }

    /// Resolve the canonical chain from local state and peer reports.
    ///
    /// The result is never shorter than `local_chain`.
    pub fn resolve(
        &self,
        local_chain: Vec<Block>,
        local_pending: Vec<Transaction>,
        peers: Vec<ChainSnapshot>,
    ) -> Resolution {
        match self.select_candidate(local_chain.len(), peers) {
            Some(candidate) => Resolution {
                chain: candidate.chain,
                pending_transactions: candidate.pending_transactions,
                replaced: true,
            },
            None => Resolution {
                chain: local_chain,
                pending_transactions: local_pending,
                replaced: false,
            },
        }
    }

    /// Resolve against a ledger in place. Returns whether it was replaced.
    pub fn apply(&self, ledger: &mut Ledger, peers: Vec<ChainSnapshot>) -> bool {
        match self.select_candidate(ledger.len(), peers) {
            Some(candidate) => {
                ledger.replace_chain(candidate.chain, candidate.pending_transactions);
                true
            }
            None => false,
        }
    }
}
