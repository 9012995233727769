//! Whole-chain validation
//!
//! For every block after genesis the digest is recomputed from the stored
//! fields: `hash(previous.hash, {transactions, number}, nonce)`.

use super::{ValidationError, ValidationResult};
use ml_01_proof_of_work::{hash_block, DifficultyPolicy, FixedPrefix};
use serde::Deserialize;
use shared_types::{Block, GENESIS_HASH, GENESIS_NUMBER};
use std::str::FromStr;
use std::sync::Arc;

/// How strictly non-genesis blocks are checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Recomputed digest must meet the target AND equal the stored hash;
    /// numbers must increase by one.
    #[default]
    Strict,
    /// Recomputed digest must meet the target; the stored hash and numbers
    /// are not compared. Accepts a block whose stored hash is arbitrary.
    Legacy,
}

impl FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown validation policy: {other}")),
        }
    }
}

/// Validator configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ValidatorConfig {
    /// Strictness of per-block checks (default: strict)
    #[serde(default)]
    pub policy: ValidationPolicy,
}

/// Stateless validation of candidate chains.
#[derive(Clone, Debug)]
pub struct ChainValidator {
    difficulty: Arc<dyn DifficultyPolicy>,
    policy: ValidationPolicy,
}

impl ChainValidator {
    /// Create a validator. `difficulty` must be the policy miners use.
    pub fn new(difficulty: Arc<dyn DifficultyPolicy>, policy: ValidationPolicy) -> Self {
        Self { difficulty, policy }
    }

    /// Create a validator from configuration.
    pub fn from_config(config: &ValidatorConfig, difficulty: Arc<dyn DifficultyPolicy>) -> Self {
        Self::new(difficulty, config.policy)
    }

    /// The configured strictness.
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Validate a whole chain, reporting the first failure found.
    pub fn validate(&self, chain: &[Block]) -> ValidationResult<()> {
        let genesis = chain.first().ok_or(ValidationError::EmptyChain)?;
        Self::validate_genesis(genesis)?;

        for pair in chain.windows(2) {
            self.validate_block(&pair[0], &pair[1])?;
        }

        Ok(())
    }

    /// Whether the whole chain is valid. Pure: repeated calls agree.
    pub fn is_valid(&self, chain: &[Block]) -> bool {
        match self.validate(chain) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, len = chain.len(), "Chain failed validation");
                false
            }
        }
    }

    /// Validate one block against its predecessor.
    fn validate_block(&self, previous: &Block, block: &Block) -> ValidationResult<()> {
        let expected = hash_block(&previous.hash, &block.content(), block.nonce)?;

        if !self.difficulty.is_valid_digest(&expected) {
            return Err(ValidationError::InsufficientWork {
                number: block.number,
            });
        }

        if block.previous_block_hash != previous.hash {
            return Err(ValidationError::BrokenLink {
                number: block.number,
            });
        }

        if self.policy == ValidationPolicy::Strict {
            if expected != block.hash {
                return Err(ValidationError::HashMismatch {
                    number: block.number,
                });
            }
            let expected = previous
                .number
                .checked_add(1)
                .ok_or(ValidationError::NumberOverflow {
                    number: previous.number,
                })?;
            if block.number != expected {
                return Err(ValidationError::NonSequentialNumber {
                    expected,
                    actual: block.number,
                });
            }
        }

        Ok(())
    }

    /// Genesis must match the hard-coded block. Its nonce is exempt from
    /// proof-of-work but must be non-zero.
    fn validate_genesis(genesis: &Block) -> ValidationResult<()> {
        if genesis.number != GENESIS_NUMBER {
            return Err(ValidationError::InvalidGenesis {
                reason: "unexpected number",
            });
        }
        if genesis.nonce == 0 {
            return Err(ValidationError::InvalidGenesis { reason: "zero nonce" });
        }
        if !genesis.previous_block_hash.is_empty() {
            return Err(ValidationError::InvalidGenesis {
                reason: "non-empty previous hash",
            });
        }
        if genesis.hash != GENESIS_HASH {
            return Err(ValidationError::InvalidGenesis {
                reason: "unexpected hash",
            });
        }
        if !genesis.transactions.is_empty() {
            return Err(ValidationError::InvalidGenesis {
                reason: "contains transactions",
            });
        }
        Ok(())
    }
}

impl Default for ChainValidator {
    fn default() -> Self {
        Self::new(Arc::new(FixedPrefix::default()), ValidationPolicy::Strict)
    }
}
