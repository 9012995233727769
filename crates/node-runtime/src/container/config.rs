//! # Node Configuration
//!
//! Unified configuration for the engine crates and runtime parameters.
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ML_NODE_ADDRESS` | fresh id | Address credited with mining rewards |
//! | `ML_MINING_REWARD` | `322` | Reward amount per mined block |
//! | `ML_DIFFICULTY_PREFIX` | `0000` | Leading hex a sealed hash must carry |
//! | `ML_VALIDATION_POLICY` | `strict` | `strict` or `legacy` |
//! | `ML_DEMO_PEERS` | `2` | Peers started next to the demo node |

use ml_01_proof_of_work::{PoWConfig, PowError};
use ml_03_consensus::{ValidationPolicy, ValidatorConfig};
use serde::Deserialize;
use shared_types::new_transaction_id;
use std::env;
use thiserror::Error;

/// Default reward credited to the miner of each block.
pub const DEFAULT_MINING_REWARD: u64 = 322;

/// Complete node configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// This node's address; mining rewards are paid to it.
    pub node_address: String,
    /// Amount of the reward transaction created after each mined block.
    pub mining_reward: u64,
    /// Proof-of-work configuration.
    pub pow: PoWConfig,
    /// Chain validation configuration.
    pub validator: ValidatorConfig,
    /// Number of peers the demo binary starts next to the first node.
    pub demo_peers: usize,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            node_address: new_transaction_id(),
            mining_reward: DEFAULT_MINING_REWARD,
            pow: PoWConfig::default(),
            validator: ValidatorConfig::default(),
            demo_peers: 2,
        }
    }
}

impl NodeConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to
    /// defaults for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(address) = lookup("ML_NODE_ADDRESS") {
            if address.trim().is_empty() {
                return Err(ConfigError::invalid("ML_NODE_ADDRESS", &address, "empty"));
            }
            config.node_address = address;
        }

        if let Some(raw) = lookup("ML_MINING_REWARD") {
            config.mining_reward = raw
                .parse()
                .map_err(|e| ConfigError::invalid("ML_MINING_REWARD", &raw, e))?;
        }

        if let Some(prefix) = lookup("ML_DIFFICULTY_PREFIX") {
            config.pow.difficulty_prefix = prefix;
        }

        if let Some(raw) = lookup("ML_VALIDATION_POLICY") {
            config.validator.policy = raw
                .parse::<ValidationPolicy>()
                .map_err(|e| ConfigError::invalid("ML_VALIDATION_POLICY", &raw, e))?;
        }

        if let Some(raw) = lookup("ML_DEMO_PEERS") {
            config.demo_peers = raw
                .parse()
                .map_err(|e| ConfigError::invalid("ML_DEMO_PEERS", &raw, e))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pow.validate().map_err(ConfigError::Pow)
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set but could not be used.
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// Proof-of-work settings were rejected.
    #[error(transparent)]
    Pow(PowError),
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidValue {
            key,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
