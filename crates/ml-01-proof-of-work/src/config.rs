//! Configuration types for proof-of-work

use crate::error::{PowError, Result};
use serde::Deserialize;

/// PoW configuration
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PoWConfig {
    /// Leading hex characters a sealed hash must carry (default: "0000")
    pub difficulty_prefix: String,
}

impl Default for PoWConfig {
    fn default() -> Self {
        Self {
            difficulty_prefix: crate::DIFFICULTY_PREFIX.to_string(),
        }
    }
}

impl PoWConfig {
    /// Validate that the prefix can ever be matched by a hex digest.
    pub fn validate(&self) -> Result<()> {
        let prefix = &self.difficulty_prefix;
        if prefix.len() > crate::DIGEST_HEX_LEN {
            return Err(PowError::InvalidConfig(format!(
                "difficulty prefix longer than a digest: {} > {}",
                prefix.len(),
                crate::DIGEST_HEX_LEN
            )));
        }
        if !prefix
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(PowError::InvalidConfig(format!(
                "difficulty prefix must be lowercase hex: {prefix:?}"
            )));
        }
        Ok(())
    }
}
