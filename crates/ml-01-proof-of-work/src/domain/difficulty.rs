//! Difficulty predicate
//!
//! The target is fixed: there is no retargeting. The predicate is isolated
//! behind [`DifficultyPolicy`] so that miners and validators always agree on
//! it and so tests can substitute an easier target.

use std::fmt::Debug;

/// Decides whether a digest satisfies the difficulty target.
pub trait DifficultyPolicy: Debug + Send + Sync {
    /// Returns true if `hash` represents enough work.
    fn is_valid_digest(&self, hash: &str) -> bool;
}

/// Requires the digest to start with a fixed hex prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedPrefix {
    prefix: String,
}

impl FixedPrefix {
    /// Create a policy requiring `prefix` at the start of every digest.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The prefix this policy checks for.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for FixedPrefix {
    fn default() -> Self {
        Self::new(crate::DIFFICULTY_PREFIX)
    }
}

impl DifficultyPolicy for FixedPrefix {
    #[inline]
    fn is_valid_digest(&self, hash: &str) -> bool {
        hash.starts_with(self.prefix.as_str())
    }
}

/// Check a digest against the standard target (four leading hex zeros).
#[inline]
pub fn is_valid_digest(hash: &str) -> bool {
    hash.starts_with(crate::DIFFICULTY_PREFIX)
}
