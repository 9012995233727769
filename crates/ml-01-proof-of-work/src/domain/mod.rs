//! Domain layer - Pure business logic for block sealing
//!
//! All code here is pure (no I/O, no async).
//!
//! - [`DifficultyPolicy`]: the single swappable predicate deciding whether a
//!   digest represents enough work
//! - [`ProofOfWork`]: sequential nonce search over a block template

mod difficulty;
mod miner;

pub use difficulty::{is_valid_digest, DifficultyPolicy, FixedPrefix};
pub use miner::{ProofOfWork, Seal};
