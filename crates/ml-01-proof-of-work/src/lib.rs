//! # Mini-Ledger - Proof of Work (Subsystem 01)
//!
//! **Bounded Context:** Block Hashing & Sealing
//!
//! ## Purpose
//!
//! This crate turns the provisional content of a block into a sealed block
//! hash:
//! - [`codec`]: deterministic serialization of `(previous_hash, nonce,
//!   {transactions, number})` and a SHA-256 digest over it
//! - [`domain`]: the difficulty predicate and the nonce search
//!
//! ## Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  ProofOfWork::seal                                  │
//! │  - nonce = 0, 1, 2, ... until policy accepts hash   │
//! └─────────────────────────────────────────────────────┘
//!                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  DifficultyPolicy (swappable)                       │
//! │  - FixedPrefix("0000")                              │
//! └─────────────────────────────────────────────────────┘
//!                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  codec (pure)                                       │
//! │  - serialize / digest / hash_block                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Critical Invariants
//!
//! 1. **Determinism**: the same logical content always serializes to the
//!    same bytes. Validators re-derive hashes from stored block fields.
//! 2. **First Nonce**: `seal` returns the smallest nonce whose digest passes.
//! 3. **Fixed Target**: the default policy requires four leading hex zeros.
//!
//! ## Usage Example
//!
//! ```rust
//! use ml_01_proof_of_work::{FixedPrefix, ProofOfWork};
//! use shared_types::BlockContent;
//! use std::sync::Arc;
//!
//! let miner = ProofOfWork::new(Arc::new(FixedPrefix::new("0")));
//! let content = BlockContent { transactions: vec![], number: 2 };
//! let seal = miner.seal("Hello world!", &content).unwrap();
//! assert!(seal.hash.starts_with('0'));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
/// Difficulty predicate and nonce search
pub mod domain;

mod config;
mod error;

pub use codec::{digest, hash_block, serialize, CodecError};
pub use config::PoWConfig;
pub use domain::{is_valid_digest, DifficultyPolicy, FixedPrefix, ProofOfWork, Seal};
pub use error::{PowError, Result};

/// Leading hex characters every sealed block hash must carry.
pub const DIFFICULTY_PREFIX: &str = "0000";

/// Length of a rendered SHA-256 digest in hex characters.
pub const DIGEST_HEX_LEN: usize = 64;
