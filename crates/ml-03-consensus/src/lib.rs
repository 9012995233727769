//! # ml-03-consensus
//!
//! Consensus subsystem for Mini-Ledger.
//!
//! ## Architecture
//!
//! Two pure services:
//!
//! - [`ChainValidator`] checks any candidate chain (local or reported by a
//!   peer): genesis shape, proof-of-work of every block, hash linkage.
//! - [`ConsensusResolver`] picks the canonical chain among the local one and
//!   the chains peers report, using the longest-valid-chain rule.
//!
//! ```text
//! peers ──ChainSnapshot──→ ConsensusResolver ──longest?──→ ChainValidator
//!                                 │                              │
//!                                 ↓                              ↓
//!                        Resolution { replaced }  ←──────── valid / invalid
//! ```
//!
//! ## Security
//!
//! - Invalid chains are rejected whole; there is no partial acceptance.
//! - The resolver never shortens the local chain.
//! - A peer's pending pool is adopted as reported and is not validated.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ml_03_consensus::{ChainValidator, ConsensusResolver};
//!
//! let resolver = ConsensusResolver::new(ChainValidator::default());
//! let replaced = resolver.apply(&mut ledger, peer_snapshots);
//! ```

pub mod domain;

pub use domain::{
    ChainValidator, ConsensusResolver, Resolution, ValidationError, ValidationPolicy,
    ValidationResult, ValidatorConfig,
};
