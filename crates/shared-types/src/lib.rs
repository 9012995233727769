//! # Shared Types Crate
//!
//! This crate contains the ledger data model and the error types used by
//! every engine crate.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Block`, `Transaction` and `ChainSnapshot`
//!   are defined here and nowhere else.
//! - **Wire Stability**: field names and field order are part of the hashed
//!   content. Reordering a field changes every block hash.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
