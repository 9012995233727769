//! # Query Index Subsystem (ml-04)
//!
//! Derived, read-only views over a chain:
//!
//! - Block lookup by digest
//! - Transaction lookup by id, with the block that embeds it
//! - Per-address history and running balance
//!
//! All lookups are linear scans in chain order and return the first match.
//! Hashes and transaction ids are expected to be unique by construction;
//! uniqueness is not enforced. A miss is `None`, never an error.

mod index;

pub use index::{AddressSummary, QueryIndex, TransactionLocation};
