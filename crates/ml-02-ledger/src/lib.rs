//! # Mini-Ledger - Ledger (Subsystem 02)
//!
//! The ledger exclusively owns the chain and the pending-transaction pool.
//! Every mutation goes through one of its methods.
//!
//! ## Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | INVARIANT-1 | Chain starts with the genesis block | `Ledger::new` |
//! | INVARIANT-2 | Block numbers increase by exactly one | `append_block`, `accept_block` |
//! | INVARIANT-3 | Pool is cleared whenever a block is appended | `append_block`, `accept_block` |
//! | INVARIANT-4 | Only validated chains replace the local one | caller (consensus) |
//!
//! ## Concurrency
//!
//! `Ledger` holds no locks. Embedders that share one instance between
//! concurrent callers must serialize every mutating call behind a single
//! mutex per ledger.

mod ledger;

pub use ledger::Ledger;
