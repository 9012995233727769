//! # Integration Tests
//!
//! Flows that cross crate boundaries: proof-of-work feeding the ledger,
//! the ledger feeding consensus and queries, and nodes replicating over a
//! local network.

pub mod network;
pub mod scenarios;
