//! # Mini-Ledger Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks per engine crate
//! │   ├── ml_01_proof_of_work.rs
//! │   └── ml_03_consensus.rs
//! │
//! └── integration/      # Cross-crate flows
//!     ├── scenarios.rs  # Single-ledger end-to-end scenarios
//!     └── network.rs    # Multi-node replication and consensus
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ml-tests
//!
//! # By category
//! cargo test -p ml-tests integration::scenarios
//! cargo test -p ml-tests integration::network
//!
//! # Benchmarks
//! cargo bench -p ml-tests
//! ```

pub mod integration;
