//! # Mini-Ledger Node Runtime
//!
//! Wires the engine crates into a single replica and connects replicas
//! through a pluggable peer transport.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           Node                               │
//! │                                                              │
//! │  submit/receive tx ──→ ml-02 Ledger (pending pool)           │
//! │  mine ──→ ml-01 ProofOfWork ──→ ml-02 append ──→ broadcast   │
//! │  receive block ──→ ml-02 accept (tip extension only)         │
//! │  consensus ──→ fetch peers ──→ ml-03 resolve ──→ replace     │
//! │  queries ──→ ml-04 QueryIndex                                │
//! │                                                              │
//! │                  ↕ PeerTransport (port)                      │
//! │          LocalNetwork / NullTransport (adapters)             │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use node_runtime::{adapters::NullTransport, Node, NodeConfig};
//! use std::sync::Arc;
//!
//! let node = Node::new(NodeConfig::default(), Arc::new(NullTransport))?;
//! let (tx, expected_block) = node.submit_transaction(50, "alice", "bob").await?;
//! let block = node.mine().await?;
//! ```

pub mod adapters;
pub mod container;
pub mod error;
pub mod ports;

pub use container::{build_local_mesh, ConfigError, Node, NodeConfig, SharedLedger};
pub use error::{NodeError, NodeResult};
pub use ports::{PeerTransport, TransportError};
