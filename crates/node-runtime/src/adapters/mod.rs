//! # Adapter Implementations
//!
//! Concrete [`PeerTransport`](crate::ports::PeerTransport) implementations.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 OUTER LAYER (Adapters)                   │
//! │        LocalNetwork (in-process), NullTransport          │
//! │                       ↑ implements ↑                     │
//! │                  PORT: PeerTransport                     │
//! │                         ↑ uses ↑                         │
//! │         Node: ProofOfWork, Ledger, ConsensusResolver     │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod local_network;
pub mod null;

pub use local_network::LocalNetwork;
pub use null::NullTransport;
