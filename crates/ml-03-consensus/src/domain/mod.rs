//! Domain layer for the consensus subsystem
//!
//! - error: the invalid-chain taxonomy
//! - validator: whole-chain verification
//! - resolver: longest-valid-chain selection

mod error;
mod resolver;
mod validator;

pub use error::*;
pub use resolver::*;
pub use validator::*;
