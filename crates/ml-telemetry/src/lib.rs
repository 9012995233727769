//! # Mini-Ledger Telemetry
//!
//! Structured logging for every Mini-Ledger process.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ml_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//!     // Spans and events are now written to stdout
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ML_SERVICE_NAME` | `mini-ledger` | Service name attached to logs |
//! | `ML_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `ML_JSON_LOGS` | `false` | Emit JSON lines instead of text |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install subscriber: {0}")]
    Subscriber(String),
}

/// Initialize structured logging.
///
/// Fails if a global subscriber is already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    init_logging(config)?;
    tracing::info!(
        service = %config.service_name,
        json = config.json_logs,
        "Telemetry initialized"
    );
    Ok(())
}

/// Log a block-related event with standard fields.
#[macro_export]
macro_rules! log_block_event {
    ($level:ident, $msg:expr, $block:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            block_number = $block.number,
            block_hash = %$block.hash,
            tx_count = $block.transactions.len(),
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a transaction-related event with standard fields.
#[macro_export]
macro_rules! log_tx_event {
    ($level:ident, $msg:expr, $tx:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            transaction_id = %$tx.transaction_id,
            amount = $tx.amount,
            sender = %$tx.sender,
            recipient = %$tx.recipient,
            $($($field)*,)?
            $msg
        )
    };
}
