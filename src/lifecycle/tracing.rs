//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup and shutdown of the part store, with its final size
//! - **Store operations**: Create, Get, List, Update (`entity_type`, `id`, `size` fields)
//! - **Service calls**: one span per inventory operation; rejected input is logged at `warn`
//! - **HTTP requests**: method, path, status and latency via `tower-http`
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info parts-inventory
//!
//! # Full payloads
//! RUST_LOG=debug parts-inventory
//!
//! # Only the store
//! RUST_LOG=parts_inventory::framework=debug parts-inventory
//! ```
//!
//! `RUST_LOG` wins over `telemetry.log_level` from the configuration.
//!
//! With `RUST_LOG=debug`, a stock update reads roughly:
//!
//! ```text
//! DEBUG update_stock: Update entity_type="VehiclePart" id=0f4c… update=StockUpdate { stock: 25 }
//!  INFO update_stock: Updated entity_type="VehiclePart" id=0f4c…
//!  INFO update_stock: Stock updated stock=25 restock=false
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, TelemetryConfig};

/// Initializes structured logging.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn setup_tracing(config: &TelemetryConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false); // entity_type already says where a line came from

    let _ = match config.log_format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
