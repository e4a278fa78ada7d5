//! # Logging Module
//!
//! Diagnostic logging setup. The status lines own stdout, so everything
//! emitted through `tracing` writes to stderr and defaults to off; set
//! `RUST_LOG` (e.g. `RUST_LOG=debug`) to see traversal and template
//! diagnostics.

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber from the `RUST_LOG` environment
/// variable.
pub fn init_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();
}
