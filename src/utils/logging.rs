//! Logging
//!
//! Installs a global `tracing` subscriber for binaries and test harnesses
//! embedding the inference core. The library itself only emits events.

use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVE: &str = "fuzzy_inference=info";

/// Install a formatted subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive`. Fails if a global subscriber already exists.
pub fn init_tracing(default_directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_directive))?;

    Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
