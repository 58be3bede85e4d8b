//! Logging of the Rust side of the bridge. The SDK on the host side has its
//! own logging, toggled with `Purchases::set_debug_logs_enabled`.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static LOGGING_INSTALLED: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "purchases_bridge=info";

/// Installs a global `tracing` subscriber writing to stderr, filtered with
/// `filter` (`EnvFilter` syntax, e.g. `"purchases_bridge=debug"`). An invalid
/// filter falls back to info level. Only the first call has any effect.
#[uniffi::export]
pub fn install_logging(filter: String) {
    LOGGING_INSTALLED.get_or_init(|| {
        let env_filter =
            EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // The host app, or a test harness, might already have installed one.
        if tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init()
            .is_err()
        {
            tracing::debug!("Global tracing subscriber already installed, keeping it");
        }

        tracing::info!(filter = %filter, "Logging installed");
    });
}
