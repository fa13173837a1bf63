//! Structured logging for the extensions
//!
//! This module sets up tracing-based logging with configurable levels.
//! Each extension names a debug environment variable; when that variable
//! holds a truthy value the crate logs at debug level, otherwise it stays
//! at the quieter default. `RUST_LOG` overrides both when set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system for one extension
///
/// `debug_env_var` is the extension's verbose-logging switch (for example
/// `NAUTILUS_PTYXIS_DEBUG`), read once here. Both providers may call this;
/// whichever runs first wins and later calls are no-ops.
pub fn init(debug_env_var: &str) {
    let default_level = if debug_enabled(debug_env_var) {
        "nautilus_openers=debug,info"
    } else {
        "nautilus_openers=info,warn"
    };

    // Allow override via RUST_LOG environment variable
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // The host process may install its own subscriber; never panic over it
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init();
}

/// Whether the given environment variable holds a truthy value
fn debug_enabled(var: &str) -> bool {
    std::env::var(var)
        .map(|value| is_truthy(&value))
        .unwrap_or(false)
}

fn is_truthy(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Initialize logging for tests
///
/// Uses try_init() to avoid panicking when called from multiple tests.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}
