//! Diagnostic logging for the documentor binary.
//!
//! Library code emits `tracing` events (for example a warning when a bundled
//! resource cannot be read). The binary installs a compact stderr subscriber:
//! `--verbose` enables debug output, otherwise `RUST_LOG` is honoured and the
//! default level is `warn`.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("documentor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(colors_enabled())
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Colors are on unless `NO_COLOR` is set to a non-empty value.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none_or(|value| value.is_empty())
}
