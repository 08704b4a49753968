//! Tracing setup
//!
//! Diagnostics go to stderr so stdout carries only the confirmation lines.
//! `RUST_LOG` takes precedence over the level chosen from `--verbose`.

use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is not set
pub fn default_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

fn build_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("appdist={}", level.as_str().to_lowercase())))
}

/// Install the global subscriber; later calls are ignored
pub fn init_tracing(verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(build_filter(default_level(verbose)))
        .with(layer)
        .try_init();
}
