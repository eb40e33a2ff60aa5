//! Tracing subscriber setup.
//!
//! Everything goes to stderr: on the stdio transport stdout carries the
//! JSON-RPC stream.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// `RUST_LOG` overrides the level chosen by `verbose`.
pub fn init(verbose: bool, json_format: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }
}
