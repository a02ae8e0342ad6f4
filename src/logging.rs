//! Tracing initialization
//!
//! Diagnostics always go to stderr; stdout carries the descriptor in
//! description mode and must stay clean.

use std::io;
use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Filter applied when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "gdi_validator=warn";

/// Install the global subscriber. Calling it more than once is a no-op.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_ansi(false),
            )
            .with(filter)
            .try_init();
    });
}
