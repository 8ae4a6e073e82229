//! Stak toolchain driver.
//!
//! ```text
//! source text
//!     │  stak_parse::lex
//!     ▼
//! tokens
//!     │  stak_parse::parse
//!     ▼
//! Program (+ RuleSource spans)
//!     │  stak_parse::load (initial-state extraction)
//!     ▼
//! Program::check / queries / rendering
//! ```
//!
//! Each command has a pure entry point returning data or diagnostics
//! (`check_source`, `format_source`, `stats_report`, ...) and a thin
//! printing wrapper used by the `stak` binary.

pub mod commands;
pub mod problem;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=stak_parse=debug`
/// or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
