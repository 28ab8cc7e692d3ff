//! PNaCl shim generator command-line driver.
//!
//! # Logging
//!
//! Library crates log through `tracing`. Output is off unless `RUST_LOG` is
//! set:
//!
//! - `RUST_LOG=info`: which interface versions are skipped, pass/fail of
//!   each self-test fixture.
//! - `RUST_LOG=shim_parse=debug`: ignored IDL attributes.
//! - `SHIMC_LOG_TREE=1`: indent events under their spans.

pub mod commands;
pub mod selftest;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("SHIMC_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
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
