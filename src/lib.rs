#![doc(test(attr(deny(warnings))))]

//! Subtally tracks recurring subscription costs and projects their combined
//! price to a daily, monthly, or yearly view.

pub mod cli;
pub mod domain;
pub mod errors;
pub mod tracker;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_TRACING: Once = Once::new();

/// Installs the global tracing subscriber and emits a startup info log.
/// `RUST_LOG` overrides the default `subtally=info` filter.
pub fn init() {
    INIT_TRACING.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("subtally=info"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
        tracing::info!("Subtally tracing initialized.");
    });
}
