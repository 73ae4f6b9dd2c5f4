// ABOUTME: Logging configuration for the report binary
// ABOUTME: EnvFilter-driven tracing setup writing compact output to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tracing setup driven by `RUST_LOG`
//!
//! Log output goes to stderr so the report lines on stdout stay clean
//! for piping. Defaults to `info` when `RUST_LOG` is unset or invalid.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "info";

/// Initialize the global tracing subscriber from the environment
///
/// # Errors
///
/// Returns an error if a global subscriber was already installed.
pub fn init_from_env() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let fmt_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
