//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Route all diagnostics to stderr
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Disabled unless RUST_LOG is set: success runs must leave stderr empty
//!   and failure runs must leave exactly one JSON line on it

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// With no `RUST_LOG` in the environment the filter is `off`; the relay's
/// stdout/stderr framing is an external contract and must not be polluted
/// by log lines.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "off".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
