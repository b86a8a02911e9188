//! Single-shot HTTP relay.
//!
//! Reads one JSON-encoded request descriptor from stdin, performs the
//! described HTTP call against a configured backend origin, and renders the
//! result to stdout before terminating.
//!
//! # Architecture Overview
//!
//! ```text
//!     stdin (one JSON document)
//!         │
//!         ▼
//!     ┌────────────┐    ┌────────────┐    ┌────────────┐
//!     │ descriptor │───▶│  executor  │───▶│   render   │───▶ stdout
//!     │ parse+check│    │ send+timer │    │ json|bytes │
//!     └────────────┘    └─────┬──────┘    └────────────┘
//!                             │
//!                             ▼
//!                        backend origin
//!
//!     any failure ──▶ error reporter ({"error": ...} on stderr, exit 1)
//! ```
//!
//! Control flow is strictly linear: parse → execute → render. There are no
//! retries and no state survives past one invocation. HTTP 4xx/5xx statuses
//! from the backend are successful outcomes and flow through the normal
//! render path; only parse, transport, and timeout failures take the error
//! path.

use clap::Parser;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

use http_relay::config::loader;
use http_relay::observability::logging;
use http_relay::relay::descriptor::RequestDescriptor;
use http_relay::relay::error::{report_failure, RelayResult};
use http_relay::relay::executor::Executor;
use http_relay::relay::render::{self, RenderMode};

#[derive(Parser)]
#[command(name = "http-relay")]
#[command(about = "Relay one JSON-described HTTP request from stdin to a backend", long_about = None)]
struct Cli {
    /// Backend origin, e.g. "http://127.0.0.1:8080".
    /// Falls back to HTTP_RELAY_ORIGIN, then to the config file.
    #[arg(short, long)]
    origin: Option<String>,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Diagnostics are opt-in (RUST_LOG) and go to stderr only; both output
    // streams stay silent otherwise.
    logging::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => {}
        Err(err) => {
            report_failure(&err);
            std::process::exit(1);
        }
    }
}

/// Run the parse → execute → render pipeline once.
async fn run(cli: Cli) -> RelayResult<()> {
    let config = loader::resolve(cli.origin.as_deref(), cli.config.as_deref())?;

    tracing::info!(
        origin = config.origin.as_deref().unwrap_or(""),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration resolved"
    );

    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    let descriptor = RequestDescriptor::from_json(&input)?;

    let executor = Executor::new(&config)?;
    let response = executor.execute(&descriptor).await?;

    let mut stdout = tokio::io::stdout();
    render::render(RenderMode::for_descriptor(&descriptor), response, &mut stdout).await
}
