//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Pipeline stages produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumer:
//!     → stderr, only when RUST_LOG opts in
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - stdout belongs to the rendered response; diagnostics go to stderr
//! - Silent by default: the error stream is part of the output contract

pub mod logging;
