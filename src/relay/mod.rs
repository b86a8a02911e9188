//! Relay pipeline subsystem.
//!
//! # Data Flow
//! ```text
//! stdin (one JSON document)
//!     → descriptor.rs (parse, semantic checks)
//!     → executor.rs (verbatim request, timeout enforcement)
//!     → render.rs (buffered JSON envelope | raw streamed bytes)
//!     → stdout
//!
//! On any failure:
//!     error.rs ({"error": ...} single line on stderr, exit status 1)
//! ```
//!
//! # Design Decisions
//! - Strictly linear, single-pass control flow; no retries, no connection reuse
//! - HTTP 4xx/5xx statuses are successful deliveries, not errors
//! - The rendering mode is fixed before any output byte is written

pub mod descriptor;
pub mod error;
pub mod executor;
pub mod render;

pub use descriptor::RequestDescriptor;
pub use error::{RelayError, RelayResult};
pub use executor::Executor;
pub use render::RenderMode;
