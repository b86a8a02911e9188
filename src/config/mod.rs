//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flag / HTTP_RELAY_ORIGIN / config file (TOML)
//!     → loader.rs (resolve precedence, parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → passed into the Executor at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; the process handles one request
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The backend origin is an explicit constructor input, never ambient
//!   global state

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::RelayConfig;
pub use schema::TimeoutConfig;
