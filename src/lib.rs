//! Single-shot HTTP Relay Library

// Core pipeline
pub mod relay;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use config::schema::RelayConfig;
pub use relay::descriptor::RequestDescriptor;
pub use relay::error::{RelayError, RelayResult};
pub use relay::executor::Executor;
pub use relay::render::RenderMode;
