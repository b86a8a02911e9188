//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Backend origin the relayed request is issued against
    /// (e.g., "http://127.0.0.1:8080"). The descriptor's `path_query` is
    /// joined onto this base to form the full request URL.
    pub origin: Option<String>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Timeout configuration for the single request/response exchange.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Default total request timeout in seconds, applied when the incoming
    /// descriptor carries no explicit `timeout`. Bounds the whole exchange,
    /// from connect through the last body byte.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}
