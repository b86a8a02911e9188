//! Incoming request descriptor.
//!
//! # Responsibilities
//! - Decode the JSON document received over stdin
//! - Reject malformed or incomplete descriptors before any network activity
//! - Preserve the absent/present distinction for optional fields
//!
//! # Design Decisions
//! - Unknown fields are rejected; the input surface is a narrow contract
//! - `body: None` means no request body, distinct from an empty body
//! - `timeout: None` means the configured default, distinct from zero

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Method;
use serde::Deserialize;

use crate::relay::error::{RelayError, RelayResult};

/// One HTTP call to perform, as described by the JSON document on stdin.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestDescriptor {
    /// HTTP method token, e.g. "GET".
    pub method: String,

    /// Path plus optional query string, joined onto the configured origin.
    pub path_query: String,

    /// Selects the rendering mode: raw streamed bytes when true, buffered
    /// JSON envelope when false.
    pub stream: bool,

    /// Headers attached to the outgoing request verbatim.
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Raw request payload.
    #[serde(default)]
    pub body: Option<String>,

    /// Total exchange timeout in seconds. Fractional values are accepted.
    #[serde(default)]
    pub timeout: Option<f64>,
}

impl RequestDescriptor {
    /// Decode a descriptor from one JSON document and check its fields.
    pub fn from_json(input: &str) -> RelayResult<Self> {
        let descriptor: Self =
            serde_json::from_str(input).map_err(|e| RelayError::Parse(e.to_string()))?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Semantic checks serde cannot express.
    fn validate(&self) -> RelayResult<()> {
        self.method()?;
        if let Some(timeout) = self.timeout {
            if !timeout.is_finite()
                || timeout <= 0.0
                || Duration::try_from_secs_f64(timeout).is_err()
            {
                return Err(RelayError::Parse(format!(
                    "timeout must be a positive number of seconds, got {timeout}"
                )));
            }
        }
        Ok(())
    }

    /// The descriptor's HTTP method as a typed token.
    pub fn method(&self) -> RelayResult<Method> {
        Method::from_str(&self.method)
            .map_err(|_| RelayError::Parse(format!("invalid method {:?}", self.method)))
    }

    /// The exchange timeout, falling back to the configured default.
    pub fn timeout_or(&self, default: Duration) -> Duration {
        self.timeout
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            .unwrap_or(default)
    }
}
