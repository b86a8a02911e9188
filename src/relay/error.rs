//! Relay error taxonomy and failure reporting.

use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::config::loader::ConfigError;

/// Errors that can occur while relaying a request.
///
/// HTTP-level error statuses (4xx/5xx) are deliberately absent: they are
/// successful outcomes at the protocol layer and flow through the normal
/// render path unchanged.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request descriptor was malformed or incomplete. Detected before
    /// any network activity.
    #[error("invalid request descriptor: {0}")]
    Parse(String),

    /// Configuration could not be resolved or validated.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The exchange did not complete within the configured timeout.
    /// The message wording is an external contract; callers match on the
    /// literal "operation timed out" phrase.
    #[error("error sending request for url ({url}): operation timed out")]
    Timeout { url: String },

    /// Connection failure, reset, or malformed backend response.
    #[error("error sending request for url ({url}): {reason}")]
    Transport { url: String, reason: String },

    /// Reading stdin or writing an output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

impl RelayError {
    /// Classify a transport-layer failure against the URL it targeted.
    pub(crate) fn from_reqwest(err: reqwest::Error, url: &Url) -> Self {
        if err.is_timeout() {
            RelayError::Timeout {
                url: url.to_string(),
            }
        } else {
            RelayError::Transport {
                url: url.to_string(),
                reason: root_cause(&err),
            }
        }
    }
}

/// Innermost source message of an error chain.
fn root_cause(err: &(dyn std::error::Error + 'static)) -> String {
    let mut current: &(dyn std::error::Error + 'static) = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

/// Serialization format for errors, always over stderr.
#[derive(Serialize, Debug)]
struct ErrorReport<'a> {
    error: &'a str,
}

/// Render the single-line stderr payload for a failure.
pub fn error_line(err: &RelayError) -> String {
    let message = err.to_string();
    serde_json::to_string(&ErrorReport { error: &message })
        // Unreachable for string payloads; stderr must never stay empty on
        // the failure path.
        .unwrap_or_else(|_| r#"{"error":"unable to serialize error"}"#.to_string())
}

/// Report a failure: exactly one JSON line on stderr, nothing on stdout.
pub fn report_failure(err: &RelayError) {
    tracing::error!(error = %err, "Relay failed");
    eprintln!("{}", error_line(err));
}
