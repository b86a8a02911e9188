//! HTTP execution against the backend origin.
//!
//! # Responsibilities
//! - Build the outgoing request verbatim from the descriptor
//! - Enforce the exchange timeout
//! - Classify transport failures
//!
//! # Design Decisions
//! - The origin is an explicit constructor input, not ambient state
//! - No retries: one descriptor, one attempt, one response
//! - No injected headers beyond what the transport itself requires
//! - 4xx/5xx statuses are delivered, never converted to errors

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use url::Url;

use crate::config::loader::ConfigError;
use crate::config::schema::RelayConfig;
use crate::config::validation::ValidationError;
use crate::relay::descriptor::RequestDescriptor;
use crate::relay::error::{RelayError, RelayResult};

/// Issues the single described HTTP call.
#[derive(Debug)]
pub struct Executor {
    client: Client,
    origin: Url,
    default_timeout: Duration,
}

impl Executor {
    /// Build an executor from a resolved configuration.
    pub fn new(config: &RelayConfig) -> RelayResult<Self> {
        let origin = match config.origin.as_deref() {
            Some(origin) => Url::parse(origin).map_err(|e| {
                ConfigError::Validation(vec![ValidationError::InvalidOrigin(
                    origin.to_string(),
                    e.to_string(),
                )])
            })?,
            None => {
                return Err(ConfigError::Validation(vec![ValidationError::MissingOrigin]).into());
            }
        };

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| RelayError::Io(std::io::Error::other(e)))?;

        Ok(Self {
            client,
            origin,
            default_timeout: Duration::from_secs(config.timeouts.request_secs),
        })
    }

    /// Issue the described call and return the backend's response handle.
    ///
    /// The timeout bounds the whole exchange, from connect through the last
    /// body byte. Expiry aborts the in-flight request.
    pub async fn execute(&self, descriptor: &RequestDescriptor) -> RelayResult<Response> {
        let url = self.target_url(&descriptor.path_query)?;
        let method = descriptor.method()?;
        let timeout = descriptor.timeout_or(self.default_timeout);
        let headers = HeaderMap::try_from(&descriptor.headers)
            .map_err(|e| RelayError::Parse(format!("invalid header: {e}")))?;

        tracing::debug!(
            method = %method,
            url = %url,
            timeout_secs = timeout.as_secs_f64(),
            stream = descriptor.stream,
            "Relaying request"
        );

        let mut request = self
            .client
            .request(method, url.clone())
            .headers(headers)
            .timeout(timeout);
        if let Some(body) = &descriptor.body {
            request = request.body(body.clone());
        }

        let response = request
            .send()
            .await
            .map_err(|e| RelayError::from_reqwest(e, &url))?;

        tracing::debug!(status = response.status().as_u16(), "Backend responded");
        Ok(response)
    }

    /// Join the descriptor's path+query onto the origin.
    ///
    /// The origin is parsed on its own and the path joined after, so a
    /// path_query can never be misread as part of the authority.
    fn target_url(&self, path_query: &str) -> RelayResult<Url> {
        self.origin
            .join(path_query)
            .map_err(|e| RelayError::Parse(format!("invalid path_query {path_query:?}: {e}")))
    }
}
