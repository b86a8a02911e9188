//! Response rendering.
//!
//! # Responsibilities
//! - Select the rendering mode once, before any bytes are written
//! - Buffered: materialize the body fully, then emit one JSON envelope
//! - Streaming: copy raw body bytes to the sink as they arrive
//!
//! # Design Decisions
//! - The two modes are structurally disjoint code paths
//! - Bodies are never interpreted; a JSON body stays an opaque string
//! - A mid-stream failure is fatal and reported; bytes already flushed to
//!   the sink are not retracted (known limitation)

use std::collections::HashMap;

use reqwest::header::HeaderMap;
use reqwest::Response;
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use url::Url;

use crate::relay::descriptor::RequestDescriptor;
use crate::relay::error::{RelayError, RelayResult};

/// Rendering mode, fixed at renderer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Full materialization, one JSON envelope on the sink.
    Buffered,
    /// Raw body bytes on the sink, no envelope.
    Streaming,
}

impl RenderMode {
    /// Select the mode from the descriptor's `stream` flag. Nothing else
    /// participates in the selection; an HTTP error status still renders in
    /// the requested mode.
    pub fn for_descriptor(descriptor: &RequestDescriptor) -> Self {
        if descriptor.stream {
            RenderMode::Streaming
        } else {
            RenderMode::Buffered
        }
    }
}

/// Serialization format for buffered responses.
#[derive(Serialize, Debug)]
pub struct ResponseEnvelope {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Render the response onto the sink in the selected mode.
pub async fn render<W>(mode: RenderMode, response: Response, out: &mut W) -> RelayResult<()>
where
    W: AsyncWrite + Unpin,
{
    match mode {
        RenderMode::Buffered => render_buffered(response, out).await,
        RenderMode::Streaming => render_streamed(response, out).await,
    }
}

/// Materialize the full response, then write one envelope line.
///
/// Nothing reaches the sink until the body is complete; a transfer failure
/// surfaces as an error with no partial JSON emitted.
async fn render_buffered<W>(response: Response, out: &mut W) -> RelayResult<()>
where
    W: AsyncWrite + Unpin,
{
    let url = response.url().clone();
    let status = response.status().as_u16();
    let headers = collect_headers(response.headers(), &url)?;
    let body = response
        .text()
        .await
        .map_err(|e| RelayError::from_reqwest(e, &url))?;

    tracing::debug!(status, body_bytes = body.len(), "Rendering buffered envelope");

    let envelope = ResponseEnvelope {
        status,
        headers,
        body,
    };
    let line = serde_json::to_string(&envelope).map_err(|e| RelayError::Io(std::io::Error::other(e)))?;
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}

/// Copy body chunks to the sink exactly as received, in order.
async fn render_streamed<W>(mut response: Response, out: &mut W) -> RelayResult<()>
where
    W: AsyncWrite + Unpin,
{
    let url = response.url().clone();
    let mut body_bytes = 0u64;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| RelayError::from_reqwest(e, &url))?
    {
        body_bytes += chunk.len() as u64;
        out.write_all(&chunk).await?;
    }
    out.flush().await?;

    tracing::debug!(body_bytes, "Streamed response body");
    Ok(())
}

/// Convert response headers to the envelope's string map.
///
/// A value that is not valid UTF-8 counts as a malformed backend response.
fn collect_headers(headers: &HeaderMap, url: &Url) -> RelayResult<HashMap<String, String>> {
    let mut map = HashMap::new();
    for (name, value) in headers {
        let value = value.to_str().map_err(|_| RelayError::Transport {
            url: url.to_string(),
            reason: format!("response header {name} is not valid UTF-8"),
        })?;
        map.insert(name.to_string(), value.to_string());
    }
    Ok(map)
}
