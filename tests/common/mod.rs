//! Shared utilities for integration testing.
//!
//! A small httpbin-style backend on a raw TCP listener, serving the routes
//! the relay scenarios exercise. Bound to an ephemeral port so tests can run
//! in parallel.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

/// Deterministic binary payload served by `/bytes`. Covers every byte value,
/// so it is not valid UTF-8.
pub fn binary_blob() -> Vec<u8> {
    (0..4096u32).map(|i| (i % 256) as u8).collect()
}

/// Start the mock backend and return its address.
pub async fn start_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    tokio::spawn(async move {
                        let _ = handle_connection(socket).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

async fn handle_connection(socket: TcpStream) -> std::io::Result<()> {
    let (read_half, mut write_half) = socket.into_split();
    let mut reader = BufReader::new(read_half);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).await?;
    let mut parts = request_line.split_whitespace();
    let _method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/").to_string();

    // Request headers, keyed exactly as received for the /headers echo.
    let mut headers = BTreeMap::new();
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).await?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_string();
            let value = value.trim().to_string();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            }
            headers.insert(name, value);
        }
    }

    let mut body = vec![0u8; content_length];
    if content_length > 0 {
        reader.read_exact(&mut body).await?;
    }

    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path, query),
        None => (target.as_str(), ""),
    };

    let (status, content_type, payload): (u16, &str, Vec<u8>) = if path == "/json" {
        (
            200,
            "application/json",
            br#"{"slideshow":{"title":"Sample Slide Show"}}"#.to_vec(),
        )
    } else if let Some(code) = path.strip_prefix("/status/") {
        (code.parse().unwrap_or(200), "text/plain", Vec::new())
    } else if path == "/get" {
        let args: BTreeMap<&str, &str> = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .collect();
        let reply = serde_json::json!({ "args": args });
        (200, "application/json", reply.to_string().into_bytes())
    } else if path == "/post" {
        let body_text = String::from_utf8_lossy(&body).to_string();
        let json: serde_json::Value =
            serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        let reply = serde_json::json!({ "data": body_text, "json": json });
        (200, "application/json", reply.to_string().into_bytes())
    } else if path == "/headers" {
        let reply = serde_json::json!({ "headers": headers });
        (200, "application/json", reply.to_string().into_bytes())
    } else if path == "/bytes" {
        (200, "application/octet-stream", binary_blob())
    } else if path == "/html" {
        (
            200,
            "text/html; charset=utf-8",
            b"<!DOCTYPE html>\n<html><body><h1>Herman Melville</h1></body></html>\n".to_vec(),
        )
    } else if let Some(secs) = path.strip_prefix("/delay/") {
        let secs: u64 = secs.parse().unwrap_or(0);
        tokio::time::sleep(Duration::from_secs(secs)).await;
        let reply = serde_json::json!({ "delay": secs });
        (200, "application/json", reply.to_string().into_bytes())
    } else {
        (404, "text/plain", b"not found".to_vec())
    };

    let status_text = match status {
        200 => "200 OK".to_string(),
        404 => "404 Not Found".to_string(),
        429 => "429 Too Many Requests".to_string(),
        500 => "500 Internal Server Error".to_string(),
        502 => "502 Bad Gateway".to_string(),
        503 => "503 Service Unavailable".to_string(),
        _ => format!("{status} Unknown"),
    };

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status_text,
        content_type,
        payload.len()
    );
    write_half.write_all(head.as_bytes()).await?;
    write_half.write_all(&payload).await?;
    write_half.shutdown().await?;
    Ok(())
}
