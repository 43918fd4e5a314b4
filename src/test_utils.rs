//! Test utilities and fixtures for track-resolver tests.
//!
//! Provides a tiny local HTTP server so lookup tests exercise the real
//! `reqwest` client without touching the network.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::OneShotServer;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let server = OneShotServer::start(200, "[]").await;
//!     let client = LookupClient::with_endpoint(server.url(), TIMEOUT);
//!     // ... test logic
//!     assert!(server.request_line().await.starts_with("GET /?type=song"));
//! }
//! ```

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A local HTTP server that answers exactly one request.
///
/// The server runs on its own task and hands back the request line it
/// received, so tests can check what the client actually sent.
pub struct OneShotServer {
    url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    /// Start a server that replies with `status` and a JSON `body`
    pub async fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Test server has no address");

        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason_phrase(status),
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("Failed to accept");
            let request = read_request_head(&mut socket).await;
            socket
                .write_all(response.as_bytes())
                .await
                .expect("Failed to write response");
            let _ = socket.shutdown().await;
            request
        });

        Self {
            url: format!("http://{}/", addr),
            handle,
        }
    }

    /// Start a server that accepts a connection but never answers
    pub async fn stall() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Test server has no address");

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("Failed to accept");
            let request = read_request_head(&mut socket).await;
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
            request
        });

        Self {
            url: format!("http://{}/", addr),
            handle,
        }
    }

    /// Base URL of the server, suitable as a lookup endpoint
    pub fn url(&self) -> String {
        self.url.clone()
    }

    /// Wait for the request and return its first line
    pub async fn request_line(self) -> String {
        self.handle.await.expect("Test server task panicked")
    }
}

/// A local URL with nothing listening on it
pub async fn unused_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{}/", addr)
}

/// Read until the end of the request headers, returning the request line
async fn read_request_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = socket.read(&mut buf).await.expect("Failed to read request");
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
        if request.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    String::from_utf8_lossy(&request)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_server_url_is_local() {
        let server = OneShotServer::start(200, "[]").await;
        assert!(server.url().starts_with("http://127.0.0.1:"));
    }

    #[tokio::test]
    async fn test_unused_url_is_local() {
        let url = unused_local_url().await;
        assert!(url.starts_with("http://127.0.0.1:"));
    }
}
