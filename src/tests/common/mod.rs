// tests/common/mod.rs
pub use axum::Router;
pub use serde_json::json;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;
use std::time::Duration;

use httpmock::prelude::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::{Client, Credentials};

pub const TEST_CLIENT_ID: &str = "test-client";
pub const TEST_CLIENT_SECRET: &str = "test-secret";
pub const TEST_ACCESS_TOKEN: &str = "tok-1";

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn credentials() -> Credentials {
    Credentials::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET).expect("credentials")
}

pub fn build_client(base_url: &str) -> Client {
    Client::builder()
        .credentials(credentials())
        .base_url(base_url)
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client")
}

pub fn token_body(access_token: &str, expires_in: i64) -> serde_json::Value {
    json!({
        "access_token": access_token,
        "token_type": "Bearer",
        "scope": "extrato.read",
        "expires_in": expires_in
    })
}

/// Token endpoint answering with `TEST_ACCESS_TOKEN`.
pub async fn mock_token_endpoint(server: &MockServer, expires_in: i64) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(POST).path("/oauth/v2/token");
            then.status(200).json_body(token_body(TEST_ACCESS_TOKEN, expires_in));
        })
        .await
}

/// Raw HTTP responder whose answers promise more body than they send, so the
/// status line arrives and reading the body fails. With `serve_token` the token
/// route answers normally and only the other routes are cut short.
pub async fn spawn_truncated_responder(status_line: &'static str, serve_token: bool) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let head = read_request_head(&mut socket).await;
                let response = if serve_token && head.starts_with("POST /oauth/v2/token") {
                    let body = token_body(TEST_ACCESS_TOKEN, 3600).to_string();
                    format!(
                        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    )
                } else {
                    format!(
                        "HTTP/1.1 {status_line}\r\ncontent-type: text/plain\r\ncontent-length: 64\r\nconnection: close\r\n\r\npartial"
                    )
                };
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });
    (handle, addr)
}

/// Read one request (head and declared body) and return the head.
async fn read_request_head(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let mut expected: Option<usize> = None;
    let mut head = String::new();
    loop {
        if let Some(total) = expected {
            if buf.len() >= total {
                return head;
            }
        }
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            return head;
        }
        buf.extend_from_slice(&chunk[..n]);
        if expected.is_none() {
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                head = String::from_utf8_lossy(&buf[..end]).into_owned();
                let content_length = head
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                expected = Some(end + 4 + content_length);
            }
        }
    }
}
