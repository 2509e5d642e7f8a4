//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use docjob::api::{DocRequest, JobRequest, Sleeper};

/// Sleeper that records requested delays instead of waiting.
#[derive(Default, Clone)]
pub struct RecordingSleeper {
    delays: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

/// A minimal valid job request.
pub fn sample_request() -> JobRequest {
    JobRequest {
        doc_request: DocRequest {
            title: "Release notes for v1.2.0".into(),
            body: "Bug fixes and performance work".into(),
            source_connection: "acme/widgets".into(),
            publications: None,
            labels: None,
            comments: None,
            relevant_links: None,
            event_type: None,
            changes: vec![],
        },
    }
}

/// A job record as the API returns it.
pub fn job_json(id: &str, state: &str) -> Value {
    json!({
        "id": id,
        "orgId": "org_1",
        "type": "docRequest",
        "state": state
    })
}

/// Write an event payload into a temp dir and return (dir guard, path).
pub fn write_event_payload(payload: &Value) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("event.json");
    std::fs::write(&path, payload.to_string()).expect("Failed to write event payload");
    (dir, path)
}

/// Start a server that answers every request with `status_line` and a body
/// cut short of its Content-Length, then closes the connection.
///
/// Returns the base URI and the number of accepted connections.
pub async fn spawn_truncated_responder(status_line: &'static str) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    let connections = Arc::new(AtomicUsize::new(0));
    let counter = connections.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort",
                status_line
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}", addr), connections)
}

/// Consume one request (headers plus Content-Length body).
async fn read_request(socket: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
        let length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= end + 4 + length {
            return;
        }
    }
}
