//! Shared fakes for unit tests.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::client::error::TransportError;
use crate::client::models::analysis::AnalysisResult;
use crate::client::services::analysis_api::AnalysisApi;
use crate::client::services::notification::Notifier;
use crate::client::services::pulse::Pulse;

pub(crate) fn analysis(category: &str, details: &str) -> AnalysisResult {
    AnalysisResult { success: true, category: category.into(), details: details.into(), message: None }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RecordedCall {
    File { filename: String, len: usize },
    Text(String),
}

/// Scripted transport. Responses are served in push order; with no script
/// left every call fails with a 503.
#[derive(Default)]
pub(crate) struct MockAnalysisApi {
    responses: Mutex<VecDeque<Result<AnalysisResult, TransportError>>>,
    calls: Mutex<Vec<RecordedCall>>,
    watched: Mutex<Vec<Pulse>>,
    pulse_seen: Mutex<Vec<bool>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl MockAnalysisApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_response(&self, response: Result<AnalysisResult, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Records whether any watched pulse was up while a call was in flight.
    pub(crate) fn watch_pulse(&self, pulse: Pulse) {
        self.watched.lock().unwrap().push(pulse);
    }

    /// Makes every call wait for a permit on the returned `Notify`.
    pub(crate) fn hold_responses(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn pulse_during_calls(&self) -> Vec<bool> {
        self.pulse_seen.lock().unwrap().clone()
    }

    async fn respond(&self, call: RecordedCall) -> Result<AnalysisResult, TransportError> {
        self.calls.lock().unwrap().push(call);
        let seen = self.watched.lock().unwrap().iter().any(|p| p.is_pulsing());
        self.pulse_seen.lock().unwrap().push(seen);

        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TransportError::Status { status: 503, detail: None }))
    }
}

#[async_trait]
impl AnalysisApi for MockAnalysisApi {
    async fn submit_file(&self, content: Vec<u8>, filename: &str) -> Result<AnalysisResult, TransportError> {
        self.respond(RecordedCall::File { filename: filename.to_string(), len: content.len() }).await
    }

    async fn submit_text(&self, text: &str) -> Result<AnalysisResult, TransportError> {
        self.respond(RecordedCall::Text(text.to_string())).await
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub(crate) fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub(crate) fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show_success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn show_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Accepts a single HTTP connection, replies with `status` and a JSON `body`,
/// and hands back the raw request text.
pub(crate) async fn serve_once(status: &str, body: &str) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let raw = read_request(&mut stream).await;
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;
        raw
    });

    (addr, handle)
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else { continue };
        let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
        let body = &buf[header_end + 4..];
        let content_length = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok());

        match content_length {
            Some(len) if body.len() >= len => break,
            Some(_) => continue,
            None if headers.contains("transfer-encoding: chunked") => {
                if body.ends_with(b"0\r\n\r\n") {
                    break;
                }
            }
            None => break,
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
