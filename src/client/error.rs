//! Error types shared by the transport and the submission coordinators.

use thiserror::Error;

/// Shown when the server did not send a usable `detail` field.
pub const UNKNOWN_ERROR_DETAIL: &str = "erro desconhecido";

#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Invalid API_URL: {0}")]
    InvalidApiUrl(String),
}

/// The only failure kind the client recognises: anything that went wrong
/// between building the request and decoding the response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Request could not be built or sent, or the connection dropped
    #[error("Network error: {0}")]
    Network(String),
    /// Server answered with a non-2xx status
    #[error("Server returned {status}: {}", .detail.as_deref().unwrap_or(UNKNOWN_ERROR_DETAIL))]
    Status { status: u16, detail: Option<String> },
    /// 2xx response whose body is not a valid analysis result
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Server-provided detail message, when the error payload carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            TransportError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text interpolated into the error toast.
    pub fn user_detail(&self) -> &str {
        self.detail().unwrap_or(UNKNOWN_ERROR_DETAIL)
    }
}

/// Pulls a human readable message out of an error body.
///
/// FastAPI sends either `{"detail": "..."}` or, for validation failures,
/// `{"detail": [{"msg": "..."}, ...]}`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if msgs.is_empty() { None } else { Some(msgs.join("; ")) }
        }
        _ => None,
    }
}
