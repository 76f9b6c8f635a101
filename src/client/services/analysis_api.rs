//! HTTP transport towards the analysis service.
//!
//! Both operations send a multipart body with a single field (`file` or
//! `text`) to `POST {API_URL}/analysis`. Failures come back as
//! [`TransportError`] with no retries.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::client::error::{extract_detail, TransportError};
use crate::client::models::analysis::AnalysisResult;
use crate::client::utils::file_info::mime_for_filename;

#[async_trait]
pub trait AnalysisApi: Send + Sync {
    async fn submit_file(&self, content: Vec<u8>, filename: &str) -> Result<AnalysisResult, TransportError>;
    async fn submit_text(&self, text: &str) -> Result<AnalysisResult, TransportError>;
}

pub struct HttpAnalysisApi {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpAnalysisApi {
    pub fn new(endpoint: Url) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("classificador-emails/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn post(&self, form: Form) -> Result<AnalysisResult, TransportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to reach {}: {}", self.endpoint, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            log::debug!("[API] {} answered {} with body: {}", self.endpoint, status, body);
            return Err(TransportError::Status { status: status.as_u16(), detail: extract_detail(&body) });
        }

        serde_json::from_str::<AnalysisResult>(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AnalysisApi for HttpAnalysisApi {
    async fn submit_file(&self, content: Vec<u8>, filename: &str) -> Result<AnalysisResult, TransportError> {
        log::info!("[API] Uploading {} ({} bytes)", filename, content.len());
        let part = Part::bytes(content)
            .file_name(filename.to_string())
            .mime_str(mime_for_filename(filename))
            .map_err(|e| TransportError::Network(format!("Invalid MIME type: {}", e)))?;
        self.post(Form::new().part("file", part)).await
    }

    async fn submit_text(&self, text: &str) -> Result<AnalysisResult, TransportError> {
        log::info!("[API] Sending text ({} chars)", text.chars().count());
        self.post(Form::new().text("text", text.to_string())).await
    }
}
