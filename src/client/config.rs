use std::env;
use url::Url;

use crate::client::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_TOAST_DURATION_MS: u64 = 5000;
const DEFAULT_MAX_UPLOAD_MB: u64 = 10;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub log_level: String,
    pub toast_duration_ms: u64,
    pub max_upload_mb: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: "info".to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            max_upload_mb: DEFAULT_MAX_UPLOAD_MB,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            api_url: env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            toast_duration_ms: env::var("TOAST_DURATION_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_TOAST_DURATION_MS),
            max_upload_mb: env::var("MAX_UPLOAD_MB").ok().and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_MAX_UPLOAD_MB),
        }
    }

    /// Full URL of the `POST /analysis` endpoint under the configured base.
    pub fn analysis_endpoint(&self) -> Result<Url, ConfigError> {
        let base = self.api_url.trim().trim_end_matches('/');
        let endpoint = format!("{}/analysis", base);
        let url = Url::parse(&endpoint).map_err(|e| ConfigError::InvalidApiUrl(format!("{}: {}", self.api_url, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidApiUrl(format!("unsupported scheme: {}", url.scheme())));
        }
        Ok(url)
    }

    pub fn toast_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.toast_duration_ms)
    }

    /// Exports LOG_LEVEL as RUST_LOG (unless already set) and starts env_logger.
    pub fn init_logging(&self) {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", &self.log_level);
        }
        let _ = env_logger::try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_appended_to_base_url() {
        let cfg = ClientConfig { api_url: "http://127.0.0.1:8000/api/".to_string(), ..ClientConfig::default() };
        assert_eq!(cfg.analysis_endpoint().unwrap().as_str(), "http://127.0.0.1:8000/api/analysis");
    }

    #[test]
    fn default_endpoint_points_at_local_api() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.analysis_endpoint().unwrap().as_str(), "http://localhost:8000/api/analysis");
        assert_eq!(cfg.toast_duration().as_millis(), 5000);
    }

    #[test]
    fn rejects_garbage_and_non_http_urls() {
        let cfg = ClientConfig { api_url: "not a url".to_string(), ..ClientConfig::default() };
        assert!(matches!(cfg.analysis_endpoint(), Err(ConfigError::InvalidApiUrl(_))));

        let cfg = ClientConfig { api_url: "ftp://example.com".to_string(), ..ClientConfig::default() };
        assert!(matches!(cfg.analysis_endpoint(), Err(ConfigError::InvalidApiUrl(_))));
    }
}
