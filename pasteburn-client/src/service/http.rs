//! HTTP implementation of the paste service contract.
//!
//! # Example
//!
//! ```rust,ignore
//! use pasteburn_client::{AccessKey, HttpPasteService, PasteService, ServiceConfig};
//!
//! let service = HttpPasteService::new(ServiceConfig::local())?;
//! let key = AccessKey::generate();
//!
//! let created = service.create(&key, "hello").await?;
//! println!("id: {:?}", created.id());
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{PasteService, CREATE_PATH, VIEW_PATH};
use crate::config::ServiceConfig;
use crate::types::{AccessKey, CreatePasteRequest, PasteId, PasteResponse};
use crate::{PasteError, Result};

/// Paste service reached over HTTP.
pub struct HttpPasteService {
    config: ServiceConfig,
    client: reqwest::Client,
}

impl HttpPasteService {
    /// Create a client for the configured service.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| PasteError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        if !config.is_transport_protected() {
            tracing::warn!(
                base_url = %config.base_url,
                "paste service is plain http on a non-loopback host; access keys travel unencrypted"
            );
        }

        Ok(Self { config, client })
    }

    /// Client for a service on the local machine.
    pub fn local() -> Result<Self> {
        Self::new(ServiceConfig::local())
    }

    /// Get the configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Build the full URL for an API endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Decode a response body, mapping failures to `PasteError`.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        id: Option<&PasteId>,
    ) -> Result<T> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PasteError::Serialization(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(self.map_status_error(status.as_u16(), &text, id));
        }

        serde_json::from_str(&text).map_err(|e| {
            PasteError::Serialization(format!("Failed to parse paste service response: {}", e))
        })
    }

    /// Map HTTP status codes to PasteError.
    fn map_status_error(&self, status: u16, error_text: &str, id: Option<&PasteId>) -> PasteError {
        let body = error_text.trim().to_string();
        match status {
            400 | 405 | 422 => PasteError::InvalidRequest(format!("status {}: {}", status, body)),
            404 => PasteError::not_found(id.map(ToString::to_string).unwrap_or_default()),
            429 => PasteError::RateLimited {
                retry_after_ms: 5000,
            },
            500..=599 => PasteError::Server { status, body },
            _ => PasteError::Status { status, body },
        }
    }

    /// Map reqwest errors to PasteError.
    fn map_reqwest_error(&self, operation: &str, e: reqwest::Error) -> PasteError {
        if e.is_timeout() {
            PasteError::ConnectionTimeout {
                operation: operation.to_string(),
                timeout_ms: self.config.timeout_secs * 1000,
            }
        } else if e.is_connect() {
            PasteError::ConnectionFailed {
                target: self.config.base_url.clone(),
                reason: e.to_string(),
            }
        } else {
            PasteError::Transport(format!("{} failed: {}", operation, e))
        }
    }
}

#[async_trait]
impl PasteService for HttpPasteService {
    async fn view(&self, key: &AccessKey, id: &PasteId) -> Result<PasteResponse> {
        let url = self.url(VIEW_PATH);
        let id_text = id.to_string();
        tracing::debug!(%url, id = %id_text, "requesting paste");

        let response = self
            .client
            .get(&url)
            .query(&[("key", key.as_str()), ("id", id_text.as_str())])
            .send()
            .await
            .map_err(|e| self.map_reqwest_error("paste view", e))?;

        self.handle_response(response, Some(id)).await
    }

    async fn create(&self, key: &AccessKey, body: &str) -> Result<PasteResponse> {
        let url = self.url(CREATE_PATH);
        tracing::debug!(%url, body_len = body.len(), "creating paste");

        let response = self
            .client
            .post(&url)
            .json(&CreatePasteRequest {
                key: key.as_str(),
                body,
            })
            .send()
            .await
            .map_err(|e| self.map_reqwest_error("paste create", e))?;

        self.handle_response(response, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let service = HttpPasteService::new(ServiceConfig::new("http://127.0.0.1:8000/")).unwrap();
        assert_eq!(
            service.url(VIEW_PATH),
            "http://127.0.0.1:8000/api/text/view"
        );
        assert_eq!(
            service.url(CREATE_PATH),
            "http://127.0.0.1:8000/api/text/create"
        );
    }

    #[test]
    fn test_status_mapping() {
        let service = HttpPasteService::local().unwrap();
        let id = PasteId::parse("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap();

        match service.map_status_error(404, "", Some(&id)) {
            PasteError::NotFound { id } => assert_eq!(id, "3fa85f64-5717-4562-b3fc-2c963f66afa6"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(matches!(
            service.map_status_error(405, "", None),
            PasteError::InvalidRequest(_)
        ));
        assert!(matches!(
            service.map_status_error(503, "down", None),
            PasteError::Server { status: 503, .. }
        ));
        assert!(matches!(
            service.map_status_error(302, "", None),
            PasteError::Status { status: 302, .. }
        ));
    }
}
