//! Thin REST transport over the `{data, error}` envelope.
//!
//! Every helper sends one request, maps the HTTP status onto the error
//! taxonomy, and unwraps the envelope. Callers work with domain types only.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use hearth_shared::{ApiEnvelope, DataError, Result};

use crate::config::AppConfig;

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| DataError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        let resp = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| DataError::Transport(e.to_string()))?;
        decode(resp).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        debug!(path, "POST");
        let resp = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| DataError::Transport(e.to_string()))?;
        decode(resp).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path, "PATCH");
        let resp = self
            .http
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| DataError::Transport(e.to_string()))?;
        decode(resp).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "DELETE");
        let resp = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(|e| DataError::Transport(e.to_string()))?;
        decode(resp).await
    }
}

/// Unwrap the envelope, turning non-2xx statuses into typed errors. The
/// server's `error` string is kept as the message when present.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    let envelope: ApiEnvelope<T> = resp
        .json()
        .await
        .map_err(|e| DataError::Transport(format!("invalid response body: {e}")))?;

    if status.is_success() {
        return envelope
            .data
            .ok_or_else(|| DataError::Transport("response envelope has no data".into()));
    }

    let message = envelope
        .error
        .unwrap_or_else(|| format!("server answered {status}"));
    Err(match status.as_u16() {
        400 => DataError::Validation(message),
        404 => DataError::NotFound("resource"),
        409 => DataError::Conflict(message),
        _ => DataError::Transport(message),
    })
}
