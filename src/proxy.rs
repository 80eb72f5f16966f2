//! Relay from the browser's `/analyze` upload to the analysis service.
//!
//! DESIGN
//! ======
//! The host does not parse the multipart body. It forwards the raw bytes and
//! the original `Content-Type` (which carries the boundary) and hands the
//! upstream status and body back unchanged. Only transport failures are
//! turned into host-authored errors.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::StatusCode;
use thiserror::Error;

use crate::config::ServerConfig;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("Analysis service unreachable: {0}")]
    Unreachable(String),
    #[error("Analysis service response unreadable: {0}")]
    BodyRead(String),
}

/// Upstream reply passed through to the browser.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

/// HTTP client bound to one analysis endpoint.
pub struct AnalyzeProxy {
    http: reqwest::Client,
    upstream_url: String,
}

impl AnalyzeProxy {
    /// # Errors
    ///
    /// Returns [`ProxyError::HttpClientBuild`] if the TLS backend cannot be initialised.
    pub fn new(config: &ServerConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, upstream_url: config.upstream_url.clone() })
    }

    #[must_use]
    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    /// Forward one upload body and return whatever the service answered.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Unreachable`] when no response arrives (refused,
    /// timed out) and [`ProxyError::BodyRead`] when the body stream breaks.
    pub async fn forward(&self, content_type: &str, body: Bytes) -> Result<UpstreamReply, ProxyError> {
        let resp = self
            .http
            .post(&self.upstream_url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| ProxyError::Unreachable(e.to_string()))?;

        let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let body = resp.bytes().await.map_err(|e| ProxyError::BodyRead(e.to_string()))?;
        Ok(UpstreamReply { status, body })
    }
}

/// Whether a request `Content-Type` can carry the `pdf` form field.
#[must_use]
pub fn is_multipart(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| {
        ct.split(';')
            .next()
            .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("multipart/form-data"))
    })
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
