//! Host configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:5000/analyze";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("ANALYZE_UPSTREAM_URL must be an http(s) URL, got '{0}'")]
    InvalidUpstreamUrl(String),
    #[error("MAX_UPLOAD_BYTES must be a positive integer, got '{0}'")]
    InvalidUploadLimit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub upstream_url: String,
    pub timeouts: UpstreamTimeouts,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ANALYZE_UPSTREAM_URL`: analysis service endpoint, default local `:5000/analyze`
    /// - `ANALYZE_REQUEST_TIMEOUT_SECS`: default 120
    /// - `ANALYZE_CONNECT_TIMEOUT_SECS`: default 10
    /// - `MAX_UPLOAD_BYTES`: default 32 MiB
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a present value cannot be used.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let upstream_url = parse_upstream_url(std::env::var("ANALYZE_UPSTREAM_URL").ok().as_deref())?;
        let timeouts = UpstreamTimeouts {
            request_secs: env_parse_u64("ANALYZE_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("ANALYZE_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let max_upload_bytes = parse_upload_limit(std::env::var("MAX_UPLOAD_BYTES").ok().as_deref())?;

        Ok(Self { port, upstream_url, timeouts, max_upload_bytes })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream_url: DEFAULT_UPSTREAM_URL.to_owned(),
            timeouts: UpstreamTimeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(v.to_owned())),
    }
}

fn parse_upstream_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.unwrap_or(DEFAULT_UPSTREAM_URL).trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_owned())
    } else {
        Err(ConfigError::InvalidUpstreamUrl(url.to_owned()))
    }
}

fn parse_upload_limit(raw: Option<&str>) -> Result<usize, ConfigError> {
    match raw {
        None => Ok(DEFAULT_MAX_UPLOAD_BYTES),
        Some(v) => match v.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::InvalidUploadLimit(v.to_owned())),
        },
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
