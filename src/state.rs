//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the upstream relay client and the parsed host configuration.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::proxy::{AnalyzeProxy, ProxyError};

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<AnalyzeProxy>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// # Errors
    ///
    /// Propagates [`ProxyError`] from building the upstream HTTP client.
    pub fn new(config: ServerConfig) -> Result<Self, ProxyError> {
        let proxy = AnalyzeProxy::new(&config)?;
        Ok(Self { proxy: Arc::new(proxy), config: Arc::new(config) })
    }
}
