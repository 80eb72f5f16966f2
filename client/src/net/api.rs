//! HTTP call to the analysis relay.
//!
//! Client-side (hydrate) only: one multipart `POST` via `gloo-net`. Response
//! interpretation is a pure function so it is testable off the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is folded into `Result<AnalysisReport, SubmitError>`. The
//! error's `Display` is exactly the banner text, so the orchestrator never
//! formats messages itself.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AnalysisReport, ErrorPayload};

/// Why a submission produced no report.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never completed or the body was not JSON.
    #[error("Network error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("{0}")]
    Service(String),
}

/// Turn a completed response into a report or a banner-ready error.
///
/// `body` is the outcome of parsing the response as JSON, which happens
/// regardless of status.
///
/// # Errors
///
/// Returns [`SubmitError::Transport`] when the body could not be parsed and
/// [`SubmitError::Service`] when `ok` is false.
pub fn interpret_response(ok: bool, body: Result<serde_json::Value, String>) -> Result<AnalysisReport, SubmitError> {
    let body = body.map_err(SubmitError::Transport)?;
    if !ok {
        return Err(SubmitError::Service(ErrorPayload::from_value(&body).message()));
    }
    Ok(AnalysisReport::from_value(&body))
}

/// Upload `file` to the relay and wait for the report.
///
/// # Errors
///
/// See [`interpret_response`]; request construction and transport failures
/// are reported as [`SubmitError::Transport`].
#[cfg(feature = "hydrate")]
pub async fn analyze_document(file: &web_sys::File) -> Result<AnalysisReport, SubmitError> {
    use crate::consts::{ANALYZE_ENDPOINT, DOCUMENT_FIELD};

    let form = web_sys::FormData::new().map_err(|e| SubmitError::Transport(js_message(&e)))?;
    form.append_with_blob_and_filename(DOCUMENT_FIELD, file, &file.name())
        .map_err(|e| SubmitError::Transport(js_message(&e)))?;

    let resp = gloo_net::http::Request::post(ANALYZE_ENDPOINT)
        .body(form)
        .map_err(|e| SubmitError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let ok = resp.ok();
    let body = resp.json::<serde_json::Value>().await.map_err(|e| e.to_string());
    interpret_response(ok, body)
}

#[cfg(feature = "hydrate")]
fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
