//! `POST /analyze` relay handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::proxy::is_multipart;
use crate::state::AppState;

pub const MISSING_DOCUMENT_MESSAGE: &str = "No PDF file provided. Use field name 'pdf'.";
pub const UPLOAD_TOO_LARGE_PREFIX: &str = "Uploaded file is too large. The limit is ";

pub async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let content_type = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let Some(content_type) = content_type.filter(|ct| is_multipart(Some(ct))) else {
        tracing::debug!(?content_type, "analyze request without multipart body");
        return error_response(StatusCode::BAD_REQUEST, MISSING_DOCUMENT_MESSAGE);
    };
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejection_response(&rejection, state.config.max_upload_bytes),
    };

    let bytes = body.len();
    match state.proxy.forward(content_type, body).await {
        Ok(reply) => {
            tracing::info!(status = reply.status.as_u16(), bytes, "analysis relayed");
            (reply.status, [(header::CONTENT_TYPE, "application/json")], reply.body).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, upstream = state.proxy.upstream_url(), "analysis relay failed");
            error_response(StatusCode::BAD_GATEWAY, &e.to_string())
        }
    }
}

/// Body limit and read failures in the same `{"error": ...}` shape as the rest.
fn body_rejection_response(rejection: &BytesRejection, limit: usize) -> Response {
    let status = rejection.status();
    tracing::warn!(status = status.as_u16(), limit, reason = %rejection.body_text(), "analyze body rejected");
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        error_response(status, &format!("{UPLOAD_TOO_LARGE_PREFIX}{limit} bytes."))
    } else {
        error_response(status, &rejection.body_text())
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
#[path = "analyze_test.rs"]
mod tests;
