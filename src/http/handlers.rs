//! HTTP request handlers
//!
//! Every JSON response carries the same header set: UTF-8 JSON content type,
//! a wildcard CORS origin and `x-robots-tag: noindex`.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::error::TranscriptError;
use crate::state::AppState;
use crate::transcript::pipeline::TranscriptParams;
use crate::transcript::{fetch_transcript, TranscriptOutcome, TranscriptRequest};

/// Message for videos without caption tracks
pub const NO_SUBTITLES: &str = "El video no expone subtítulos";

/// Message for failures that carry no text of their own
pub const UNEXPECTED_ERROR: &str = "Error inesperado";

/// HTTP error type
#[derive(Debug)]
pub enum HttpError {
    NotFound(String),
    InternalError(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let message = if message.is_empty() {
            UNEXPECTED_ERROR.to_string()
        } else {
            message
        };

        json_response(status, &json!({ "error": message }))
    }
}

impl From<TranscriptError> for HttpError {
    // Every failure is a 500; upstream statuses only appear in the message.
    fn from(err: TranscriptError) -> Self {
        HttpError::InternalError(err.to_string())
    }
}

/// Headers attached to every JSON response
fn json_headers() -> [(HeaderName, &'static str); 3] {
    [
        (header::CONTENT_TYPE, "application/json; charset=utf-8"),
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (HeaderName::from_static("x-robots-tag"), "noindex"),
    ]
}

/// Serialize `body` with the JSON header set
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (status, json_headers(), Json(body)).into_response()
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint
pub async fn version_check() -> &'static str {
    concat!("yt-transcript-server v", env!("CARGO_PKG_VERSION"))
}

/// Transcript endpoint
/// GET /?url=<id or url>&langs=<comma list>&tlang=<lang>
pub async fn transcript(
    State(state): State<Arc<AppState>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, HttpError> {
    let Query(pairs) = pairs.map_err(|e| HttpError::InternalError(e.body_text()))?;
    let params = TranscriptParams::from_pairs(pairs);
    let request = TranscriptRequest::from_params(params, &state.config.default_langs);

    let outcome = fetch_transcript(&state.youtube, &request)
        .await
        .map_err(|e| {
            warn!("Transcript request for {:?} failed: {}", request.input, e);
            HttpError::from(e)
        })?;

    match outcome {
        TranscriptOutcome::Found(result) => Ok(json_response(StatusCode::OK, &result)),
        TranscriptOutcome::NoSubtitles => Err(HttpError::NotFound(NO_SUBTITLES.to_string())),
    }
}
