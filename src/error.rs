//! Error Types
//!
//! Failures of a ranking request, split by who is at fault so the HTTP layer
//! can choose a status code without looking at message text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    /// The caller sent no query, or only whitespace.
    #[error("No query provided")]
    EmptyQuery,

    /// A query-string parameter could not be decoded (e.g. `top_k=abc`).
    #[error("Invalid query parameters: {0}")]
    InvalidParameters(String),

    /// The platform credential was not configured.
    #[error("YOUTUBE_API_KEY missing. Set it in the environment or in .env")]
    MissingCredential,

    /// Transport failure or non-success status from the platform.
    #[error("{endpoint} request failed: {source}")]
    Upstream {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The platform answered, but the body was not the expected JSON.
    #[error("{endpoint} returned a malformed response: {reason}")]
    MalformedResponse {
        endpoint: &'static str,
        reason: String,
    },
}

impl RankError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RankError::EmptyQuery | RankError::InvalidParameters(_) => StatusCode::BAD_REQUEST,
            RankError::MissingCredential
            | RankError::Upstream { .. }
            | RankError::MalformedResponse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for RankError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
