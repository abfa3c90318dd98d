//! Errors surfaced by the HTTP layer. Classification itself cannot fail.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("No URL provided")]
    MissingInput,

    #[error("Invalid request body: {0}")]
    MalformedInput(String),

    #[error("Invalid YouTube URL")]
    InvalidSourceReference,

    #[error("API Key missing in Backend")]
    MissingApiKey,

    #[error("Comment service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("YouTube API quota exceeded: {0}")]
    UpstreamQuotaExceeded(String),

    #[error("Comments are not accessible for this video: {0}")]
    UpstreamAccessDisabled(String),

    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingInput | ApiError::MalformedInput(_) => "missing-input",
            ApiError::InvalidSourceReference => "invalid-source-reference",
            ApiError::MissingApiKey => "configuration",
            ApiError::UpstreamUnavailable(_) => "upstream-unavailable",
            ApiError::UpstreamQuotaExceeded(_) => "upstream-quota-exceeded",
            ApiError::UpstreamAccessDisabled(_) => "upstream-access-disabled",
            ApiError::Upstream(_) => "upstream-error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingInput
            | ApiError::MalformedInput(_)
            | ApiError::InvalidSourceReference
            | ApiError::Upstream(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            ApiError::UpstreamQuotaExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::UpstreamAccessDisabled(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedInput(rejection.body_text())
    }
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Invalid YouTube URL")]
    pub error: String,
    #[schema(example = "invalid-source-reference")]
    pub kind: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), "❌ {}", self);
        } else {
            tracing::warn!(kind = self.kind(), "⚠️ {}", self);
        }

        let body = ErrorBody {
            error: self.to_string(),
            kind: self.kind().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
