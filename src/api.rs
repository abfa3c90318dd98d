//! HTTP surface: batch classification of submitted comments and of a
//! YouTube video's comments.

use axum::{
    extract::{FromRequest, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::classifier::classify;
use crate::emotion::{Emotion, Verdict};
use crate::error::{ApiError, ErrorBody};
use crate::youtube::{collect_comments, extract_video_id, CommentSource};

pub struct AppState {
    pub comments: Arc<dyn CommentSource>,
    /// Cap on comments pulled per YouTube request.
    pub max_comments: usize,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, analyze_text, analyze_youtube),
    components(
        schemas(
            AnalyzeTextRequest,
            AnalyzeTextResponse,
            AnalyzeYoutubeRequest,
            AnalyzeYoutubeResponse,
            AnalyzedComment,
            HealthResponse,
            ErrorBody,
            Emotion,
            Verdict
        )
    ),
    tags(
        (name = "analysis", description = "Emotion classification API")
    )
)]
pub struct ApiDoc;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(home))
        .route("/health", get(health))
        .route("/analyze/text", post(analyze_text))
        .route("/analyze/youtube", post(analyze_youtube))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `Json` extractor whose rejections use the same error body as every other failure.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// One classified comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzedComment {
    /// Position of the comment in the submitted (or fetched) list.
    pub id: usize,
    pub text: String,
    pub emotion: Emotion,
    pub score: u32,
}

impl AnalyzedComment {
    pub fn classify(id: usize, text: String) -> Self {
        let Verdict { emotion, score } = classify(&text);
        Self {
            id,
            text,
            emotion,
            score,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeTextRequest {
    /// Comments to classify. Entries that are not non-empty strings are skipped.
    #[serde(default)]
    #[schema(value_type = Vec<Object>, example = json!(["cant wait!!", "not bad"]))]
    pub comments: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeTextResponse {
    pub results: Vec<AnalyzedComment>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeYoutubeRequest {
    #[schema(example = "https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    pub url: Option<String>,
    /// Continuation token from a previous response.
    #[serde(rename = "pageToken")]
    pub page_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeYoutubeResponse {
    pub results: Vec<AnalyzedComment>,
    pub total_comments_analyzed: usize,
    #[schema(example = "YouTube: dQw4w9WgXcQ")]
    pub source: String,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "online")]
    pub status: String,
}

pub async fn home() -> &'static str {
    "Sentify API is Online and Running!"
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "analysis"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online".to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/analyze/text",
    request_body = AnalyzeTextRequest,
    responses(
        (status = 200, description = "Classified comments", body = AnalyzeTextResponse),
        (status = 400, description = "Body is not valid JSON of the expected shape", body = ErrorBody)
    ),
    tag = "analysis"
)]
pub async fn analyze_text(ApiJson(req): ApiJson<AnalyzeTextRequest>) -> Json<AnalyzeTextResponse> {
    let submitted = req.comments.len();
    let results: Vec<AnalyzedComment> = req
        .comments
        .into_iter()
        .enumerate()
        .filter_map(|(id, value)| match value {
            serde_json::Value::String(text) if !text.is_empty() => {
                Some(AnalyzedComment::classify(id, text))
            }
            _ => None,
        })
        .collect();

    tracing::info!("🧠 Classified {} of {} submitted comments", results.len(), submitted);

    Json(AnalyzeTextResponse { results })
}

#[utoipa::path(
    post,
    path = "/analyze/youtube",
    request_body = AnalyzeYoutubeRequest,
    responses(
        (status = 200, description = "Classified video comments", body = AnalyzeYoutubeResponse),
        (status = 400, description = "Missing or invalid URL, or upstream rejected the request", body = ErrorBody),
        (status = 403, description = "Comments disabled for the video", body = ErrorBody),
        (status = 429, description = "YouTube API quota exhausted", body = ErrorBody),
        (status = 500, description = "API key not configured", body = ErrorBody),
        (status = 502, description = "YouTube API unreachable", body = ErrorBody)
    ),
    tag = "analysis"
)]
pub async fn analyze_youtube(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<AnalyzeYoutubeRequest>,
) -> Result<Json<AnalyzeYoutubeResponse>, ApiError> {
    let url = req
        .url
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .ok_or(ApiError::MissingInput)?;
    let video_id = extract_video_id(url).ok_or(ApiError::InvalidSourceReference)?;

    tracing::info!("🎬 Fetching comments for video {}", video_id);

    let collected = collect_comments(
        state.comments.as_ref(),
        video_id,
        req.page_token,
        state.max_comments,
    )
    .await?;

    let results: Vec<AnalyzedComment> = collected
        .texts
        .into_iter()
        .enumerate()
        .map(|(id, text)| AnalyzedComment::classify(id, text))
        .collect();

    tracing::info!("✅ Classified {} comments for video {}", results.len(), video_id);

    Ok(Json(AnalyzeYoutubeResponse {
        total_comments_analyzed: results.len(),
        results,
        source: format!("YouTube: {}", video_id),
        next_page_token: collected.next_page_token,
    }))
}
