//! YouTube comment source.
//!
//! Comments are pulled from the Data API v3 `commentThreads` endpoint in
//! pages of at most 100, until the per-request cap is reached or the video
//! runs out of comments. The last `nextPageToken` is handed back so the
//! caller can resume from where this request stopped.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::sleep;

use crate::config::Settings;
use crate::error::ApiError;

/// Largest page the Data API will return.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pulls the video id out of a `watch?v=` or `youtu.be/` URL.
pub fn extract_video_id(url: &str) -> Option<&str> {
    let url = url.trim();
    let id = if url.contains("v=") {
        url.split("v=").nth(1)?.split('&').next()?
    } else if url.contains("youtu.be/") {
        url.split("youtu.be/").nth(1)?.split('?').next()?
    } else {
        return None;
    };

    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// One page of comment texts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentPage {
    pub texts: Vec<String>,
    pub next_page_token: Option<String>,
}

/// Anything that can list the comments of a video page by page.
#[async_trait]
pub trait CommentSource: Send + Sync {
    async fn fetch_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
        max_results: u32,
    ) -> Result<CommentPage, ApiError>;
}

/// Comments gathered for one request plus the token to continue from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedComments {
    pub texts: Vec<String>,
    pub next_page_token: Option<String>,
}

/// Fetches pages from `source` starting at `page_token` until `max_total`
/// comments are collected or no further page exists.
pub async fn collect_comments(
    source: &dyn CommentSource,
    video_id: &str,
    page_token: Option<String>,
    max_total: usize,
) -> Result<CollectedComments, ApiError> {
    let mut texts: Vec<String> = Vec::new();
    let mut next_page_token = page_token;

    while texts.len() < max_total {
        let remaining = max_total - texts.len();
        let page_size = remaining.min(MAX_PAGE_SIZE as usize) as u32;

        let page = source
            .fetch_page(video_id, next_page_token.as_deref(), page_size)
            .await?;
        let fetched = page.texts.len();
        texts.extend(page.texts);
        next_page_token = page.next_page_token;

        tracing::debug!(video_id, fetched, total = texts.len(), "📥 comment page");

        if next_page_token.is_none() || fetched == 0 {
            break;
        }
    }

    Ok(CollectedComments {
        texts,
        next_page_token,
    })
}

// ============================================================================
// Data API wire types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadsResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
    next_page_token: Option<String>,
    error: Option<UpstreamError>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: ThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    #[serde(default)]
    text_display: String,
}

#[derive(Debug, Deserialize)]
struct UpstreamError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<UpstreamErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
    #[serde(default)]
    reason: String,
}

/// Maps a Data API error body onto the error the caller can act on.
fn map_upstream_error(err: UpstreamError) -> ApiError {
    let reason = err.errors.first().map(|e| e.reason.as_str()).unwrap_or("");
    match reason {
        "quotaExceeded" | "dailyLimitExceeded" | "rateLimitExceeded" => {
            ApiError::UpstreamQuotaExceeded(err.message)
        }
        "commentsDisabled" | "forbidden" => ApiError::UpstreamAccessDisabled(err.message),
        "videoNotFound" => ApiError::InvalidSourceReference,
        "backendError" | "internalError" => ApiError::UpstreamUnavailable(err.message),
        _ => ApiError::Upstream(err.message),
    }
}

/// Turns one HTTP exchange into a page or the error it stands for.
///
/// A Data API error object wins over the status code. Without one, 5xx
/// statuses are reported as unavailable (and retried) and other non-2xx
/// statuses as a plain upstream rejection.
fn read_response(status: StatusCode, body: &[u8]) -> Result<CommentPage, ApiError> {
    let parsed: Result<CommentThreadsResponse, _> = serde_json::from_slice(body);

    match parsed {
        Ok(CommentThreadsResponse {
            error: Some(err), ..
        }) => Err(map_upstream_error(err)),
        _ if status.is_server_error() => {
            Err(ApiError::UpstreamUnavailable(format!("HTTP {}", status)))
        }
        _ if !status.is_success() => Err(ApiError::Upstream(format!("HTTP {}", status))),
        Ok(parsed) => Ok(CommentPage {
            texts: parsed
                .items
                .into_iter()
                .map(|item| item.snippet.top_level_comment.snippet.text_display)
                .collect(),
            next_page_token: parsed.next_page_token,
        }),
        Err(e) => Err(ApiError::UpstreamUnavailable(format!(
            "unexpected response: {}",
            e
        ))),
    }
}

// ============================================================================
// HTTP client
// ============================================================================

/// `CommentSource` backed by the YouTube Data API.
pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    max_attempts: u32,
}

impl YouTubeClient {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.upstream_timeout)
            .build()?;

        Ok(Self {
            http,
            api_key: settings.youtube_api_key.clone(),
            base_url: settings.youtube_api_base.clone(),
            max_attempts: settings.upstream_max_attempts.max(1),
        })
    }

    async fn fetch_page_attempt(
        &self,
        api_key: &str,
        video_id: &str,
        page_token: Option<&str>,
        max_results: u32,
    ) -> Result<CommentPage, ApiError> {
        let max_results = max_results.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("part", "snippet"),
            ("videoId", video_id),
            ("key", api_key),
            ("maxResults", max_results.as_str()),
            ("textFormat", "plainText"),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let response = self
            .http
            .get(format!("{}/commentThreads", self.base_url))
            .query(&params)
            .send()
            .await
            .map_err(|e| ApiError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::UpstreamUnavailable(e.to_string()))?;

        read_response(status, &body)
    }
}

#[async_trait]
impl CommentSource for YouTubeClient {
    async fn fetch_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
        max_results: u32,
    ) -> Result<CommentPage, ApiError> {
        let api_key = self.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;
        let mut last_error = ApiError::UpstreamUnavailable("no attempt made".to_string());

        for attempt in 1..=self.max_attempts {
            if attempt > 1 {
                tracing::info!("🔄 Retry attempt {}/{} for video {}", attempt, self.max_attempts, video_id);
                sleep(Duration::from_millis(250 * u64::from(attempt))).await;
            }

            match self
                .fetch_page_attempt(api_key, video_id, page_token, max_results)
                .await
            {
                Ok(page) => return Ok(page),
                Err(ApiError::UpstreamUnavailable(msg)) => {
                    tracing::warn!("⚠️ [YouTube] attempt {} failed: {}", attempt, msg);
                    last_error = ApiError::UpstreamUnavailable(msg);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error)
    }
}
