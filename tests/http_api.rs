//! Router-level tests: requests go through the full axum stack against a
//! scripted comment source, no network involved.

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use sentify::api::{router, AppState};
use sentify::error::ApiError;
use sentify::youtube::{CommentPage, CommentSource};

/// Returns a scripted sequence of pages (or one error) and records tokens.
struct ScriptedSource {
    pages: Mutex<Vec<Result<CommentPage, ApiError>>>,
    tokens: Mutex<Vec<Option<String>>>,
}

impl ScriptedSource {
    fn new(pages: Vec<Result<CommentPage, ApiError>>) -> Arc<Self> {
        Arc::new(Self {
            pages: Mutex::new(pages),
            tokens: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl CommentSource for ScriptedSource {
    async fn fetch_page(
        &self,
        _video_id: &str,
        page_token: Option<&str>,
        _max_results: u32,
    ) -> Result<CommentPage, ApiError> {
        self.tokens.lock().unwrap().push(page_token.map(str::to_string));
        let mut pages = self.pages.lock().unwrap();
        if pages.is_empty() {
            Ok(CommentPage::default())
        } else {
            pages.remove(0)
        }
    }
}

fn app_with(source: Arc<ScriptedSource>, max_comments: usize) -> Router {
    router(Arc::new(AppState {
        comments: source,
        max_comments,
    }))
}

fn app() -> Router {
    app_with(ScriptedSource::new(Vec::new()), 1000)
}

fn texts(texts: &[&str], next: Option<&str>) -> Result<CommentPage, ApiError> {
    Ok(CommentPage {
        texts: texts.iter().map(|t| t.to_string()).collect(),
        next_page_token: next.map(str::to_string),
    })
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn home_and_health() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Sentify API is Online and Running!");

    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "online" }));
}

#[tokio::test]
async fn analyze_text_classifies_and_keeps_positions() {
    let (status, body) = post_json(
        app(),
        "/analyze/text",
        json!({ "comments": ["I cant wait", 42, "", null, "not bad", "hate love"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "results": [
                { "id": 0, "text": "I cant wait", "emotion": "excited", "score": 10 },
                { "id": 4, "text": "not bad", "emotion": "positive", "score": 1 },
                { "id": 5, "text": "hate love", "emotion": "angry", "score": 2 }
            ]
        })
    );
}

#[tokio::test]
async fn analyze_text_without_comments_is_empty() {
    let (status, body) = post_json(app(), "/analyze/text", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "results": [] }));
}

#[tokio::test]
async fn analyze_youtube_collects_and_classifies() {
    let source = ScriptedSource::new(vec![
        texts(&["this is amazing", "semma"], Some("p2")),
        texts(&["why though"], None),
    ]);
    let (status, body) = post_json(
        app_with(source.clone(), 1000),
        "/analyze/youtube",
        json!({ "url": "https://www.youtube.com/watch?v=abc123&t=5" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "YouTube: abc123");
    assert_eq!(body["total_comments_analyzed"], 3);
    assert_eq!(body["nextPageToken"], Value::Null);
    assert_eq!(
        body["results"],
        json!([
            { "id": 0, "text": "this is amazing", "emotion": "happy", "score": 2 },
            { "id": 1, "text": "semma", "emotion": "excited", "score": 2 },
            { "id": 2, "text": "why though", "emotion": "confused", "score": 2 }
        ])
    );
    assert_eq!(
        *source.tokens.lock().unwrap(),
        vec![None, Some("p2".to_string())]
    );
}

#[tokio::test]
async fn analyze_youtube_forwards_page_token_and_returns_next() {
    let source = ScriptedSource::new(vec![texts(&["w", "w"], Some("p9"))]);
    let (status, body) = post_json(
        app_with(source.clone(), 2),
        "/analyze/youtube",
        json!({ "url": "https://youtu.be/xyz?si=share", "pageToken": "p8" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "YouTube: xyz");
    assert_eq!(body["nextPageToken"], "p9");
    assert_eq!(*source.tokens.lock().unwrap(), vec![Some("p8".to_string())]);
}

#[tokio::test]
async fn analyze_youtube_missing_url() {
    let (status, body) = post_json(app(), "/analyze/youtube", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No URL provided", "kind": "missing-input" }));
}

#[tokio::test]
async fn analyze_youtube_invalid_url() {
    let (status, body) = post_json(
        app(),
        "/analyze/youtube",
        json!({ "url": "https://vimeo.com/12345" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid-source-reference");
}

#[tokio::test]
async fn analyze_youtube_upstream_errors() {
    let cases = [
        (ApiError::MissingApiKey, StatusCode::INTERNAL_SERVER_ERROR, "configuration"),
        (
            ApiError::UpstreamQuotaExceeded("quota".into()),
            StatusCode::TOO_MANY_REQUESTS,
            "upstream-quota-exceeded",
        ),
        (
            ApiError::UpstreamAccessDisabled("disabled".into()),
            StatusCode::FORBIDDEN,
            "upstream-access-disabled",
        ),
        (
            ApiError::UpstreamUnavailable("timed out".into()),
            StatusCode::BAD_GATEWAY,
            "upstream-unavailable",
        ),
        (
            ApiError::Upstream("API key not valid".into()),
            StatusCode::BAD_REQUEST,
            "upstream-error",
        ),
    ];

    for (error, expected_status, expected_kind) in cases {
        let source = ScriptedSource::new(vec![Err(error)]);
        let (status, body) = post_json(
            app_with(source, 1000),
            "/analyze/youtube",
            json!({ "url": "https://www.youtube.com/watch?v=abc123" }),
        )
        .await;
        assert_eq!(status, expected_status);
        assert_eq!(body["kind"], expected_kind);
    }
}

#[tokio::test]
async fn malformed_bodies_use_error_json() {
    for (uri, body) in [
        ("/analyze/text", json!({ "comments": "not a list" })),
        ("/analyze/youtube", json!({ "url": 12345 })),
    ] {
        let (status, body) = post_json(app(), uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["kind"], "missing-input", "{}", uri);
        assert!(
            body["error"].as_str().unwrap().starts_with("Invalid request body"),
            "{}: {}",
            uri,
            body
        );
    }
}

#[tokio::test]
async fn unparseable_json_uses_error_json() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze/text")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{ comments: "))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["kind"], "missing-input");
}
