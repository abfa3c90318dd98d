//! Runtime settings read from the environment (`.env` is loaded by `main`).

use std::env;
use std::time::Duration;

/// Placeholder value shipped in sample `.env` files; treated as unset.
const API_KEY_PLACEHOLDER: &str = "YOUTUBE_API_KEY";

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub youtube_api_key: Option<String>,
    pub youtube_api_base: String,
    /// Upper bound on comments fetched per `/analyze/youtube` request.
    pub max_comments: usize,
    pub upstream_timeout: Duration,
    pub upstream_max_attempts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            youtube_api_key: None,
            youtube_api_base: "https://www.googleapis.com/youtube/v3".to_string(),
            max_comments: 1000,
            upstream_timeout: Duration::from_secs(10),
            upstream_max_attempts: 3,
        }
    }
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port: u16 = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got {:?}", raw))?,
            Err(_) => defaults.port,
        };

        let youtube_api_key = usable_api_key(env::var("YOUTUBE_API_KEY").ok());

        if youtube_api_key.is_none() {
            tracing::warn!("🔑 YOUTUBE_API_KEY not set; /analyze/youtube will fail until it is configured");
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            youtube_api_key,
            youtube_api_base: env::var("YOUTUBE_API_BASE")
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or(defaults.youtube_api_base),
            max_comments: parse_or("MAX_COMMENTS", defaults.max_comments),
            upstream_timeout: Duration::from_secs(parse_or(
                "UPSTREAM_TIMEOUT_SECS",
                defaults.upstream_timeout.as_secs(),
            )),
            upstream_max_attempts: parse_or("UPSTREAM_MAX_ATTEMPTS", defaults.upstream_max_attempts)
                .max(1),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Drops keys that are blank or still the sample placeholder.
pub fn usable_api_key(raw: Option<String>) -> Option<String> {
    raw.map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && k != API_KEY_PLACEHOLDER)
}

/// Reads `key` and parses it, falling back to `default` when unset or invalid.
fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
