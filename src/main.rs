use dotenv::dotenv;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use sentify::api::{self, AppState};
use sentify::config::Settings;
use sentify::youtube::YouTubeClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env()?;
    let comments = Arc::new(YouTubeClient::new(&settings)?);

    let state = Arc::new(AppState {
        comments,
        max_comments: settings.max_comments,
    });

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("🚀 Sentify listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
