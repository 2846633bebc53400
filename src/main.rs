use hashtag_ranker::config::Config;
use hashtag_ranker::ranking::engine::HashtagRanker;
use hashtag_ranker::routes::router;
use hashtag_ranker::youtube::client::YouTubeClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // 1. Configuration:
    let config = Config::from_env()?;

    // 2. Video source:
    let client = YouTubeClient::new(
        &config.api_base,
        config.api_key.clone(),
        config.request_timeout,
        config.days_window,
    )?;

    if !client.has_credential() {
        tracing::warn!(
            "YOUTUBE_API_KEY is not set; every ranking request will fail until it is configured"
        );
    }

    // 3. Ranker:
    let ranker = Arc::new(
        HashtagRanker::new(Arc::new(client))
            .with_defaults(config.max_results_search, config.top_k),
    );

    // 4. HTTP server:
    let app = router(ranker);

    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
