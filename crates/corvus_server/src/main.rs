//! Corvus server binary.

use anyhow::{Context, Result};
use corvus_server::CorvusServer;
use corvus_server::bootstrap::prepare_content;
use corvus_server::config::ServiceConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Corvus v{}", env!("CARGO_PKG_VERSION"));

    let config = ServiceConfig::from_env();
    let (cache, store) = prepare_content(&config).context("content preparation failed")?;

    let app = CorvusServer::new(config.clone()).build(cache, store);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "corvus server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
