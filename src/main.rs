use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use mergington::config::ServerConfig;
use mergington::web::app::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let registry = config
        .build_registry()
        .context("Failed to build activity registry")?;
    tracing::info!(activities = registry.len(), "Activity registry ready");

    let app = build_router(Arc::new(registry), &config.static_dir);

    let addr = config.addr().context("Failed to parse HOST/PORT")?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .fallback_addr()
                .context("Failed to parse fallback address")?;
            tracing::warn!(%addr, error = %e, %fallback, "Bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("Failed to bind {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    tracing::info!("Server listening on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
