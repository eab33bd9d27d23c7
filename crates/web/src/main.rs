use std::sync::Arc;

use anyhow::Context;

use storefront_client::{ClientConfig, HttpProductRepository};
use storefront_web::config::WebConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = WebConfig::from_env()?;
    let repository = Arc::new(HttpProductRepository::new(ClientConfig::new(&config.api_url)));
    tracing::info!(api_url = %config.api_url, page_size = config.page_size.get(), "catalog client ready");

    let app = storefront_web::app::build_app(repository, config.page_size)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
