use site_analytics::api;
use site_analytics::config::AppConfig;
use site_analytics::engine::Tracker;
use site_analytics::repositories;
use site_analytics::services::StaticEnvironment;

use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_analytics=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting site-analytics v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::from_env()?;
    let store = repositories::connect(&config).await?;

    // Each request swaps in its own environment; this one is never read.
    let tracker = Tracker::new(store, Arc::new(StaticEnvironment::default()));

    let app = api::build_router(tracker)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
