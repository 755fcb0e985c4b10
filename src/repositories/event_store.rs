use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

use super::{PgEventStore, SupabaseEventStore};
use crate::config::{AppConfig, StoreBackend};
use crate::error::StoreError;
use crate::models::AnalyticsEvent;

/// Append-only sink for analytics events. The store assigns `created_at`.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn append(&self, event: &AnalyticsEvent) -> Result<(), StoreError>;
}

/// Builds the configured backend.
pub async fn connect(config: &AppConfig) -> anyhow::Result<Arc<dyn EventStore>> {
    match &config.backend {
        StoreBackend::Supabase { url, api_key } => {
            info!("Using hosted event store at {}", url);
            let store =
                SupabaseEventStore::new(url, api_key, &config.collection, config.store_timeout)?;
            Ok(Arc::new(store))
        }
        StoreBackend::Postgres { database_url } => {
            info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .acquire_timeout(config.store_timeout)
                .connect(database_url)
                .await?;
            info!("Database connected");
            Ok(Arc::new(PgEventStore::new(pool, &config.collection)))
        }
    }
}
