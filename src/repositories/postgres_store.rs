use async_trait::async_trait;
use sqlx::PgPool;

use super::EventStore;
use crate::error::StoreError;
use crate::models::AnalyticsEvent;

/// Writes events straight into the `site_analytics` table (see `migrations/`).
pub struct PgEventStore {
    pool: PgPool,
    insert_sql: String,
}

impl PgEventStore {
    /// `collection` must already be a validated identifier, see [`crate::config::is_identifier`].
    pub fn new(pool: PgPool, collection: &str) -> Self {
        Self {
            pool,
            insert_sql: format!(
                "INSERT INTO {} (event_type, page_path, user_agent, meta_data) VALUES ($1, $2, $3, $4)",
                collection
            ),
        }
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn append(&self, event: &AnalyticsEvent) -> Result<(), StoreError> {
        sqlx::query(&self.insert_sql)
            .bind(event.event_type().as_str())
            .bind(event.page_path())
            .bind(event.user_agent())
            .bind(serde_json::to_value(event.meta_data())?)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
