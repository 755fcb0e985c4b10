use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::EventStore;
use crate::error::StoreError;
use crate::models::AnalyticsEvent;

/// Writes events through the hosted store's REST interface.
#[derive(Clone)]
pub struct SupabaseEventStore {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SupabaseEventStore {
    pub fn new(
        base_url: &str,
        api_key: &str,
        collection: &str,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), collection),
            api_key: api_key.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EventStore for SupabaseEventStore {
    async fn append(&self, event: &AnalyticsEvent) -> Result<(), StoreError> {
        let body = serde_json::to_vec(event)?;

        debug!("Appending {} event to {}", event.event_type(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header("Prefer", "return=minimal")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let store = SupabaseEventStore::new(
            "https://abc.supabase.co/",
            "anon",
            "site_analytics",
            Duration::from_secs(1),
        )
        .unwrap();

        assert_eq!(store.endpoint(), "https://abc.supabase.co/rest/v1/site_analytics");
    }
}
