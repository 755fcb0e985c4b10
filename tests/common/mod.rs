#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use site_analytics::error::StoreError;
use site_analytics::models::AnalyticsEvent;
use site_analytics::repositories::EventStore;
use std::io;
use std::sync::{Arc, Mutex};

/// Keeps every appended event, serialized the way a backend would see it.
#[derive(Default)]
pub struct RecordingStore {
    events: Mutex<Vec<Value>>,
}

impl RecordingStore {
    pub fn events(&self) -> Vec<Value> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventStore for RecordingStore {
    async fn append(&self, event: &AnalyticsEvent) -> Result<(), StoreError> {
        let value = serde_json::to_value(event)?;
        self.events.lock().unwrap().push(value);
        Ok(())
    }
}

/// Rejects every write as if the store were down.
pub struct FailingStore;

#[async_trait]
impl EventStore for FailingStore {
    async fn append(&self, _event: &AnalyticsEvent) -> Result<(), StoreError> {
        Err(StoreError::Rejected {
            status: 503,
            body: "simulated network error".to_string(),
        })
    }
}

/// In-memory sink for a `tracing_subscriber::fmt` writer.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Installs a subscriber for the current thread that writes into `self`.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let logs = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || logs.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn strip_timestamp(meta: &Value) -> Value {
    let mut meta = meta.clone();
    let timestamp = meta
        .as_object_mut()
        .expect("meta_data is an object")
        .remove("timestamp")
        .expect("meta_data carries a timestamp");
    assert!(timestamp.is_string());
    meta
}
