use thiserror::Error;

/// A failed write to the event store. The only error the tracker ever sees.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("event store request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("event store rejected write with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to serialize event: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("database write failed: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
