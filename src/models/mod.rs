pub mod event;

pub use event::{AnalyticsEvent, EventMetadata, EventType, FormSubmission};
