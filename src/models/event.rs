use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Kind of interaction an [`AnalyticsEvent`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum EventType {
    PageView,
    ButtonClick,
    ContactFormSubmit,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::PageView => "page_view",
            EventType::ButtonClick => "button_click",
            EventType::ContactFormSubmit => "contact_form_submit",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-type metadata. Serialized flat, the owning event's `event_type` is the tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EventMetadata {
    PageView {
        timestamp: String,
        referrer: String,
    },

    ButtonClick {
        button_name: String,
        button_location: String,
        timestamp: String,
    },

    ContactForm {
        form_type: String,
        user_name: String,
        user_email: String,
        timestamp: String,
    },
}

impl EventMetadata {
    pub fn timestamp(&self) -> &str {
        match self {
            EventMetadata::PageView { timestamp, .. }
            | EventMetadata::ButtonClick { timestamp, .. }
            | EventMetadata::ContactForm { timestamp, .. } => timestamp,
        }
    }
}

/// Contact form fields, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
}

/// One append-only analytics record. `created_at` is stamped by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    event_type: EventType,

    page_path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    user_agent: Option<String>,

    meta_data: EventMetadata,
}

impl AnalyticsEvent {
    pub fn page_view(path: &str, user_agent: &str, referrer: &str) -> Self {
        Self {
            event_type: EventType::PageView,
            page_path: normalize_path(path),
            user_agent: Some(user_agent.to_string()),
            meta_data: EventMetadata::PageView {
                timestamp: now_iso8601(),
                referrer: referrer.to_string(),
            },
        }
    }

    pub fn button_click(path: &str, button_name: &str, button_location: &str) -> Self {
        Self {
            event_type: EventType::ButtonClick,
            page_path: normalize_path(path),
            user_agent: None,
            meta_data: EventMetadata::ButtonClick {
                button_name: button_name.to_string(),
                button_location: button_location.to_string(),
                timestamp: now_iso8601(),
            },
        }
    }

    pub fn contact_form_submit(path: &str, form: &FormSubmission) -> Self {
        Self {
            event_type: EventType::ContactFormSubmit,
            page_path: normalize_path(path),
            user_agent: None,
            meta_data: EventMetadata::ContactForm {
                form_type: "contact".to_string(),
                user_name: form.name.clone(),
                user_email: form.email.clone(),
                timestamp: now_iso8601(),
            },
        }
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn page_path(&self) -> &str {
        &self.page_path
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn meta_data(&self) -> &EventMetadata {
        &self.meta_data
    }
}

// Hosts that cannot report a location still produce a usable path.
fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
