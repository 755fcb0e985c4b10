use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::engine::PageTracking;
use crate::models::{AnalyticsEvent, FormSubmission};
use crate::repositories::EventStore;
use crate::services::Environment;

/// Emits analytics events without ever failing the caller.
///
/// Every `record_*` call builds its event immediately, then hands the write
/// to a detached task. The returned handle resolves once the write settles
/// and never carries an error, so callers are free to drop it. Outside a
/// tokio runtime the event is logged and dropped and `None` is returned.
#[derive(Clone)]
pub struct Tracker {
    store: Arc<dyn EventStore>,
    environment: Arc<dyn Environment>,
}

impl Tracker {
    pub fn new(store: Arc<dyn EventStore>, environment: Arc<dyn Environment>) -> Self {
        Self { store, environment }
    }

    /// Same store, different host.
    pub fn with_environment(&self, environment: Arc<dyn Environment>) -> Self {
        Self {
            store: self.store.clone(),
            environment,
        }
    }

    pub fn environment(&self) -> &dyn Environment {
        self.environment.as_ref()
    }

    /// Records a page view for `path`. An empty path is stored as `/`, so
    /// `page_path` is never empty in the store.
    pub fn record_page_view(&self, path: &str) -> Option<JoinHandle<()>> {
        let event = AnalyticsEvent::page_view(
            path,
            &self.environment.user_agent(),
            &self.environment.referrer(),
        );
        self.dispatch(event)
    }

    pub fn record_button_click(&self, button_name: &str, button_location: &str) -> Option<JoinHandle<()>> {
        let event = AnalyticsEvent::button_click(
            &self.environment.location_path(),
            button_name,
            button_location,
        );
        self.dispatch(event)
    }

    pub fn record_form_submission(&self, form: &FormSubmission) -> Option<JoinHandle<()>> {
        let event = AnalyticsEvent::contact_form_submit(&self.environment.location_path(), form);
        self.dispatch(event)
    }

    /// Binding that records one page view per mounted instance.
    pub fn attach_page_tracking(&self) -> PageTracking {
        PageTracking::new(self.clone())
    }

    fn dispatch(&self, event: AnalyticsEvent) -> Option<JoinHandle<()>> {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                error!(
                    event_type = %event.event_type(),
                    "Dropping analytics event, no async runtime: {}",
                    err
                );
                return None;
            }
        };
        let store = self.store.clone();

        Some(runtime.spawn(async move {
            match store.append(&event).await {
                Ok(()) => {
                    debug!(
                        event_type = %event.event_type(),
                        page_path = event.page_path(),
                        "Analytics event recorded"
                    );
                }
                Err(err) => {
                    error!(
                        event_type = %event.event_type(),
                        "Failed to record analytics event: {}",
                        err
                    );
                }
            }
        }))
    }
}
