use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::JoinHandle;

use crate::engine::Tracker;

/// Mount-scoped page view tracking.
///
/// One instance corresponds to one mounted page. The first call to
/// [`PageTracking::on_render`] records a page view for the environment's
/// current path; later renders of the same instance do nothing. Remounting
/// means building a new instance. Nothing happens on drop.
///
/// A first render outside a tokio runtime still counts as the mount; the
/// tracker logs and drops that page view.
pub struct PageTracking {
    tracker: Tracker,
    mounted: AtomicBool,
}

impl PageTracking {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker,
            mounted: AtomicBool::new(false),
        }
    }

    pub fn on_render(&self) -> Option<JoinHandle<()>> {
        if self.mounted.swap(true, Ordering::AcqRel) {
            return None;
        }

        let path = self.tracker.environment().location_path();
        self.tracker.record_page_view(&path)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }
}
