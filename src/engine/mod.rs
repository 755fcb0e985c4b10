pub mod page_tracking;
pub mod tracker;

pub use page_tracking::PageTracking;
pub use tracker::Tracker;
