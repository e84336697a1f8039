pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::{StatusCounts, StatusEntry, StatusService};
pub use domain::{SeriesStatus, StatusRepository, WatchStatus};
