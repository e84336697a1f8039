pub mod service;

pub use service::{StatusCounts, StatusEntry, StatusService};
