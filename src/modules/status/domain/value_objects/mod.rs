pub mod watch_status;

pub use watch_status::WatchStatus;
