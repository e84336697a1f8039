pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::series_status::SeriesStatus;
pub use repositories::status_repository::StatusRepository;
pub use value_objects::watch_status::WatchStatus;
