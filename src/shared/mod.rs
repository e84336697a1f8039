// Shared kernel: error types, database access, and cross-module helpers

pub mod application;
pub mod database;
pub mod domain;
pub mod errors;
pub mod utils;

// Re-exports for convenience
pub use database::Database;
pub use domain::{UserContext, UserRole};
pub use errors::{AppError, AppResult};
