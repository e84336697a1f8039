pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::{FavoriteEntry, FavoritesService, SetFavoriteOutcome};
pub use domain::{FavoriteList, FavoriteSlot, FavoritesRepository, ToggleOutcome};
