pub mod service;

pub use service::{FavoriteEntry, FavoritesService, SetFavoriteOutcome};
