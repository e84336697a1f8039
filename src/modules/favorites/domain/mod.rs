pub mod entities;
pub mod repositories;

pub use entities::favorite_list::{FavoriteList, ToggleOutcome, DEFAULT_CAPACITY};
pub use entities::favorite_slot::FavoriteSlot;
pub use repositories::favorites_repository::FavoritesRepository;
