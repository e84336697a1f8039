pub mod favorites_repository_impl;

pub use favorites_repository_impl::FavoritesRepositoryImpl;
