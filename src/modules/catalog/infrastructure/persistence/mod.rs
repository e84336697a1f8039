pub mod character_repository_impl;
pub mod series_repository_impl;

pub use character_repository_impl::CharacterRepositoryImpl;
pub use series_repository_impl::SeriesRepositoryImpl;
