pub mod pillar_repository_impl;
pub mod rating_repository_impl;

pub use pillar_repository_impl::PillarRepositoryImpl;
pub use rating_repository_impl::RatingRepositoryImpl;
