pub mod status_repository_impl;

pub use status_repository_impl::StatusRepositoryImpl;
