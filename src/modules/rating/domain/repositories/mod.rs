pub mod pillar_repository;
pub mod rating_repository;
