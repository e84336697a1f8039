pub mod status_repository;
