pub mod pillar_service;
pub mod rating_service;

pub use pillar_service::PillarService;
pub use rating_service::RatingService;
