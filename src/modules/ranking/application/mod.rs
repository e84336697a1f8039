pub mod service;

pub use service::RankingService;
