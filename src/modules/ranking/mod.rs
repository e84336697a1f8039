pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::service::RankingService;
pub use domain::ranking::{build_ranking, RankedSeries};
