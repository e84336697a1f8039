pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{PillarService, RatingService};
pub use domain::{
    AggregatedScore, Pillar, PillarAverage, PillarRepository, Question, Rating, RatingRepository,
    RatingSample, RatingTarget, RatingTargetKind, ScoreAggregator,
};
