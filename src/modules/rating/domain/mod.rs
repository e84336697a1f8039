pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::pillar::Pillar;
pub use entities::question::Question;
pub use entities::rating::{Rating, RatingSample};
pub use repositories::pillar_repository::PillarRepository;
pub use repositories::rating_repository::RatingRepository;
pub use services::score_aggregator::ScoreAggregator;
pub use value_objects::aggregated_score::{AggregatedScore, PillarAverage};
pub use value_objects::rating_target::{RatingTarget, RatingTargetKind};
