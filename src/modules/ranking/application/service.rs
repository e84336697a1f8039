use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::log_debug;
use crate::modules::catalog::domain::repositories::series_repository::SeriesRepository;
use crate::modules::ranking::domain::ranking::{build_ranking, RankedSeries};
use crate::modules::rating::domain::{
    entities::rating::RatingSample,
    repositories::rating_repository::RatingRepository,
    services::score_aggregator::ScoreAggregator,
    value_objects::aggregated_score::AggregatedScore,
    value_objects::rating_target::RatingTargetKind,
};
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Builds Top-N views from a fresh rating snapshot on every call. Nothing is
/// cached between requests; two consecutive calls over an unchanged store
/// return identical lists.
pub struct RankingService {
    series_repo: Arc<dyn SeriesRepository>,
    rating_repo: Arc<dyn RatingRepository>,
}

impl RankingService {
    pub fn new(
        series_repo: Arc<dyn SeriesRepository>,
        rating_repo: Arc<dyn RatingRepository>,
    ) -> Self {
        Self {
            series_repo,
            rating_repo,
        }
    }

    pub async fn top_series(&self, size: usize) -> AppResult<Vec<RankedSeries>> {
        Validator::validate_ranking_size(size)?;

        let summaries = self.series_repo.list_summaries().await?;
        let samples = self
            .rating_repo
            .samples_for_kind(RatingTargetKind::Series)
            .await?;

        let scores = Self::aggregate_by_target(samples);
        log_debug!(
            "Ranking {} series, {} rated",
            summaries.len(),
            scores.len()
        );

        Ok(build_ranking(summaries, scores, size))
    }

    fn aggregate_by_target(samples: Vec<RatingSample>) -> HashMap<Uuid, AggregatedScore> {
        let mut by_target: HashMap<Uuid, Vec<RatingSample>> = HashMap::new();
        for sample in samples {
            by_target.entry(sample.target_id).or_default().push(sample);
        }

        by_target
            .into_iter()
            .filter_map(|(target_id, samples)| {
                ScoreAggregator::aggregate(&samples).map(|score| (target_id, score))
            })
            .collect()
    }
}
