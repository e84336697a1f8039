use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalog::domain::entities::series::SeriesSummary;
use crate::modules::rating::domain::value_objects::aggregated_score::AggregatedScore;

/// One row of a Top-N list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSeries {
    pub rank: u32,
    pub series: SeriesSummary,
    pub score: AggregatedScore,
}

/// Order every rated series by overall score descending and keep the first
/// `size`. Unrated series are dropped entirely rather than sorted as worst.
/// Equal scores break by catalog creation time, earliest first, so repeated
/// builds over the same snapshot return the same list.
pub fn build_ranking(
    series: Vec<SeriesSummary>,
    mut scores: HashMap<Uuid, AggregatedScore>,
    size: usize,
) -> Vec<RankedSeries> {
    let mut rated: Vec<(SeriesSummary, AggregatedScore)> = series
        .into_iter()
        .filter_map(|summary| {
            let score = scores.remove(&summary.id)?;
            Some((summary, score))
        })
        .collect();

    rated.sort_by(|(a_series, a_score), (b_series, b_score)| {
        b_score
            .overall
            .partial_cmp(&a_score.overall)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a_series.created_at.cmp(&b_series.created_at))
            .then_with(|| a_series.id.cmp(&b_series.id))
    });

    rated
        .into_iter()
        .take(size)
        .enumerate()
        .map(|(i, (series, score))| RankedSeries {
            rank: (i + 1) as u32,
            series,
            score,
        })
        .collect()
}
