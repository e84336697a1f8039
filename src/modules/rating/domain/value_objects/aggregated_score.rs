use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Derived score for a single target. Never persisted; recomputed from the
/// full rating set on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedScore {
    /// Mean of per-pillar means, equal pillar weighting
    pub overall: f32,
    /// Breakdown ordered by pillar name
    pub pillar_averages: Vec<PillarAverage>,
    /// Total ratings that contributed
    pub rating_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarAverage {
    pub pillar_id: Uuid,
    pub pillar_name: String,
    pub average: f32,
    pub rating_count: usize,
}

impl AggregatedScore {
    pub fn strongest_pillar(&self) -> Option<&PillarAverage> {
        self.pillar_averages
            .iter()
            .max_by(|a, b| a.average.partial_cmp(&b.average).unwrap())
    }

    pub fn weakest_pillar(&self) -> Option<&PillarAverage> {
        self.pillar_averages
            .iter()
            .min_by(|a, b| a.average.partial_cmp(&b.average).unwrap())
    }
}
