use std::collections::HashMap;

use uuid::Uuid;

use crate::modules::rating::domain::entities::rating::RatingSample;
use crate::modules::rating::domain::value_objects::aggregated_score::{
    AggregatedScore, PillarAverage,
};

/// Pure aggregation over a target's full rating set.
///
/// Per pillar: mean of every user's value on that pillar. Overall: mean of
/// the per-pillar means. Pillars weigh equally no matter how many ratings
/// each collected, so one heavily-rated pillar cannot dominate the result.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// `None` means unrated. Callers must keep that distinct from a low
    /// score; an unrated target never sorts below a rated one, it is
    /// excluded from rankings altogether.
    pub fn aggregate(samples: &[RatingSample]) -> Option<AggregatedScore> {
        if samples.is_empty() {
            return None;
        }

        let mut per_pillar: HashMap<Uuid, (String, Vec<f32>)> = HashMap::new();
        for sample in samples {
            per_pillar
                .entry(sample.pillar_id)
                .or_insert_with(|| (sample.pillar_name.clone(), Vec::new()))
                .1
                .push(sample.value);
        }

        let mut pillar_averages: Vec<PillarAverage> = per_pillar
            .into_iter()
            .map(|(pillar_id, (pillar_name, values))| {
                let average = values.iter().sum::<f32>() / values.len() as f32;
                PillarAverage {
                    pillar_id,
                    pillar_name,
                    average: Self::round2(average),
                    rating_count: values.len(),
                }
            })
            .collect();

        // Stable presentation order independent of hash iteration
        pillar_averages.sort_by(|a, b| {
            a.pillar_name
                .cmp(&b.pillar_name)
                .then_with(|| a.pillar_id.cmp(&b.pillar_id))
        });

        let overall = pillar_averages.iter().map(|p| p.average).sum::<f32>()
            / pillar_averages.len() as f32;

        Some(AggregatedScore {
            overall: Self::round2(overall),
            pillar_averages,
            rating_count: samples.len(),
        })
    }

    fn round2(value: f32) -> f32 {
        (value * 100.0).round() / 100.0
    }
}
