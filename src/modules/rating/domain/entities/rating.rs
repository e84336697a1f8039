use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::rating::domain::value_objects::rating_target::{
    RatingTarget, RatingTargetKind,
};

/// One user's score for one pillar of one target.
///
/// Keyed by (user, target, pillar); re-rating replaces the value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub user_id: String,
    pub target_id: Uuid,
    pub target_kind: RatingTargetKind,
    pub pillar_id: Uuid,
    pub value: f32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(user_id: String, target: RatingTarget, pillar_id: Uuid, value: f32) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            target_id: target.id,
            target_kind: target.kind,
            pillar_id,
            value,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn target(&self) -> RatingTarget {
        RatingTarget {
            kind: self.target_kind,
            id: self.target_id,
        }
    }
}

/// Read model for aggregation: one rating joined with its pillar name.
/// User identity is deliberately absent; the aggregator never weighs users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSample {
    pub target_id: Uuid,
    pub pillar_id: Uuid,
    pub pillar_name: String,
    pub value: f32,
}
