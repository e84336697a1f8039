use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A prompt shown when rating under a pillar. Lives and dies with its pillar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: Uuid,
    pub pillar_id: Uuid,
    pub prompt: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl Question {
    pub fn new(pillar_id: Uuid, prompt: String, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            pillar_id,
            prompt,
            position,
            created_at: Utc::now(),
        }
    }
}
