use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::status::domain::value_objects::watch_status::WatchStatus;

/// The persisted bucket membership of one user-series pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStatus {
    pub user_id: String,
    pub series_id: Uuid,
    pub status: WatchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
