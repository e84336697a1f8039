use crate::schema::series_statuses;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::status::domain::entities::series_status::SeriesStatus;
use crate::modules::status::domain::value_objects::watch_status::WatchStatus;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = series_statuses)]
#[diesel(primary_key(user_id, series_id))]
pub struct SeriesStatusModel {
    pub user_id: String,
    pub series_id: Uuid,
    pub status: WatchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = series_statuses)]
pub struct NewSeriesStatus {
    pub user_id: String,
    pub series_id: Uuid,
    pub status: WatchStatus,
}

impl From<SeriesStatusModel> for SeriesStatus {
    fn from(m: SeriesStatusModel) -> Self {
        SeriesStatus {
            user_id: m.user_id,
            series_id: m.series_id,
            status: m.status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
