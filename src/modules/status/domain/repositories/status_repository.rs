use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::status::domain::entities::series_status::SeriesStatus;
use crate::modules::status::domain::value_objects::watch_status::WatchStatus;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;

#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// One atomic upsert; moving buckets is never an add+remove pair
    async fn set(
        &self,
        user_id: &str,
        series_id: &Uuid,
        status: WatchStatus,
    ) -> AppResult<SeriesStatus>;

    /// Idempotent: clearing an absent status is fine
    async fn clear(&self, user_id: &str, series_id: &Uuid) -> AppResult<()>;

    async fn find(&self, user_id: &str, series_id: &Uuid) -> AppResult<Option<SeriesStatus>>;

    /// One bucket's page, most recently updated first, series id as tie-break
    async fn list_by_status(
        &self,
        user_id: &str,
        status: WatchStatus,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResult<SeriesStatus>>;

    /// All bucket sizes from a single grouped count
    async fn counts_by_status(&self, user_id: &str) -> AppResult<Vec<(WatchStatus, i64)>>;
}
