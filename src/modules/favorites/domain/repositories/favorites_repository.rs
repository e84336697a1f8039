use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::favorites::domain::entities::favorite_slot::FavoriteSlot;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    /// A user's occupied slots in slot order
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<FavoriteSlot>>;

    /// Place or replace a single slot
    async fn upsert_slot(
        &self,
        user_id: &str,
        slot: i32,
        series_id: Uuid,
    ) -> AppResult<FavoriteSlot>;

    async fn clear_slot(&self, user_id: &str, slot: i32) -> AppResult<()>;

    /// Replace the whole list in one transaction. `expected_series` is the
    /// occupied set the caller validated against; if the stored set has
    /// moved on in the meantime the call fails with Conflict and writes
    /// nothing.
    async fn replace_all(
        &self,
        user_id: &str,
        expected_series: &[Uuid],
        entries: &[(i32, Uuid)],
    ) -> AppResult<Vec<FavoriteSlot>>;
}
