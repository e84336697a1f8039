use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::domain::entities::series::{Series, SeriesSummary};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;

#[async_trait]
pub trait SeriesRepository: Send + Sync {
    async fn save(&self, series: &Series) -> AppResult<Series>;

    async fn update(&self, series: &Series) -> AppResult<Series>;

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Series>>;

    async fn exists(&self, id: &Uuid) -> AppResult<bool>;

    /// Case-insensitive title substring search
    async fn search(&self, query: &str, limit: usize) -> AppResult<Vec<Series>>;

    /// Newest first
    async fn list(&self, params: &PaginationParams) -> AppResult<PaginatedResult<Series>>;

    /// Every series as a summary; the ranking builder aggregates over these
    async fn list_summaries(&self) -> AppResult<Vec<SeriesSummary>>;

    async fn find_summaries(&self, ids: &[Uuid]) -> AppResult<Vec<SeriesSummary>>;

    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
