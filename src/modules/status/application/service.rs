use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::log_debug;
use crate::modules::catalog::domain::entities::series::SeriesSummary;
use crate::modules::catalog::domain::repositories::series_repository::SeriesRepository;
use crate::modules::status::domain::{
    entities::series_status::SeriesStatus,
    repositories::status_repository::StatusRepository,
    value_objects::watch_status::WatchStatus,
};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::shared::UserContext;

pub struct StatusService {
    status_repo: Arc<dyn StatusRepository>,
    series_repo: Arc<dyn SeriesRepository>,
}

/// Bucket page row: membership joined with its series summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEntry {
    pub series: SeriesSummary,
    pub status: WatchStatus,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub favorites: i64,
    pub watching: i64,
    pub seen: i64,
    pub watchlist: i64,
}

impl StatusService {
    pub fn new(
        status_repo: Arc<dyn StatusRepository>,
        series_repo: Arc<dyn SeriesRepository>,
    ) -> Self {
        Self {
            status_repo,
            series_repo,
        }
    }

    /// One call moves a series between buckets or clears it (`None`). The
    /// caller never removes from the old bucket separately.
    pub async fn set_status(
        &self,
        ctx: &UserContext,
        series_id: &Uuid,
        status: Option<WatchStatus>,
    ) -> AppResult<Option<SeriesStatus>> {
        ctx.require_authenticated()?;

        if !self.series_repo.exists(series_id).await? {
            return Err(AppError::NotFound(format!(
                "Series with ID {} not found",
                series_id
            )));
        }

        match status {
            Some(status) => {
                let saved = self.status_repo.set(&ctx.user_id, series_id, status).await?;
                log_debug!(
                    "User {} set series {} to {}",
                    ctx.user_id,
                    series_id,
                    status
                );
                Ok(Some(saved))
            }
            None => {
                self.status_repo.clear(&ctx.user_id, series_id).await?;
                log_debug!("User {} cleared status of series {}", ctx.user_id, series_id);
                Ok(None)
            }
        }
    }

    pub async fn series_status(
        &self,
        ctx: &UserContext,
        series_id: &Uuid,
    ) -> AppResult<Option<WatchStatus>> {
        ctx.require_authenticated()?;
        let found = self.status_repo.find(&ctx.user_id, series_id).await?;
        Ok(found.map(|s| s.status))
    }

    pub async fn list_by_status(
        &self,
        ctx: &UserContext,
        status: WatchStatus,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResult<StatusEntry>> {
        ctx.require_authenticated()?;
        Validator::validate_pagination(params)?;

        let page = self
            .status_repo
            .list_by_status(&ctx.user_id, status, params)
            .await?;

        let ids: Vec<Uuid> = page.items.iter().map(|s| s.series_id).collect();
        let summaries = self.series_repo.find_summaries(&ids).await?;

        let items = page
            .items
            .into_iter()
            .filter_map(|membership| {
                summaries
                    .iter()
                    .find(|summary| summary.id == membership.series_id)
                    .map(|summary| StatusEntry {
                        series: summary.clone(),
                        status: membership.status,
                        updated_at: membership.updated_at,
                    })
            })
            .collect();

        Ok(PaginatedResult {
            items,
            total_count: page.total_count,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
        })
    }

    /// All four bucket sizes from one grouped query; absent buckets are zero
    pub async fn status_counts(&self, ctx: &UserContext) -> AppResult<StatusCounts> {
        ctx.require_authenticated()?;

        let grouped = self.status_repo.counts_by_status(&ctx.user_id).await?;

        let mut counts = StatusCounts::default();
        for (status, count) in grouped {
            match status {
                WatchStatus::Favorites => counts.favorites = count,
                WatchStatus::Watching => counts.watching = count,
                WatchStatus::Seen => counts.seen = count,
                WatchStatus::Watchlist => counts.watchlist = count,
            }
        }
        Ok(counts)
    }
}
