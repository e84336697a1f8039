use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::log_debug;
use crate::modules::catalog::domain::entities::series::SeriesSummary;
use crate::modules::catalog::domain::repositories::series_repository::SeriesRepository;
use crate::modules::favorites::domain::{
    entities::favorite_list::{FavoriteList, ToggleOutcome, DEFAULT_CAPACITY},
    entities::favorite_slot::FavoriteSlot,
    repositories::favorites_repository::FavoritesRepository,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::UserContext;

pub struct FavoritesService {
    favorites_repo: Arc<dyn FavoritesRepository>,
    series_repo: Arc<dyn SeriesRepository>,
    capacity: usize,
}

/// Result of placing a series into a specific slot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFavoriteOutcome {
    pub slot: i32,
    pub series_id: Uuid,
    /// Prior occupant, handed back so the UI can prompt for reassignment
    pub displaced_series_id: Option<Uuid>,
}

/// Occupied slot joined with its series summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub slot: i32,
    pub series: SeriesSummary,
}

impl FavoritesService {
    pub fn new(
        favorites_repo: Arc<dyn FavoritesRepository>,
        series_repo: Arc<dyn SeriesRepository>,
    ) -> Self {
        Self::with_capacity(favorites_repo, series_repo, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(
        favorites_repo: Arc<dyn FavoritesRepository>,
        series_repo: Arc<dyn SeriesRepository>,
        capacity: usize,
    ) -> Self {
        Self {
            favorites_repo,
            series_repo,
            capacity,
        }
    }

    pub async fn set_favorite(
        &self,
        ctx: &UserContext,
        slot: i32,
        series_id: Uuid,
    ) -> AppResult<SetFavoriteOutcome> {
        ctx.require_authenticated()?;
        self.ensure_series_exists(&series_id).await?;

        let mut list = self.load_list(&ctx.user_id).await?;
        let displaced = list.assign(slot, series_id)?;

        self.favorites_repo
            .upsert_slot(&ctx.user_id, slot, series_id)
            .await?;

        log_debug!(
            "User {} set favorite slot {} to {} (displaced {:?})",
            ctx.user_id,
            slot,
            series_id,
            displaced
        );

        Ok(SetFavoriteOutcome {
            slot,
            series_id,
            displaced_series_id: displaced,
        })
    }

    pub async fn remove_favorite(&self, ctx: &UserContext, slot: i32) -> AppResult<()> {
        ctx.require_authenticated()?;

        let mut list = self.load_list(&ctx.user_id).await?;
        list.clear_slot(slot)?;

        self.favorites_repo.clear_slot(&ctx.user_id, slot).await
    }

    /// The series-page heart button: remove when present, otherwise take the
    /// first open slot. A full list surfaces CapacityExceeded so the UI can
    /// offer the replace flow.
    pub async fn toggle_favorite(
        &self,
        ctx: &UserContext,
        series_id: Uuid,
    ) -> AppResult<ToggleOutcome> {
        ctx.require_authenticated()?;
        self.ensure_series_exists(&series_id).await?;

        let mut list = self.load_list(&ctx.user_id).await?;
        let outcome = list.toggle(series_id)?;

        match outcome {
            ToggleOutcome::Added { slot } => {
                self.favorites_repo
                    .upsert_slot(&ctx.user_id, slot, series_id)
                    .await?;
            }
            ToggleOutcome::Removed { slot } => {
                self.favorites_repo.clear_slot(&ctx.user_id, slot).await?;
            }
        }
        Ok(outcome)
    }

    /// Validates the permutation against the loaded list, then swaps the
    /// whole list inside one transaction so readers never see it half-applied.
    pub async fn reorder_favorites(
        &self,
        ctx: &UserContext,
        new_order: Vec<Uuid>,
    ) -> AppResult<Vec<FavoriteSlot>> {
        ctx.require_authenticated()?;

        let mut list = self.load_list(&ctx.user_id).await?;
        let expected = list.series_ids();
        list.reorder(&new_order)?;

        self.favorites_repo
            .replace_all(&ctx.user_id, &expected, &list.entries())
            .await
    }

    pub async fn favorites(&self, ctx: &UserContext) -> AppResult<Vec<FavoriteEntry>> {
        ctx.require_authenticated()?;

        let slots = self.favorites_repo.list_for_user(&ctx.user_id).await?;
        if slots.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = slots.iter().map(|s| s.series_id).collect();
        let summaries = self.series_repo.find_summaries(&ids).await?;

        let entries = slots
            .into_iter()
            .filter_map(|slot| {
                summaries
                    .iter()
                    .find(|summary| summary.id == slot.series_id)
                    .map(|summary| FavoriteEntry {
                        slot: slot.slot,
                        series: summary.clone(),
                    })
            })
            .collect();

        Ok(entries)
    }

    async fn load_list(&self, user_id: &str) -> AppResult<FavoriteList> {
        let slots = self.favorites_repo.list_for_user(user_id).await?;
        FavoriteList::from_entries(
            self.capacity,
            slots.into_iter().map(|s| (s.slot, s.series_id)),
        )
    }

    async fn ensure_series_exists(&self, series_id: &Uuid) -> AppResult<()> {
        if !self.series_repo.exists(series_id).await? {
            return Err(AppError::NotFound(format!(
                "Series with ID {} not found",
                series_id
            )));
        }
        Ok(())
    }
}
