use std::sync::Arc;

use uuid::Uuid;

use crate::log_info;
use crate::modules::catalog::domain::{
    entities::character::Character,
    entities::series::Series,
    repositories::{
        character_repository::CharacterRepository, series_repository::SeriesRepository,
    },
};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::shared::UserContext;

/// Catalog writes are curated (admin only); reads are open to any caller.
pub struct CatalogService {
    series_repo: Arc<dyn SeriesRepository>,
    character_repo: Arc<dyn CharacterRepository>,
}

#[derive(Debug, Clone, Default)]
pub struct NewSeriesData {
    pub title: String,
    pub synopsis: Option<String>,
    pub episodes: Option<i32>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SeriesUpdate {
    pub title: Option<String>,
    pub synopsis: Option<Option<String>>,
    pub episodes: Option<Option<i32>>,
}

impl CatalogService {
    pub fn new(
        series_repo: Arc<dyn SeriesRepository>,
        character_repo: Arc<dyn CharacterRepository>,
    ) -> Self {
        Self {
            series_repo,
            character_repo,
        }
    }

    pub async fn create_series(&self, ctx: &UserContext, data: NewSeriesData) -> AppResult<Series> {
        ctx.require_admin()?;
        Validator::validate_series_title(&data.title)?;

        let mut entity = Series::new(data.title);
        if let Some(synopsis) = data.synopsis {
            entity = entity.with_synopsis(synopsis);
        }
        if let Some(episodes) = data.episodes {
            entity = entity.with_episodes(episodes);
        }
        if let Some(image_url) = data.image_url {
            entity = entity.with_image_url(image_url);
        }

        let saved = self.series_repo.save(&entity).await?;
        log_info!("Created series '{}' ({})", saved.title, saved.id);
        Ok(saved)
    }

    pub async fn update_series(
        &self,
        ctx: &UserContext,
        id: &Uuid,
        update: SeriesUpdate,
    ) -> AppResult<Series> {
        ctx.require_admin()?;

        let mut entity = self
            .series_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Series with ID {} not found", id)))?;

        if let Some(title) = update.title {
            Validator::validate_series_title(&title)?;
            entity.rename(title);
        }
        if let Some(synopsis) = update.synopsis {
            entity.update_synopsis(synopsis);
        }
        if let Some(episodes) = update.episodes {
            entity.update_episodes(episodes);
        }

        self.series_repo.update(&entity).await
    }

    pub async fn delete_series(&self, ctx: &UserContext, id: &Uuid) -> AppResult<()> {
        ctx.require_admin()?;
        self.series_repo.delete(id).await
    }

    pub async fn get_series(&self, id: &Uuid) -> AppResult<Series> {
        self.series_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Series with ID {} not found", id)))
    }

    pub async fn search_series(&self, query: &str, limit: usize) -> AppResult<Vec<Series>> {
        Validator::validate_search_query(query)?;
        self.series_repo.search(query, limit.min(50)).await
    }

    pub async fn list_series(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResult<Series>> {
        Validator::validate_pagination(params)?;
        self.series_repo.list(params).await
    }

    pub async fn add_character(
        &self,
        ctx: &UserContext,
        series_id: &Uuid,
        name: String,
        description: Option<String>,
    ) -> AppResult<Character> {
        ctx.require_admin()?;
        Validator::validate_character_name(&name)?;

        if !self.series_repo.exists(series_id).await? {
            return Err(AppError::NotFound(format!(
                "Series with ID {} not found",
                series_id
            )));
        }

        let mut entity = Character::new(*series_id, name);
        if let Some(description) = description {
            entity = entity.with_description(description);
        }

        self.character_repo.save(&entity).await
    }

    pub async fn get_character(&self, id: &Uuid) -> AppResult<Character> {
        self.character_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Character with ID {} not found", id)))
    }

    pub async fn series_characters(&self, series_id: &Uuid) -> AppResult<Vec<Character>> {
        if !self.series_repo.exists(series_id).await? {
            return Err(AppError::NotFound(format!(
                "Series with ID {} not found",
                series_id
            )));
        }
        self.character_repo.find_by_series(series_id).await
    }

    pub async fn delete_character(&self, ctx: &UserContext, id: &Uuid) -> AppResult<()> {
        ctx.require_admin()?;
        self.character_repo.delete(id).await
    }
}
