use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::{exists, select};
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::super::models::{NewSeries, SeriesChangeset, SeriesModel, SeriesSummaryRow};
use crate::log_debug;
use crate::modules::catalog::domain::entities::series::{Series, SeriesSummary};
use crate::modules::catalog::domain::repositories::series_repository::SeriesRepository;
use crate::schema::series;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

pub struct SeriesRepositoryImpl {
    db: Arc<Database>,
}

impl SeriesRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SeriesRepository for SeriesRepositoryImpl {
    async fn save(&self, entity: &Series) -> AppResult<Series> {
        let db = Arc::clone(&self.db);
        let new_series = NewSeries::from(entity);

        let model = task::spawn_blocking(move || -> AppResult<SeriesModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(series::table)
                .values(&new_series)
                .get_result::<SeriesModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        log_debug!("Saved series {} ({})", model.title, model.id);
        Ok(model.into())
    }

    async fn update(&self, entity: &Series) -> AppResult<Series> {
        let db = Arc::clone(&self.db);
        let id = entity.id;
        let changeset = SeriesChangeset::from(entity);

        let model = task::spawn_blocking(move || -> AppResult<SeriesModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::update(series::table.find(id))
                .set(&changeset)
                .get_result::<SeriesModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Series>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<SeriesModel>> {
            let mut conn = db.get_connection()?;
            let m = series::table
                .find(id)
                .first::<SeriesModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Into::into))
    }

    async fn exists(&self, id: &Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let found = select(exists(series::table.find(id))).get_result::<bool>(&mut conn)?;
            Ok(found)
        })
        .await?
    }

    async fn search(&self, query: &str, limit: usize) -> AppResult<Vec<Series>> {
        let db = Arc::clone(&self.db);
        let pattern = format!("%{}%", query);
        let limit = limit as i64;

        let models = task::spawn_blocking(move || -> AppResult<Vec<SeriesModel>> {
            let mut conn = db.get_connection()?;
            let m = series::table
                .filter(series::title.ilike(&pattern))
                .order(series::title.asc())
                .limit(limit)
                .load::<SeriesModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<PaginatedResult<Series>> {
        let db = Arc::clone(&self.db);
        let offset = params.offset();
        let limit = params.limit();
        let params = params.clone();

        let (models, total) = task::spawn_blocking(move || -> AppResult<(Vec<SeriesModel>, i64)> {
            let mut conn = db.get_connection()?;
            let total = series::table.count().get_result::<i64>(&mut conn)?;
            let m = series::table
                .order(series::created_at.desc())
                .offset(offset)
                .limit(limit)
                .load::<SeriesModel>(&mut conn)?;
            Ok((m, total))
        })
        .await??;

        Ok(PaginatedResult::new(
            models.into_iter().map(Into::into).collect(),
            total as u64,
            &params,
        ))
    }

    async fn list_summaries(&self) -> AppResult<Vec<SeriesSummary>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<SeriesSummaryRow>> {
            let mut conn = db.get_connection()?;
            let r = series::table
                .select((
                    series::id,
                    series::title,
                    series::image_url,
                    series::created_at,
                ))
                .load::<SeriesSummaryRow>(&mut conn)?;
            Ok(r)
        })
        .await??;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_summaries(&self, ids: &[Uuid]) -> AppResult<Vec<SeriesSummary>> {
        let db = Arc::clone(&self.db);
        let ids = ids.to_vec();

        let rows = task::spawn_blocking(move || -> AppResult<Vec<SeriesSummaryRow>> {
            let mut conn = db.get_connection()?;
            let r = series::table
                .filter(series::id.eq_any(&ids))
                .select((
                    series::id,
                    series::title,
                    series::image_url,
                    series::created_at,
                ))
                .load::<SeriesSummaryRow>(&mut conn)?;
            Ok(r)
        })
        .await??;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let affected = diesel::delete(series::table.find(id)).execute(&mut conn)?;
            if affected == 0 {
                return Err(AppError::NotFound(format!(
                    "Series with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await?
    }
}
