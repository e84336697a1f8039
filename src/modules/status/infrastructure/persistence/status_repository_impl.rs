use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::count_star;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::super::models::{NewSeriesStatus, SeriesStatusModel};
use crate::modules::status::domain::entities::series_status::SeriesStatus;
use crate::modules::status::domain::repositories::status_repository::StatusRepository;
use crate::modules::status::domain::value_objects::watch_status::WatchStatus;
use crate::schema::series_statuses;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct StatusRepositoryImpl {
    db: Arc<Database>,
}

impl StatusRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatusRepository for StatusRepositoryImpl {
    async fn set(
        &self,
        user_id: &str,
        series_id: &Uuid,
        status: WatchStatus,
    ) -> AppResult<SeriesStatus> {
        let db = Arc::clone(&self.db);
        let new_status = NewSeriesStatus {
            user_id: user_id.to_string(),
            series_id: *series_id,
            status,
        };

        let model = task::spawn_blocking(move || -> AppResult<SeriesStatusModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(series_statuses::table)
                .values(&new_status)
                .on_conflict((series_statuses::user_id, series_statuses::series_id))
                .do_update()
                .set((
                    series_statuses::status.eq(status),
                    series_statuses::updated_at.eq(diesel::dsl::now),
                ))
                .get_result::<SeriesStatusModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(model.into())
    }

    async fn clear(&self, user_id: &str, series_id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();
        let series_id = *series_id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            // No-op when nothing was set; clearing twice is legal
            diesel::delete(series_statuses::table.find((user_id, series_id)))
                .execute(&mut conn)?;
            Ok(())
        })
        .await?
    }

    async fn find(&self, user_id: &str, series_id: &Uuid) -> AppResult<Option<SeriesStatus>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();
        let series_id = *series_id;

        let model = task::spawn_blocking(move || -> AppResult<Option<SeriesStatusModel>> {
            let mut conn = db.get_connection()?;
            let m = series_statuses::table
                .find((user_id, series_id))
                .first::<SeriesStatusModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Into::into))
    }

    async fn list_by_status(
        &self,
        user_id: &str,
        status: WatchStatus,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResult<SeriesStatus>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();
        let offset = params.offset();
        let limit = params.limit();
        let params = params.clone();

        let (models, total) =
            task::spawn_blocking(move || -> AppResult<(Vec<SeriesStatusModel>, i64)> {
                let mut conn = db.get_connection()?;

                let total = series_statuses::table
                    .filter(series_statuses::user_id.eq(&user_id))
                    .filter(series_statuses::status.eq(status))
                    .count()
                    .get_result::<i64>(&mut conn)?;

                let m = series_statuses::table
                    .filter(series_statuses::user_id.eq(&user_id))
                    .filter(series_statuses::status.eq(status))
                    .order((
                        series_statuses::updated_at.desc(),
                        series_statuses::series_id.asc(),
                    ))
                    .offset(offset)
                    .limit(limit)
                    .load::<SeriesStatusModel>(&mut conn)?;

                Ok((m, total))
            })
            .await??;

        Ok(PaginatedResult::new(
            models.into_iter().map(Into::into).collect(),
            total as u64,
            &params,
        ))
    }

    async fn counts_by_status(&self, user_id: &str) -> AppResult<Vec<(WatchStatus, i64)>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> AppResult<Vec<(WatchStatus, i64)>> {
            let mut conn = db.get_connection()?;
            let counts = series_statuses::table
                .filter(series_statuses::user_id.eq(&user_id))
                .group_by(series_statuses::status)
                .select((series_statuses::status, count_star()))
                .load::<(WatchStatus, i64)>(&mut conn)?;
            Ok(counts)
        })
        .await?
    }
}
