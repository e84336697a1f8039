use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::super::models::{FavoriteSlotModel, NewFavoriteSlot};
use crate::modules::favorites::domain::entities::favorite_slot::FavoriteSlot;
use crate::modules::favorites::domain::repositories::favorites_repository::FavoritesRepository;
use crate::schema::favorite_slots;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

pub struct FavoritesRepositoryImpl {
    db: Arc<Database>,
}

impl FavoritesRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoritesRepository for FavoritesRepositoryImpl {
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<FavoriteSlot>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        let models = task::spawn_blocking(move || -> AppResult<Vec<FavoriteSlotModel>> {
            let mut conn = db.get_connection()?;
            let m = favorite_slots::table
                .filter(favorite_slots::user_id.eq(&user_id))
                .order(favorite_slots::slot.asc())
                .load::<FavoriteSlotModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn upsert_slot(
        &self,
        user_id: &str,
        slot: i32,
        series_id: Uuid,
    ) -> AppResult<FavoriteSlot> {
        let db = Arc::clone(&self.db);
        let new_slot = NewFavoriteSlot {
            user_id: user_id.to_string(),
            slot,
            series_id,
        };

        let model = task::spawn_blocking(move || -> AppResult<FavoriteSlotModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(favorite_slots::table)
                .values(&new_slot)
                .on_conflict((favorite_slots::user_id, favorite_slots::slot))
                .do_update()
                .set((
                    favorite_slots::series_id.eq(series_id),
                    favorite_slots::updated_at.eq(diesel::dsl::now),
                ))
                .get_result::<FavoriteSlotModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(model.into())
    }

    async fn clear_slot(&self, user_id: &str, slot: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let affected =
                diesel::delete(favorite_slots::table.find((user_id, slot))).execute(&mut conn)?;
            if affected == 0 {
                return Err(AppError::NotFound(format!(
                    "Favorite slot {} is empty",
                    slot
                )));
            }
            Ok(())
        })
        .await?
    }

    async fn replace_all(
        &self,
        user_id: &str,
        expected_series: &[Uuid],
        entries: &[(i32, Uuid)],
    ) -> AppResult<Vec<FavoriteSlot>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();
        let mut expected = expected_series.to_vec();
        expected.sort();
        let new_rows: Vec<NewFavoriteSlot> = entries
            .iter()
            .map(|(slot, series_id)| NewFavoriteSlot {
                user_id: user_id.clone(),
                slot: *slot,
                series_id: *series_id,
            })
            .collect();

        let models = task::spawn_blocking(move || -> AppResult<Vec<FavoriteSlotModel>> {
            let mut conn = db.get_connection()?;

            conn.transaction::<Vec<FavoriteSlotModel>, AppError, _>(|conn| {
                // Re-check under the transaction so a concurrent mutation
                // surfaces as Conflict instead of silently losing writes
                let mut current: Vec<Uuid> = favorite_slots::table
                    .filter(favorite_slots::user_id.eq(&user_id))
                    .select(favorite_slots::series_id)
                    .load::<Uuid>(conn)?;
                current.sort();

                if current != expected {
                    return Err(AppError::Conflict(
                        "Favorites changed concurrently; refetch and retry".to_string(),
                    ));
                }

                diesel::delete(
                    favorite_slots::table.filter(favorite_slots::user_id.eq(&user_id)),
                )
                .execute(conn)?;

                let m = diesel::insert_into(favorite_slots::table)
                    .values(&new_rows)
                    .get_results::<FavoriteSlotModel>(conn)?;
                Ok(m)
            })
        })
        .await??;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
