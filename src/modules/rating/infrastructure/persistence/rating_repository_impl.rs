use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::super::models::{NewRating, RatingModel, RatingSampleRow};
use crate::modules::rating::domain::entities::rating::{Rating, RatingSample};
use crate::modules::rating::domain::repositories::rating_repository::RatingRepository;
use crate::modules::rating::domain::value_objects::rating_target::{
    RatingTarget, RatingTargetKind,
};
use crate::schema::{pillars, ratings};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

pub struct RatingRepositoryImpl {
    db: Arc<Database>,
}

impl RatingRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RatingRepository for RatingRepositoryImpl {
    async fn upsert(&self, entity: &Rating) -> AppResult<Rating> {
        let db = Arc::clone(&self.db);
        let new_rating = NewRating::from(entity);

        let model = task::spawn_blocking(move || -> AppResult<RatingModel> {
            let mut conn = db.get_connection()?;
            let value = new_rating.value;
            let m = diesel::insert_into(ratings::table)
                .values(&new_rating)
                .on_conflict((ratings::user_id, ratings::target_id, ratings::pillar_id))
                .do_update()
                .set((
                    ratings::value.eq(value),
                    ratings::updated_at.eq(diesel::dsl::now),
                ))
                .get_result::<RatingModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(model.into())
    }

    async fn delete(
        &self,
        user_id: &str,
        target: &RatingTarget,
        pillar_id: &Uuid,
    ) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();
        let target_id = target.id;
        let pillar_id = *pillar_id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let affected = diesel::delete(
                ratings::table.find((user_id, target_id, pillar_id)),
            )
            .execute(&mut conn)?;
            if affected == 0 {
                return Err(AppError::NotFound(
                    "Rating not found for this user, target, and pillar".to_string(),
                ));
            }
            Ok(())
        })
        .await?
    }

    async fn find_for_user_target(
        &self,
        user_id: &str,
        target: &RatingTarget,
    ) -> AppResult<Vec<Rating>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();
        let target_id = target.id;
        let kind = target.kind;

        let models = task::spawn_blocking(move || -> AppResult<Vec<RatingModel>> {
            let mut conn = db.get_connection()?;
            let m = ratings::table
                .filter(ratings::user_id.eq(&user_id))
                .filter(ratings::target_id.eq(target_id))
                .filter(ratings::target_kind.eq(kind))
                .load::<RatingModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn samples_for_target(&self, target: &RatingTarget) -> AppResult<Vec<RatingSample>> {
        let db = Arc::clone(&self.db);
        let target_id = target.id;
        let kind = target.kind;

        let rows = task::spawn_blocking(move || -> AppResult<Vec<RatingSampleRow>> {
            let mut conn = db.get_connection()?;
            let r = ratings::table
                .inner_join(pillars::table)
                .filter(ratings::target_id.eq(target_id))
                .filter(ratings::target_kind.eq(kind))
                .select((
                    ratings::target_id,
                    ratings::pillar_id,
                    pillars::name,
                    ratings::value,
                ))
                .load::<RatingSampleRow>(&mut conn)?;
            Ok(r)
        })
        .await??;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn samples_for_kind(&self, kind: RatingTargetKind) -> AppResult<Vec<RatingSample>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<RatingSampleRow>> {
            let mut conn = db.get_connection()?;
            let r = ratings::table
                .inner_join(pillars::table)
                .filter(ratings::target_kind.eq(kind))
                .select((
                    ratings::target_id,
                    ratings::pillar_id,
                    pillars::name,
                    ratings::value,
                ))
                .load::<RatingSampleRow>(&mut conn)?;
            Ok(r)
        })
        .await??;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_for_pillar(&self, pillar_id: &Uuid) -> AppResult<i64> {
        let db = Arc::clone(&self.db);
        let pillar_id = *pillar_id;

        task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let count = ratings::table
                .filter(ratings::pillar_id.eq(pillar_id))
                .count()
                .get_result::<i64>(&mut conn)?;
            Ok(count)
        })
        .await?
    }
}
