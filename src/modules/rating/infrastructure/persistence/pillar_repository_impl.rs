use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::super::models::{NewPillar, NewQuestion, PillarChangeset, PillarModel, QuestionModel};
use crate::modules::rating::domain::entities::pillar::Pillar;
use crate::modules::rating::domain::entities::question::Question;
use crate::modules::rating::domain::repositories::pillar_repository::PillarRepository;
use crate::modules::rating::domain::value_objects::rating_target::RatingTargetKind;
use crate::schema::{pillar_questions, pillars};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

pub struct PillarRepositoryImpl {
    db: Arc<Database>,
}

impl PillarRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PillarRepository for PillarRepositoryImpl {
    async fn save(&self, entity: &Pillar) -> AppResult<Pillar> {
        let db = Arc::clone(&self.db);
        let new_pillar = NewPillar::from(entity);

        let model = task::spawn_blocking(move || -> AppResult<PillarModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(pillars::table)
                .values(&new_pillar)
                .get_result::<PillarModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(model.into())
    }

    async fn update(&self, entity: &Pillar) -> AppResult<Pillar> {
        let db = Arc::clone(&self.db);
        let id = entity.id;
        let changeset = PillarChangeset::from(entity);

        let model = task::spawn_blocking(move || -> AppResult<PillarModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::update(pillars::table.find(id))
                .set(&changeset)
                .get_result::<PillarModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Pillar>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<PillarModel>> {
            let mut conn = db.get_connection()?;
            let m = pillars::table
                .find(id)
                .first::<PillarModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Into::into))
    }

    async fn find_by_name_in_scope(
        &self,
        name: &str,
        owner_user_id: Option<&str>,
    ) -> AppResult<Option<Pillar>> {
        let db = Arc::clone(&self.db);
        let name = name.to_string();
        let owner = owner_user_id.map(|s| s.to_string());

        let model = task::spawn_blocking(move || -> AppResult<Option<PillarModel>> {
            let mut conn = db.get_connection()?;
            let query = pillars::table.filter(pillars::name.eq(&name));
            let m = match owner {
                Some(owner) => query
                    .filter(pillars::owner_user_id.eq(owner))
                    .first::<PillarModel>(&mut conn)
                    .optional()?,
                None => query
                    .filter(pillars::owner_user_id.is_null())
                    .first::<PillarModel>(&mut conn)
                    .optional()?,
            };
            Ok(m)
        })
        .await??;

        Ok(model.map(Into::into))
    }

    async fn list_visible(
        &self,
        user_id: &str,
        applies_to: Option<RatingTargetKind>,
    ) -> AppResult<Vec<Pillar>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        let models = task::spawn_blocking(move || -> AppResult<Vec<PillarModel>> {
            let mut conn = db.get_connection()?;
            let mut query = pillars::table
                .filter(
                    pillars::owner_user_id
                        .is_null()
                        .or(pillars::owner_user_id.eq(&user_id)),
                )
                .into_boxed();

            if let Some(kind) = applies_to {
                query = query.filter(pillars::applies_to.eq(kind));
            }

            let m = query
                .order(pillars::name.asc())
                .load::<PillarModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let affected = diesel::delete(pillars::table.find(id)).execute(&mut conn)?;
            if affected == 0 {
                return Err(AppError::NotFound(format!(
                    "Pillar with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await?
    }

    async fn save_question(&self, entity: &Question) -> AppResult<Question> {
        let db = Arc::clone(&self.db);
        let new_question = NewQuestion::from(entity);

        let model = task::spawn_blocking(move || -> AppResult<QuestionModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(pillar_questions::table)
                .values(&new_question)
                .get_result::<QuestionModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(model.into())
    }

    async fn find_question(&self, id: &Uuid) -> AppResult<Option<Question>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<QuestionModel>> {
            let mut conn = db.get_connection()?;
            let m = pillar_questions::table
                .find(id)
                .first::<QuestionModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Into::into))
    }

    async fn questions_for_pillar(&self, pillar_id: &Uuid) -> AppResult<Vec<Question>> {
        let db = Arc::clone(&self.db);
        let pillar_id = *pillar_id;

        let models = task::spawn_blocking(move || -> AppResult<Vec<QuestionModel>> {
            let mut conn = db.get_connection()?;
            let m = pillar_questions::table
                .filter(pillar_questions::pillar_id.eq(pillar_id))
                .order(pillar_questions::position.asc())
                .load::<QuestionModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete_question(&self, id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let affected = diesel::delete(pillar_questions::table.find(id)).execute(&mut conn)?;
            if affected == 0 {
                return Err(AppError::NotFound(format!(
                    "Question with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await?
    }
}
