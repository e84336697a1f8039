use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::{exists, select};
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::super::models::{CharacterModel, NewCharacter};
use crate::modules::catalog::domain::entities::character::Character;
use crate::modules::catalog::domain::repositories::character_repository::CharacterRepository;
use crate::schema::characters;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

pub struct CharacterRepositoryImpl {
    db: Arc<Database>,
}

impl CharacterRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CharacterRepository for CharacterRepositoryImpl {
    async fn save(&self, entity: &Character) -> AppResult<Character> {
        let db = Arc::clone(&self.db);
        let new_character = NewCharacter::from(entity);

        let model = task::spawn_blocking(move || -> AppResult<CharacterModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(characters::table)
                .values(&new_character)
                .get_result::<CharacterModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Character>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<CharacterModel>> {
            let mut conn = db.get_connection()?;
            let m = characters::table
                .find(id)
                .first::<CharacterModel>(&mut conn)
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
            let found = select(exists(characters::table.find(id))).get_result::<bool>(&mut conn)?;
            Ok(found)
        })
        .await?
    }

    async fn find_by_series(&self, series_id: &Uuid) -> AppResult<Vec<Character>> {
        let db = Arc::clone(&self.db);
        let series_id = *series_id;

        let models = task::spawn_blocking(move || -> AppResult<Vec<CharacterModel>> {
            let mut conn = db.get_connection()?;
            let m = characters::table
                .filter(characters::series_id.eq(series_id))
                .order(characters::name.asc())
                .load::<CharacterModel>(&mut conn)?;
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
            let affected = diesel::delete(characters::table.find(id)).execute(&mut conn)?;
            if affected == 0 {
                return Err(AppError::NotFound(format!(
                    "Character with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await?
    }
}
