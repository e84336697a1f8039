use std::sync::Arc;

use uuid::Uuid;

use crate::log_info;
use crate::modules::rating::domain::{
    entities::pillar::Pillar,
    entities::question::Question,
    repositories::{
        pillar_repository::PillarRepository, rating_repository::RatingRepository,
    },
    value_objects::rating_target::RatingTargetKind,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::shared::UserContext;

pub struct PillarService {
    pillar_repo: Arc<dyn PillarRepository>,
    rating_repo: Arc<dyn RatingRepository>,
}

impl PillarService {
    pub fn new(
        pillar_repo: Arc<dyn PillarRepository>,
        rating_repo: Arc<dyn RatingRepository>,
    ) -> Self {
        Self {
            pillar_repo,
            rating_repo,
        }
    }

    pub async fn create_pillar(
        &self,
        ctx: &UserContext,
        name: String,
        applies_to: RatingTargetKind,
        global: bool,
    ) -> AppResult<Pillar> {
        if global {
            ctx.require_admin()?;
        } else {
            ctx.require_authenticated()?;
        }
        Validator::validate_pillar_name(&name)?;

        let scope = if global {
            None
        } else {
            Some(ctx.user_id.as_str())
        };
        if self
            .pillar_repo
            .find_by_name_in_scope(&name, scope)
            .await?
            .is_some()
        {
            return Err(AppError::ValidationError(format!(
                "Pillar with name '{}' already exists",
                name
            )));
        }

        let pillar = if global {
            Pillar::new_global(name, applies_to)
        } else {
            Pillar::new_for_user(name, ctx.user_id.clone(), applies_to)
        };

        let saved = self.pillar_repo.save(&pillar).await?;
        log_info!("Created pillar '{}' ({})", saved.name, saved.id);
        Ok(saved)
    }

    /// Rename stays legal after ratings exist; it is the only mutation that does.
    pub async fn rename_pillar(
        &self,
        ctx: &UserContext,
        id: &Uuid,
        new_name: String,
    ) -> AppResult<Pillar> {
        ctx.require_authenticated()?;
        Validator::validate_pillar_name(&new_name)?;

        let mut pillar = self.find_managed(ctx, id).await?;

        let scope = pillar.owner_user_id.as_deref();
        if let Some(existing) = self.pillar_repo.find_by_name_in_scope(&new_name, scope).await? {
            if existing.id != pillar.id {
                return Err(AppError::ValidationError(format!(
                    "Pillar with name '{}' already exists",
                    new_name
                )));
            }
        }

        pillar.rename(new_name);
        self.pillar_repo.update(&pillar).await
    }

    pub async fn delete_pillar(&self, ctx: &UserContext, id: &Uuid) -> AppResult<()> {
        ctx.require_authenticated()?;
        let pillar = self.find_managed(ctx, id).await?;

        let referencing = self.rating_repo.count_for_pillar(&pillar.id).await?;
        if referencing > 0 {
            return Err(AppError::Conflict(format!(
                "Pillar '{}' is referenced by {} ratings and cannot be deleted",
                pillar.name, referencing
            )));
        }

        self.pillar_repo.delete(&pillar.id).await?;
        log_info!("Deleted pillar '{}' ({})", pillar.name, pillar.id);
        Ok(())
    }

    pub async fn get_pillar(&self, ctx: &UserContext, id: &Uuid) -> AppResult<Pillar> {
        let pillar = self
            .pillar_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pillar with ID {} not found", id)))?;

        if !pillar.is_visible_to(&ctx.user_id) {
            return Err(AppError::NotFound(format!(
                "Pillar with ID {} not found",
                id
            )));
        }
        Ok(pillar)
    }

    pub async fn list_pillars(
        &self,
        ctx: &UserContext,
        applies_to: Option<RatingTargetKind>,
    ) -> AppResult<Vec<Pillar>> {
        ctx.require_authenticated()?;
        self.pillar_repo.list_visible(&ctx.user_id, applies_to).await
    }

    pub async fn add_question(
        &self,
        ctx: &UserContext,
        pillar_id: &Uuid,
        prompt: String,
    ) -> AppResult<Question> {
        ctx.require_authenticated()?;
        Validator::validate_question_prompt(&prompt)?;

        let pillar = self.find_managed(ctx, pillar_id).await?;

        let position = self
            .pillar_repo
            .questions_for_pillar(&pillar.id)
            .await?
            .len() as i32;

        let question = Question::new(pillar.id, prompt, position);
        self.pillar_repo.save_question(&question).await
    }

    pub async fn remove_question(&self, ctx: &UserContext, question_id: &Uuid) -> AppResult<()> {
        ctx.require_authenticated()?;

        let question = self
            .pillar_repo
            .find_question(question_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Question with ID {} not found", question_id))
            })?;

        // Managing questions requires managing the parent pillar
        self.find_managed(ctx, &question.pillar_id).await?;

        self.pillar_repo.delete_question(&question.id).await
    }

    pub async fn pillar_questions(
        &self,
        ctx: &UserContext,
        pillar_id: &Uuid,
    ) -> AppResult<Vec<Question>> {
        let pillar = self.get_pillar(ctx, pillar_id).await?;
        self.pillar_repo.questions_for_pillar(&pillar.id).await
    }

    async fn find_managed(&self, ctx: &UserContext, id: &Uuid) -> AppResult<Pillar> {
        let pillar = self
            .pillar_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pillar with ID {} not found", id)))?;

        if !pillar.is_managed_by(ctx) {
            return Err(AppError::Unauthorized(format!(
                "Not allowed to manage pillar '{}'",
                pillar.name
            )));
        }
        Ok(pillar)
    }
}
