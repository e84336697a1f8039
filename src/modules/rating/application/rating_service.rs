use std::sync::Arc;

use uuid::Uuid;

use crate::log_debug;
use crate::modules::catalog::domain::repositories::{
    character_repository::CharacterRepository, series_repository::SeriesRepository,
};
use crate::modules::rating::domain::{
    entities::rating::Rating,
    repositories::{
        pillar_repository::PillarRepository, rating_repository::RatingRepository,
    },
    services::score_aggregator::ScoreAggregator,
    value_objects::aggregated_score::AggregatedScore,
    value_objects::rating_target::{RatingTarget, RatingTargetKind},
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::shared::UserContext;

pub struct RatingService {
    rating_repo: Arc<dyn RatingRepository>,
    pillar_repo: Arc<dyn PillarRepository>,
    series_repo: Arc<dyn SeriesRepository>,
    character_repo: Arc<dyn CharacterRepository>,
}

impl RatingService {
    pub fn new(
        rating_repo: Arc<dyn RatingRepository>,
        pillar_repo: Arc<dyn PillarRepository>,
        series_repo: Arc<dyn SeriesRepository>,
        character_repo: Arc<dyn CharacterRepository>,
    ) -> Self {
        Self {
            rating_repo,
            pillar_repo,
            series_repo,
            character_repo,
        }
    }

    /// Write or replace the caller's rating for one pillar of one target.
    /// Range and pillar/target consistency are checked here, never at
    /// aggregation time.
    pub async fn rate(
        &self,
        ctx: &UserContext,
        target: RatingTarget,
        pillar_id: &Uuid,
        value: f32,
    ) -> AppResult<Rating> {
        ctx.require_authenticated()?;
        Validator::validate_rating_value(value)?;

        let pillar = self
            .pillar_repo
            .find_by_id(pillar_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pillar with ID {} not found", pillar_id)))?;

        if !pillar.is_visible_to(&ctx.user_id) {
            return Err(AppError::NotFound(format!(
                "Pillar with ID {} not found",
                pillar_id
            )));
        }

        if pillar.applies_to != target.kind {
            return Err(AppError::ValidationError(format!(
                "Pillar '{}' applies to {} targets, not {}",
                pillar.name, pillar.applies_to, target.kind
            )));
        }

        self.ensure_target_exists(&target).await?;

        let rating = Rating::new(ctx.user_id.clone(), target, pillar.id, value);
        let saved = self.rating_repo.upsert(&rating).await?;
        log_debug!(
            "User {} rated {} on pillar '{}' = {}",
            ctx.user_id,
            target,
            pillar.name,
            value
        );
        Ok(saved)
    }

    pub async fn delete_rating(
        &self,
        ctx: &UserContext,
        target: RatingTarget,
        pillar_id: &Uuid,
    ) -> AppResult<()> {
        ctx.require_authenticated()?;
        self.rating_repo
            .delete(&ctx.user_id, &target, pillar_id)
            .await
    }

    /// The caller's own per-pillar values for a target
    pub async fn user_ratings(
        &self,
        ctx: &UserContext,
        target: RatingTarget,
    ) -> AppResult<Vec<Rating>> {
        ctx.require_authenticated()?;
        self.rating_repo
            .find_for_user_target(&ctx.user_id, &target)
            .await
    }

    /// Derived score across all users. `None` means the target is unrated;
    /// the ranking builder drops such targets instead of sorting them last.
    pub async fn aggregated_score(
        &self,
        target: RatingTarget,
    ) -> AppResult<Option<AggregatedScore>> {
        self.ensure_target_exists(&target).await?;

        let samples = self.rating_repo.samples_for_target(&target).await?;
        Ok(ScoreAggregator::aggregate(&samples))
    }

    async fn ensure_target_exists(&self, target: &RatingTarget) -> AppResult<()> {
        let found = match target.kind {
            RatingTargetKind::Series => self.series_repo.exists(&target.id).await?,
            RatingTargetKind::Character => self.character_repo.exists(&target.id).await?,
        };

        if !found {
            return Err(AppError::NotFound(format!(
                "Rating target {} does not exist",
                target
            )));
        }
        Ok(())
    }
}
