use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::rating::domain::entities::rating::{Rating, RatingSample};
use crate::modules::rating::domain::value_objects::rating_target::{
    RatingTarget, RatingTargetKind,
};
use crate::shared::errors::AppResult;

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Insert-or-replace on the (user, target, pillar) key
    async fn upsert(&self, rating: &Rating) -> AppResult<Rating>;

    async fn delete(
        &self,
        user_id: &str,
        target: &RatingTarget,
        pillar_id: &Uuid,
    ) -> AppResult<()>;

    /// One user's ratings for one target, across pillars
    async fn find_for_user_target(
        &self,
        user_id: &str,
        target: &RatingTarget,
    ) -> AppResult<Vec<Rating>>;

    /// Every rating for one target, joined with pillar names
    async fn samples_for_target(&self, target: &RatingTarget) -> AppResult<Vec<RatingSample>>;

    /// Every rating for every target of a kind; the ranking snapshot
    async fn samples_for_kind(&self, kind: RatingTargetKind) -> AppResult<Vec<RatingSample>>;

    /// How many ratings reference a pillar (guards pillar deletion)
    async fn count_for_pillar(&self, pillar_id: &Uuid) -> AppResult<i64>;
}
