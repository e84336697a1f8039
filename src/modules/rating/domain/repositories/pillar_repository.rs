use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::rating::domain::entities::pillar::Pillar;
use crate::modules::rating::domain::entities::question::Question;
use crate::modules::rating::domain::value_objects::rating_target::RatingTargetKind;
use crate::shared::errors::AppResult;

/// Pillars and their question sets. Questions live with their pillar, so
/// they share the port.
#[async_trait]
pub trait PillarRepository: Send + Sync {
    async fn save(&self, pillar: &Pillar) -> AppResult<Pillar>;

    async fn update(&self, pillar: &Pillar) -> AppResult<Pillar>;

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Pillar>>;

    /// Duplicate-name check within one scope (global or one owner)
    async fn find_by_name_in_scope(
        &self,
        name: &str,
        owner_user_id: Option<&str>,
    ) -> AppResult<Option<Pillar>>;

    /// Global pillars plus the given user's own, optionally narrowed by kind
    async fn list_visible(
        &self,
        user_id: &str,
        applies_to: Option<RatingTargetKind>,
    ) -> AppResult<Vec<Pillar>>;

    /// Deletes the pillar and, by cascade, its questions
    async fn delete(&self, id: &Uuid) -> AppResult<()>;

    async fn save_question(&self, question: &Question) -> AppResult<Question>;

    async fn find_question(&self, id: &Uuid) -> AppResult<Option<Question>>;

    async fn questions_for_pillar(&self, pillar_id: &Uuid) -> AppResult<Vec<Question>>;

    async fn delete_question(&self, id: &Uuid) -> AppResult<()>;
}
