use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::domain::entities::character::Character;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait CharacterRepository: Send + Sync {
    async fn save(&self, character: &Character) -> AppResult<Character>;

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Character>>;

    async fn exists(&self, id: &Uuid) -> AppResult<bool>;

    /// All characters of a series, name order
    async fn find_by_series(&self, series_id: &Uuid) -> AppResult<Vec<Character>>;

    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
