/// In-memory fakes of the repository ports, so application services can be
/// exercised without a database. Each fake honors the same contract the
/// diesel implementation does (upsert keys, conflict checks, ordering).
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use hyouka::modules::catalog::domain::entities::character::Character;
use hyouka::modules::catalog::domain::entities::series::{Series, SeriesSummary};
use hyouka::modules::catalog::domain::repositories::character_repository::CharacterRepository;
use hyouka::modules::catalog::domain::repositories::series_repository::SeriesRepository;
use hyouka::modules::favorites::domain::entities::favorite_slot::FavoriteSlot;
use hyouka::modules::favorites::domain::repositories::favorites_repository::FavoritesRepository;
use hyouka::modules::rating::domain::entities::pillar::Pillar;
use hyouka::modules::rating::domain::entities::question::Question;
use hyouka::modules::rating::domain::entities::rating::{Rating, RatingSample};
use hyouka::modules::rating::domain::repositories::pillar_repository::PillarRepository;
use hyouka::modules::rating::domain::repositories::rating_repository::RatingRepository;
use hyouka::modules::rating::domain::value_objects::rating_target::{
    RatingTarget, RatingTargetKind,
};
use hyouka::modules::status::domain::entities::series_status::SeriesStatus;
use hyouka::modules::status::domain::repositories::status_repository::StatusRepository;
use hyouka::modules::status::domain::value_objects::watch_status::WatchStatus;
use hyouka::shared::application::{PaginatedResult, PaginationParams};
use hyouka::shared::errors::{AppError, AppResult};

// ============= SERIES =============

#[derive(Default)]
pub struct InMemorySeriesRepository {
    store: Mutex<HashMap<Uuid, Series>>,
}

impl InMemorySeriesRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SeriesRepository for InMemorySeriesRepository {
    async fn save(&self, series: &Series) -> AppResult<Series> {
        self.store
            .lock()
            .unwrap()
            .insert(series.id, series.clone());
        Ok(series.clone())
    }

    async fn update(&self, series: &Series) -> AppResult<Series> {
        let mut store = self.store.lock().unwrap();
        if !store.contains_key(&series.id) {
            return Err(AppError::NotFound(format!(
                "Series with ID {} not found",
                series.id
            )));
        }
        store.insert(series.id, series.clone());
        Ok(series.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Series>> {
        Ok(self.store.lock().unwrap().get(id).cloned())
    }

    async fn exists(&self, id: &Uuid) -> AppResult<bool> {
        Ok(self.store.lock().unwrap().contains_key(id))
    }

    async fn search(&self, query: &str, limit: usize) -> AppResult<Vec<Series>> {
        let needle = query.to_lowercase();
        let mut found: Vec<Series> = self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|s| s.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.title.cmp(&b.title));
        found.truncate(limit);
        Ok(found)
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<PaginatedResult<Series>> {
        let mut all: Vec<Series> = self.store.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(params.offset() as usize)
            .take(params.limit() as usize)
            .collect();
        Ok(PaginatedResult::new(items, total, params))
    }

    async fn list_summaries(&self) -> AppResult<Vec<SeriesSummary>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .values()
            .map(|s| s.summary())
            .collect())
    }

    async fn find_summaries(&self, ids: &[Uuid]) -> AppResult<Vec<SeriesSummary>> {
        let store = self.store.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| store.get(id).map(|s| s.summary()))
            .collect())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.store
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Series with ID {} not found", id)))
    }
}

// ============= CHARACTERS =============

#[derive(Default)]
pub struct InMemoryCharacterRepository {
    store: Mutex<HashMap<Uuid, Character>>,
}

impl InMemoryCharacterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CharacterRepository for InMemoryCharacterRepository {
    async fn save(&self, character: &Character) -> AppResult<Character> {
        self.store
            .lock()
            .unwrap()
            .insert(character.id, character.clone());
        Ok(character.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Character>> {
        Ok(self.store.lock().unwrap().get(id).cloned())
    }

    async fn exists(&self, id: &Uuid) -> AppResult<bool> {
        Ok(self.store.lock().unwrap().contains_key(id))
    }

    async fn find_by_series(&self, series_id: &Uuid) -> AppResult<Vec<Character>> {
        let mut found: Vec<Character> = self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|c| &c.series_id == series_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.store
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Character with ID {} not found", id)))
    }
}

// ============= PILLARS =============

#[derive(Default)]
pub struct InMemoryPillarRepository {
    pillars: Mutex<HashMap<Uuid, Pillar>>,
    questions: Mutex<HashMap<Uuid, Question>>,
}

impl InMemoryPillarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pillar_name(&self, id: &Uuid) -> Option<String> {
        self.pillars.lock().unwrap().get(id).map(|p| p.name.clone())
    }
}

#[async_trait]
impl PillarRepository for InMemoryPillarRepository {
    async fn save(&self, pillar: &Pillar) -> AppResult<Pillar> {
        self.pillars
            .lock()
            .unwrap()
            .insert(pillar.id, pillar.clone());
        Ok(pillar.clone())
    }

    async fn update(&self, pillar: &Pillar) -> AppResult<Pillar> {
        let mut store = self.pillars.lock().unwrap();
        if !store.contains_key(&pillar.id) {
            return Err(AppError::NotFound(format!(
                "Pillar with ID {} not found",
                pillar.id
            )));
        }
        store.insert(pillar.id, pillar.clone());
        Ok(pillar.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Pillar>> {
        Ok(self.pillars.lock().unwrap().get(id).cloned())
    }

    async fn find_by_name_in_scope(
        &self,
        name: &str,
        owner_user_id: Option<&str>,
    ) -> AppResult<Option<Pillar>> {
        Ok(self
            .pillars
            .lock()
            .unwrap()
            .values()
            .find(|p| p.name == name && p.owner_user_id.as_deref() == owner_user_id)
            .cloned())
    }

    async fn list_visible(
        &self,
        user_id: &str,
        applies_to: Option<RatingTargetKind>,
    ) -> AppResult<Vec<Pillar>> {
        let mut found: Vec<Pillar> = self
            .pillars
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.is_visible_to(user_id))
            .filter(|p| applies_to.map_or(true, |kind| p.applies_to == kind))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let removed = self.pillars.lock().unwrap().remove(id);
        if removed.is_none() {
            return Err(AppError::NotFound(format!(
                "Pillar with ID {} not found",
                id
            )));
        }
        // Cascade, as the schema does
        self.questions
            .lock()
            .unwrap()
            .retain(|_, q| &q.pillar_id != id);
        Ok(())
    }

    async fn save_question(&self, question: &Question) -> AppResult<Question> {
        self.questions
            .lock()
            .unwrap()
            .insert(question.id, question.clone());
        Ok(question.clone())
    }

    async fn find_question(&self, id: &Uuid) -> AppResult<Option<Question>> {
        Ok(self.questions.lock().unwrap().get(id).cloned())
    }

    async fn questions_for_pillar(&self, pillar_id: &Uuid) -> AppResult<Vec<Question>> {
        let mut found: Vec<Question> = self
            .questions
            .lock()
            .unwrap()
            .values()
            .filter(|q| &q.pillar_id == pillar_id)
            .cloned()
            .collect();
        found.sort_by_key(|q| q.position);
        Ok(found)
    }

    async fn delete_question(&self, id: &Uuid) -> AppResult<()> {
        self.questions
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Question with ID {} not found", id)))
    }
}

// ============= RATINGS =============

/// Keyed like the database: (user, target, pillar). Needs the pillar fake to
/// resolve names when producing samples.
pub struct InMemoryRatingRepository {
    store: Mutex<HashMap<(String, Uuid, Uuid), Rating>>,
    pillars: std::sync::Arc<InMemoryPillarRepository>,
}

impl InMemoryRatingRepository {
    pub fn new(pillars: std::sync::Arc<InMemoryPillarRepository>) -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
            pillars,
        }
    }

    fn to_sample(&self, rating: &Rating) -> RatingSample {
        RatingSample {
            target_id: rating.target_id,
            pillar_id: rating.pillar_id,
            pillar_name: self
                .pillars
                .pillar_name(&rating.pillar_id)
                .unwrap_or_default(),
            value: rating.value,
        }
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn upsert(&self, rating: &Rating) -> AppResult<Rating> {
        let key = (rating.user_id.clone(), rating.target_id, rating.pillar_id);
        let mut store = self.store.lock().unwrap();

        let saved = match store.get(&key) {
            Some(existing) => {
                let mut updated = existing.clone();
                updated.value = rating.value;
                updated.updated_at = Utc::now();
                updated
            }
            None => rating.clone(),
        };
        store.insert(key, saved.clone());
        Ok(saved)
    }

    async fn delete(
        &self,
        user_id: &str,
        target: &RatingTarget,
        pillar_id: &Uuid,
    ) -> AppResult<()> {
        let key = (user_id.to_string(), target.id, *pillar_id);
        self.store
            .lock()
            .unwrap()
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| {
                AppError::NotFound(
                    "Rating not found for this user, target, and pillar".to_string(),
                )
            })
    }

    async fn find_for_user_target(
        &self,
        user_id: &str,
        target: &RatingTarget,
    ) -> AppResult<Vec<Rating>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|r| {
                r.user_id == user_id
                    && r.target_id == target.id
                    && r.target_kind == target.kind
            })
            .cloned()
            .collect())
    }

    async fn samples_for_target(&self, target: &RatingTarget) -> AppResult<Vec<RatingSample>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.target_id == target.id && r.target_kind == target.kind)
            .map(|r| self.to_sample(r))
            .collect())
    }

    async fn samples_for_kind(&self, kind: RatingTargetKind) -> AppResult<Vec<RatingSample>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.target_kind == kind)
            .map(|r| self.to_sample(r))
            .collect())
    }

    async fn count_for_pillar(&self, pillar_id: &Uuid) -> AppResult<i64> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|r| &r.pillar_id == pillar_id)
            .count() as i64)
    }
}

// ============= FAVORITES =============

#[derive(Default)]
pub struct InMemoryFavoritesRepository {
    store: Mutex<HashMap<(String, i32), FavoriteSlot>>,
}

impl InMemoryFavoritesRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoritesRepository for InMemoryFavoritesRepository {
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<FavoriteSlot>> {
        let mut found: Vec<FavoriteSlot> = self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by_key(|s| s.slot);
        Ok(found)
    }

    async fn upsert_slot(
        &self,
        user_id: &str,
        slot: i32,
        series_id: Uuid,
    ) -> AppResult<FavoriteSlot> {
        let now = Utc::now();
        let entry = FavoriteSlot {
            user_id: user_id.to_string(),
            slot,
            series_id,
            created_at: now,
            updated_at: now,
        };
        self.store
            .lock()
            .unwrap()
            .insert((user_id.to_string(), slot), entry.clone());
        Ok(entry)
    }

    async fn clear_slot(&self, user_id: &str, slot: i32) -> AppResult<()> {
        self.store
            .lock()
            .unwrap()
            .remove(&(user_id.to_string(), slot))
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Favorite slot {} is empty", slot)))
    }

    async fn replace_all(
        &self,
        user_id: &str,
        expected_series: &[Uuid],
        entries: &[(i32, Uuid)],
    ) -> AppResult<Vec<FavoriteSlot>> {
        let mut store = self.store.lock().unwrap();

        let mut current: Vec<Uuid> = store
            .values()
            .filter(|s| s.user_id == user_id)
            .map(|s| s.series_id)
            .collect();
        current.sort();
        let mut expected = expected_series.to_vec();
        expected.sort();

        if current != expected {
            return Err(AppError::Conflict(
                "Favorites changed concurrently; refetch and retry".to_string(),
            ));
        }

        store.retain(|(uid, _), _| uid != user_id);

        let now = Utc::now();
        let mut saved = Vec::new();
        for (slot, series_id) in entries {
            let entry = FavoriteSlot {
                user_id: user_id.to_string(),
                slot: *slot,
                series_id: *series_id,
                created_at: now,
                updated_at: now,
            };
            store.insert((user_id.to_string(), *slot), entry.clone());
            saved.push(entry);
        }
        Ok(saved)
    }
}

// ============= STATUSES =============

#[derive(Default)]
pub struct InMemoryStatusRepository {
    store: Mutex<HashMap<(String, Uuid), SeriesStatus>>,
    count_query_calls: Mutex<usize>,
}

impl InMemoryStatusRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many grouped-count calls were made; the service must derive all
    /// four buckets from one
    pub fn count_queries(&self) -> usize {
        *self.count_query_calls.lock().unwrap()
    }
}

#[async_trait]
impl StatusRepository for InMemoryStatusRepository {
    async fn set(
        &self,
        user_id: &str,
        series_id: &Uuid,
        status: WatchStatus,
    ) -> AppResult<SeriesStatus> {
        let key = (user_id.to_string(), *series_id);
        let mut store = self.store.lock().unwrap();
        let now = Utc::now();

        let entry = match store.get(&key) {
            Some(existing) => {
                let mut updated = existing.clone();
                updated.status = status;
                updated.updated_at = now;
                updated
            }
            None => SeriesStatus {
                user_id: user_id.to_string(),
                series_id: *series_id,
                status,
                created_at: now,
                updated_at: now,
            },
        };
        store.insert(key, entry.clone());
        Ok(entry)
    }

    async fn clear(&self, user_id: &str, series_id: &Uuid) -> AppResult<()> {
        self.store
            .lock()
            .unwrap()
            .remove(&(user_id.to_string(), *series_id));
        Ok(())
    }

    async fn find(&self, user_id: &str, series_id: &Uuid) -> AppResult<Option<SeriesStatus>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .get(&(user_id.to_string(), *series_id))
            .cloned())
    }

    async fn list_by_status(
        &self,
        user_id: &str,
        status: WatchStatus,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResult<SeriesStatus>> {
        let mut found: Vec<SeriesStatus> = self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|s| s.user_id == user_id && s.status == status)
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.series_id.cmp(&b.series_id))
        });

        let total = found.len() as u64;
        let items = found
            .into_iter()
            .skip(params.offset() as usize)
            .take(params.limit() as usize)
            .collect();
        Ok(PaginatedResult::new(items, total, params))
    }

    async fn counts_by_status(&self, user_id: &str) -> AppResult<Vec<(WatchStatus, i64)>> {
        *self.count_query_calls.lock().unwrap() += 1;

        let mut grouped: HashMap<WatchStatus, i64> = HashMap::new();
        for entry in self.store.lock().unwrap().values() {
            if entry.user_id == user_id {
                *grouped.entry(entry.status).or_insert(0) += 1;
            }
        }
        Ok(grouped.into_iter().collect())
    }
}

// ============= FACTORIES =============

pub fn make_series(title: &str) -> Series {
    Series::new(title.to_string())
}

pub async fn seed_series(repo: &InMemorySeriesRepository, titles: &[&str]) -> Vec<Series> {
    let mut saved = Vec::new();
    for title in titles {
        let series = make_series(title);
        repo.save(&series).await.unwrap();
        saved.push(series);
    }
    saved
}
