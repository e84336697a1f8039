use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry users can rate, favorite, and track.
///
/// `created_at` doubles as the ranking tie-break key, so it is set once at
/// construction and never touched again.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: Uuid,
    pub title: String,
    pub synopsis: Option<String>,
    pub episodes: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Series {
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            synopsis: None,
            episodes: None,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_synopsis(mut self, synopsis: String) -> Self {
        self.synopsis = Some(synopsis);
        self
    }

    pub fn with_episodes(mut self, episodes: i32) -> Self {
        self.episodes = Some(episodes);
        self
    }

    pub fn with_image_url(mut self, image_url: String) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn rename(&mut self, new_title: String) {
        self.title = new_title;
        self.updated_at = Utc::now();
    }

    pub fn update_synopsis(&mut self, synopsis: Option<String>) {
        self.synopsis = synopsis;
        self.updated_at = Utc::now();
    }

    pub fn update_episodes(&mut self, episodes: Option<i32>) {
        self.episodes = episodes;
        self.updated_at = Utc::now();
    }

    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary {
            id: self.id,
            title: self.title.clone(),
            image_url: self.image_url.clone(),
            created_at: self.created_at,
        }
    }
}

/// Lightweight projection used by rankings, favorites, and status pages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub id: Uuid,
    pub title: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
