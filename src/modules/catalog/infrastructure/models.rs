use crate::schema::{characters, series};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::catalog::domain::entities::character::Character;
use crate::modules::catalog::domain::entities::series::{Series, SeriesSummary};

// ============= SERIES MODELS =============

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = series)]
pub struct SeriesModel {
    pub id: Uuid,
    pub title: String,
    pub synopsis: Option<String>,
    pub episodes: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = series)]
pub struct NewSeries {
    pub id: Uuid,
    pub title: String,
    pub synopsis: Option<String>,
    pub episodes: Option<i32>,
    pub image_url: Option<String>,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = series)]
pub struct SeriesChangeset {
    pub title: String,
    pub synopsis: Option<String>,
    pub episodes: Option<i32>,
    pub image_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Projection for ranking and list joins
#[derive(Queryable, Debug, Clone)]
pub struct SeriesSummaryRow {
    pub id: Uuid,
    pub title: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<SeriesModel> for Series {
    fn from(m: SeriesModel) -> Self {
        Series {
            id: m.id,
            title: m.title,
            synopsis: m.synopsis,
            episodes: m.episodes,
            image_url: m.image_url,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<SeriesSummaryRow> for SeriesSummary {
    fn from(r: SeriesSummaryRow) -> Self {
        SeriesSummary {
            id: r.id,
            title: r.title,
            image_url: r.image_url,
            created_at: r.created_at,
        }
    }
}

impl From<&Series> for NewSeries {
    fn from(e: &Series) -> Self {
        NewSeries {
            id: e.id,
            title: e.title.clone(),
            synopsis: e.synopsis.clone(),
            episodes: e.episodes,
            image_url: e.image_url.clone(),
        }
    }
}

impl From<&Series> for SeriesChangeset {
    fn from(e: &Series) -> Self {
        SeriesChangeset {
            title: e.title.clone(),
            synopsis: e.synopsis.clone(),
            episodes: e.episodes,
            image_url: e.image_url.clone(),
            updated_at: Utc::now(),
        }
    }
}

// ============= CHARACTER MODELS =============

#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(SeriesModel, foreign_key = series_id))]
#[diesel(table_name = characters)]
pub struct CharacterModel {
    pub id: Uuid,
    pub series_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = characters)]
pub struct NewCharacter {
    pub id: Uuid,
    pub series_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<CharacterModel> for Character {
    fn from(m: CharacterModel) -> Self {
        Character {
            id: m.id,
            series_id: m.series_id,
            name: m.name,
            description: m.description,
            image_url: m.image_url,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<&Character> for NewCharacter {
    fn from(e: &Character) -> Self {
        NewCharacter {
            id: e.id,
            series_id: e.series_id,
            name: e.name.clone(),
            description: e.description.clone(),
            image_url: e.image_url.clone(),
        }
    }
}
