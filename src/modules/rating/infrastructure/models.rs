use crate::schema::{pillar_questions, pillars, ratings};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::rating::domain::entities::pillar::Pillar;
use crate::modules::rating::domain::entities::question::Question;
use crate::modules::rating::domain::entities::rating::{Rating, RatingSample};
use crate::modules::rating::domain::value_objects::rating_target::RatingTargetKind;

// ============= PILLAR MODELS =============

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = pillars)]
pub struct PillarModel {
    pub id: Uuid,
    pub name: String,
    pub owner_user_id: Option<String>,
    pub applies_to: RatingTargetKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = pillars)]
pub struct NewPillar {
    pub id: Uuid,
    pub name: String,
    pub owner_user_id: Option<String>,
    pub applies_to: RatingTargetKind,
}

// Rename is the only pillar mutation
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = pillars)]
pub struct PillarChangeset {
    pub name: String,
    pub updated_at: DateTime<Utc>,
}

impl From<PillarModel> for Pillar {
    fn from(m: PillarModel) -> Self {
        Pillar {
            id: m.id,
            name: m.name,
            owner_user_id: m.owner_user_id,
            applies_to: m.applies_to,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<&Pillar> for NewPillar {
    fn from(e: &Pillar) -> Self {
        NewPillar {
            id: e.id,
            name: e.name.clone(),
            owner_user_id: e.owner_user_id.clone(),
            applies_to: e.applies_to,
        }
    }
}

impl From<&Pillar> for PillarChangeset {
    fn from(e: &Pillar) -> Self {
        PillarChangeset {
            name: e.name.clone(),
            updated_at: Utc::now(),
        }
    }
}

// ============= QUESTION MODELS =============

#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(PillarModel, foreign_key = pillar_id))]
#[diesel(table_name = pillar_questions)]
pub struct QuestionModel {
    pub id: Uuid,
    pub pillar_id: Uuid,
    pub prompt: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = pillar_questions)]
pub struct NewQuestion {
    pub id: Uuid,
    pub pillar_id: Uuid,
    pub prompt: String,
    pub position: i32,
}

impl From<QuestionModel> for Question {
    fn from(m: QuestionModel) -> Self {
        Question {
            id: m.id,
            pillar_id: m.pillar_id,
            prompt: m.prompt,
            position: m.position,
            created_at: m.created_at,
        }
    }
}

impl From<&Question> for NewQuestion {
    fn from(e: &Question) -> Self {
        NewQuestion {
            id: e.id,
            pillar_id: e.pillar_id,
            prompt: e.prompt.clone(),
            position: e.position,
        }
    }
}

// ============= RATING MODELS =============

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = ratings)]
#[diesel(primary_key(user_id, target_id, pillar_id))]
pub struct RatingModel {
    pub user_id: String,
    pub target_id: Uuid,
    pub target_kind: RatingTargetKind,
    pub pillar_id: Uuid,
    pub value: f32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = ratings)]
pub struct NewRating {
    pub user_id: String,
    pub target_id: Uuid,
    pub target_kind: RatingTargetKind,
    pub pillar_id: Uuid,
    pub value: f32,
}

/// Joined row backing the aggregation read model
#[derive(Queryable, Debug, Clone)]
pub struct RatingSampleRow {
    pub target_id: Uuid,
    pub pillar_id: Uuid,
    pub pillar_name: String,
    pub value: f32,
}

impl From<RatingModel> for Rating {
    fn from(m: RatingModel) -> Self {
        Rating {
            user_id: m.user_id,
            target_id: m.target_id,
            target_kind: m.target_kind,
            pillar_id: m.pillar_id,
            value: m.value,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<&Rating> for NewRating {
    fn from(e: &Rating) -> Self {
        NewRating {
            user_id: e.user_id.clone(),
            target_id: e.target_id,
            target_kind: e.target_kind,
            pillar_id: e.pillar_id,
            value: e.value,
        }
    }
}

impl From<RatingSampleRow> for RatingSample {
    fn from(r: RatingSampleRow) -> Self {
        RatingSample {
            target_id: r.target_id,
            pillar_id: r.pillar_id,
            pillar_name: r.pillar_name,
            value: r.value,
        }
    }
}
