use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::rating::domain::value_objects::rating_target::RatingTargetKind;
use crate::shared::{UserContext, UserRole};

/// A named rating dimension ("Plot", "Animation", ...).
///
/// A pillar with no owner is global and visible to everyone; an owned pillar
/// is private to its owner. Once ratings reference a pillar, rename is the
/// only permitted mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pillar {
    pub id: Uuid,
    pub name: String,
    pub owner_user_id: Option<String>,
    pub applies_to: RatingTargetKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pillar {
    pub fn new_global(name: String, applies_to: RatingTargetKind) -> Self {
        Self::build(name, None, applies_to)
    }

    pub fn new_for_user(name: String, owner_user_id: String, applies_to: RatingTargetKind) -> Self {
        Self::build(name, Some(owner_user_id), applies_to)
    }

    fn build(name: String, owner_user_id: Option<String>, applies_to: RatingTargetKind) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            owner_user_id,
            applies_to,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_global(&self) -> bool {
        self.owner_user_id.is_none()
    }

    /// Global pillars are visible to everyone, owned pillars only to their owner
    pub fn is_visible_to(&self, user_id: &str) -> bool {
        match &self.owner_user_id {
            None => true,
            Some(owner) => owner == user_id,
        }
    }

    /// Admins manage global pillars; owners manage their own
    pub fn is_managed_by(&self, ctx: &UserContext) -> bool {
        match &self.owner_user_id {
            None => ctx.role == UserRole::Admin,
            Some(owner) => owner == &ctx.user_id || ctx.role == UserRole::Admin,
        }
    }

    pub fn rename(&mut self, new_name: String) {
        self.name = new_name;
        self.updated_at = Utc::now();
    }
}
