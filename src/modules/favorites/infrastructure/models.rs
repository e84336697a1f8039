use crate::schema::favorite_slots;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::favorites::domain::entities::favorite_slot::FavoriteSlot;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = favorite_slots)]
#[diesel(primary_key(user_id, slot))]
pub struct FavoriteSlotModel {
    pub user_id: String,
    pub slot: i32,
    pub series_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = favorite_slots)]
pub struct NewFavoriteSlot {
    pub user_id: String,
    pub slot: i32,
    pub series_id: Uuid,
}

impl From<FavoriteSlotModel> for FavoriteSlot {
    fn from(m: FavoriteSlotModel) -> Self {
        FavoriteSlot {
            user_id: m.user_id,
            slot: m.slot,
            series_id: m.series_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
