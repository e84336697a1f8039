use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// What kind of catalog entry a rating or pillar applies to.
///
/// Matches the `rating_target_kind` Postgres enum.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::RatingTargetKind"]
pub enum RatingTargetKind {
    Series,
    Character,
}

impl RatingTargetKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            RatingTargetKind::Series => "series",
            RatingTargetKind::Character => "character",
        }
    }
}

impl fmt::Display for RatingTargetKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A concrete rateable target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingTarget {
    pub kind: RatingTargetKind,
    pub id: Uuid,
}

impl RatingTarget {
    pub fn series(id: Uuid) -> Self {
        Self {
            kind: RatingTargetKind::Series,
            id,
        }
    }

    pub fn character(id: Uuid) -> Self {
        Self {
            kind: RatingTargetKind::Character,
            id,
        }
    }
}

impl fmt::Display for RatingTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}
