use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub const DEFAULT_CAPACITY: usize = 5;

/// In-memory view of one user's favorites list, where all slot rules live.
///
/// Slots are independently addressable: clearing one leaves the others in
/// place, holes included. `reorder` is the only operation that compacts.
/// No two slots ever hold the same series.
#[derive(Debug, Clone)]
pub struct FavoriteList {
    capacity: usize,
    slots: BTreeMap<i32, Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "action")]
pub enum ToggleOutcome {
    Added { slot: i32 },
    Removed { slot: i32 },
}

impl FavoriteList {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: BTreeMap::new(),
        }
    }

    /// Rebuild from persisted entries, rejecting state that violates the
    /// invariants (out-of-range slot, duplicate series).
    pub fn from_entries(
        capacity: usize,
        entries: impl IntoIterator<Item = (i32, Uuid)>,
    ) -> AppResult<Self> {
        let mut list = Self::new(capacity);
        let mut seen_series = HashSet::new();

        for (slot, series_id) in entries {
            Validator::validate_slot_index(slot, capacity)?;
            if !seen_series.insert(series_id) {
                return Err(AppError::ValidationError(format!(
                    "Series {} appears in more than one favorite slot",
                    series_id
                )));
            }
            list.slots.insert(slot, series_id);
        }
        Ok(list)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn occupant(&self, slot: i32) -> Option<Uuid> {
        self.slots.get(&slot).copied()
    }

    pub fn slot_of(&self, series_id: &Uuid) -> Option<i32> {
        self.slots
            .iter()
            .find(|(_, id)| *id == series_id)
            .map(|(slot, _)| *slot)
    }

    /// Occupied slots in slot order
    pub fn entries(&self) -> Vec<(i32, Uuid)> {
        self.slots.iter().map(|(s, id)| (*s, *id)).collect()
    }

    pub fn series_ids(&self) -> Vec<Uuid> {
        self.slots.values().copied().collect()
    }

    /// Place a series into a slot. An occupied slot is replaced and the
    /// prior occupant handed back so the caller can offer reassignment.
    pub fn assign(&mut self, slot: i32, series_id: Uuid) -> AppResult<Option<Uuid>> {
        Validator::validate_slot_index(slot, self.capacity)?;

        if let Some(existing_slot) = self.slot_of(&series_id) {
            if existing_slot == slot {
                // Already exactly there
                return Ok(None);
            }
            return Err(AppError::ValidationError(format!(
                "Series {} already occupies slot {}",
                series_id, existing_slot
            )));
        }

        let displaced = self.slots.insert(slot, series_id);
        Ok(displaced)
    }

    /// Clear one slot. Later slots keep their positions.
    pub fn clear_slot(&mut self, slot: i32) -> AppResult<Uuid> {
        Validator::validate_slot_index(slot, self.capacity)?;
        self.slots
            .remove(&slot)
            .ok_or_else(|| AppError::NotFound(format!("Favorite slot {} is empty", slot)))
    }

    /// Remove if present, else add to the first open slot. A full list
    /// refuses without mutating anything; the caller prompts for a slot to
    /// replace.
    pub fn toggle(&mut self, series_id: Uuid) -> AppResult<ToggleOutcome> {
        if let Some(slot) = self.slot_of(&series_id) {
            self.slots.remove(&slot);
            return Ok(ToggleOutcome::Removed { slot });
        }

        let slot = self.first_open_slot().ok_or_else(|| {
            AppError::CapacityExceeded(format!(
                "Favorites list is full ({} slots); choose a slot to replace",
                self.capacity
            ))
        })?;

        self.slots.insert(slot, series_id);
        Ok(ToggleOutcome::Added { slot })
    }

    /// Apply a full permutation of the occupied slots' series onto slots
    /// 0..n-1. A payload with duplicates is malformed; a payload whose set
    /// differs from the occupied set lost a race with a concurrent change.
    pub fn reorder(&mut self, new_order: &[Uuid]) -> AppResult<()> {
        let mut payload_set = HashSet::new();
        for id in new_order {
            if !payload_set.insert(*id) {
                return Err(AppError::ValidationError(format!(
                    "Series {} appears twice in the reorder payload",
                    id
                )));
            }
        }

        let current_set: HashSet<Uuid> = self.slots.values().copied().collect();
        if payload_set != current_set {
            return Err(AppError::Conflict(
                "Reorder payload does not match the current favorites; refetch and retry"
                    .to_string(),
            ));
        }

        self.slots = new_order
            .iter()
            .enumerate()
            .map(|(i, id)| (i as i32, *id))
            .collect();
        Ok(())
    }

    fn first_open_slot(&self) -> Option<i32> {
        (0..self.capacity as i32).find(|slot| !self.slots.contains_key(slot))
    }
}

impl Default for FavoriteList {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
