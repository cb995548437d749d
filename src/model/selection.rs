//! Bounded selection sets of geo catalog entries.
//!
//! A [`SelectionSet`] is an ordered, duplicate-free collection of at most
//! [`MAX_SELECTION`] entries. Each entry caches the display name captured when it was
//! selected so it can be rendered without resolving the catalog again.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::model::geo::{CountryMeta, GeoNode};

/// Maximum number of entries a selection set holds.
pub const MAX_SELECTION: usize = 5;

/// A selected geo entity with its display name snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelectionEntry {
    pub id: i32,
    pub name: String,
}

/// Reasons a list of entries can't form a [`SelectionSet`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionSetError {
    #[error("Selection holds {0} entries but at most 5 are allowed")]
    TooManyEntries(usize),
    #[error("Selection contains ID {0} more than once")]
    DuplicateId(i32),
}

/// Ordered, bounded, duplicate-free set of [`SelectionEntry`].
///
/// Mutations never fail: inserting into a full set or inserting an ID that is already
/// present leaves the set untouched and reports `false`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SelectionEntry>", into = "Vec<SelectionEntry>")]
pub struct SelectionSet {
    entries: Vec<SelectionEntry>,
    ids: HashSet<i32>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_SELECTION
    }

    pub fn contains(&self, id: i32) -> bool {
        self.ids.contains(&id)
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// IDs in selection order.
    pub fn ids(&self) -> Vec<i32> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    /// Appends an entry.
    ///
    /// # Returns
    /// - `true` - The entry was appended
    /// - `false` - The set is full or already contains `id`
    pub fn insert(&mut self, id: i32, name: impl Into<String>) -> bool {
        if self.is_full() || self.ids.contains(&id) {
            return false;
        }

        self.ids.insert(id);
        self.entries.push(SelectionEntry {
            id,
            name: name.into(),
        });

        true
    }

    /// Removes the entry with `id`, returning whether it was present.
    pub fn remove(&mut self, id: i32) -> bool {
        if !self.ids.remove(&id) {
            return false;
        }

        self.entries.retain(|entry| entry.id != id);

        true
    }

    /// Keeps only the entries whose ID is in `valid_ids`, preserving order.
    ///
    /// # Returns
    /// The IDs that were dropped
    pub fn retain_ids(&mut self, valid_ids: &HashSet<i32>) -> Vec<i32> {
        let dropped: Vec<i32> = self
            .entries
            .iter()
            .filter(|entry| !valid_ids.contains(&entry.id))
            .map(|entry| entry.id)
            .collect();

        self.entries.retain(|entry| valid_ids.contains(&entry.id));
        self.ids.retain(|id| valid_ids.contains(id));

        dropped
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.ids.clear();
    }
}

impl TryFrom<Vec<SelectionEntry>> for SelectionSet {
    type Error = SelectionSetError;

    fn try_from(entries: Vec<SelectionEntry>) -> Result<Self, Self::Error> {
        if entries.len() > MAX_SELECTION {
            return Err(SelectionSetError::TooManyEntries(entries.len()));
        }

        let mut set = SelectionSet::new();
        for entry in entries {
            if set.contains(entry.id) {
                return Err(SelectionSetError::DuplicateId(entry.id));
            }
            set.insert(entry.id, entry.name);
        }

        Ok(set)
    }
}

impl From<SelectionSet> for Vec<SelectionEntry> {
    fn from(set: SelectionSet) -> Self {
        set.entries
    }
}

/// Snapshot of a selection session returned by the selection endpoints.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SelectionDto {
    pub country_id: Option<i32>,
    pub country_meta: CountryMeta,
    pub selected_states: Vec<SelectionEntry>,
    pub selected_cities: Vec<SelectionEntry>,
    /// States of the selected country
    pub state_options: Vec<GeoNode>,
    /// Cities across all selected states
    pub city_options: Vec<GeoNode>,
}

/// Request body for selecting a state or city.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SelectEntryDto {
    pub id: i32,
    pub name: String,
}
