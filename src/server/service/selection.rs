//! Cascading state/city selection for a company's branch locations.
//!
//! [`SelectionSetManager`] holds the country chosen on the company form together with
//! two bounded [`SelectionSet`]s: selected states and selected cities. It upholds the
//! cascade invariant that a city stays selected only while its state is selected, by
//! re-querying the catalog whenever a state is removed.
//!
//! The manager is plain serializable state. The HTTP layer keeps it in the user's
//! session between requests and every operation is a transition on that state.

use std::collections::HashSet;

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::{
    model::{
        geo::{CountryMeta, GeoNode},
        selection::{SelectionDto, SelectionSet},
    },
    server::service::geo::GeoService,
};

/// Selection state of one company form.
///
/// All mutations are total: a full set, a duplicate ID or an unknown ID leaves the state
/// unchanged and the operation reports `false`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSetManager {
    country_id: Option<i32>,
    country_meta: CountryMeta,
    states: SelectionSet,
    cities: SelectionSet,
    /// States of the selected country
    state_options: Vec<GeoNode>,
    /// Cities across all selected states
    city_options: Vec<GeoNode>,
}

impl SelectionSetManager {
    /// Creates a manager with no country and empty selections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a manager from a stored company's country and hierarchy IDs.
    ///
    /// Display names are resolved from the catalog and each set is ordered by name. IDs
    /// the catalog no longer knows are dropped.
    pub async fn from_stored(
        geo: &GeoService<'_>,
        country_id: i32,
        state_ids: &[i32],
        city_ids: &[i32],
    ) -> Self {
        let mut manager = Self {
            country_id: Some(country_id),
            country_meta: geo.country_meta(Some(country_id)).await,
            state_options: geo.states_of(country_id).await,
            ..Default::default()
        };

        for state in geo.states_by_ids(state_ids).await {
            manager.states.insert(state.id, state.name);
        }
        for city in geo.cities_by_ids(city_ids).await {
            manager.cities.insert(city.id, city.name);
        }

        manager.city_options = geo.cities_of(&manager.states.ids()).await;

        manager
    }

    /// Selected country
    pub fn country_id(&self) -> Option<i32> {
        self.country_id
    }

    /// Currency and time zone display strings of the selected country
    pub fn country_meta(&self) -> &CountryMeta {
        &self.country_meta
    }

    /// Selected states
    pub fn states(&self) -> &SelectionSet {
        &self.states
    }

    /// Selected cities
    pub fn cities(&self) -> &SelectionSet {
        &self.cities
    }

    /// States offered for selection
    pub fn state_options(&self) -> &[GeoNode] {
        &self.state_options
    }

    /// Cities offered for selection
    pub fn city_options(&self) -> &[GeoNode] {
        &self.city_options
    }

    /// Switches the form to `country_id`, clearing both selections.
    ///
    /// Runs on every country change event, including re-selecting the current country.
    /// State options and the country's display strings are reloaded, city options are
    /// emptied.
    pub async fn on_country_changed(&mut self, geo: &GeoService<'_>, country_id: Option<i32>) {
        self.states.clear();
        self.cities.clear();
        self.city_options.clear();

        self.country_id = country_id;
        self.country_meta = geo.country_meta(country_id).await;
        self.state_options = match country_id {
            Some(country_id) => geo.states_of(country_id).await,
            None => Vec::new(),
        };
    }

    /// Selects a state and recomputes city options across all selected states.
    ///
    /// # Returns
    /// - `true` - The state was added
    /// - `false` - The set is full or already holds `id`, nothing changed
    pub async fn select_state(&mut self, geo: &GeoService<'_>, id: i32, name: &str) -> bool {
        if !self.states.insert(id, name) {
            return false;
        }

        self.city_options = geo.cities_of(&self.states.ids()).await;

        true
    }

    /// Removes a state and prunes the cities that no longer have a selected state.
    ///
    /// When the catalog can't be queried the valid cities are unknown, so every city
    /// selection is dropped to keep the cascade invariant.
    ///
    /// # Returns
    /// - `true` - The state was removed
    /// - `false` - The state wasn't selected, nothing changed
    pub async fn remove_state(&mut self, geo: &GeoService<'_>, id: i32) -> bool {
        if !self.states.remove(id) {
            return false;
        }

        match geo.try_cities_of(&self.states.ids()).await {
            Ok(valid_cities) => {
                let valid_ids: HashSet<i32> = valid_cities.iter().map(|city| city.id).collect();
                let dropped = self.cities.retain_ids(&valid_ids);
                if !dropped.is_empty() {
                    tracing::debug!("Removing state {} pruned cities {:?}", id, dropped);
                }

                self.city_options = valid_cities;
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to list cities after removing state {}, clearing city selection: {:?}",
                    id,
                    e
                );

                self.cities.clear();
                self.city_options.clear();
            }
        }

        true
    }

    /// Selects a city.
    ///
    /// The city is not checked against the current city options; callers pick from
    /// [`Self::city_options`].
    pub fn select_city(&mut self, id: i32, name: &str) -> bool {
        self.cities.insert(id, name)
    }

    /// Deselects a city, returning whether it was selected.
    pub fn remove_city(&mut self, id: i32) -> bool {
        self.cities.remove(id)
    }

    /// Snapshot of the selection returned by the selection endpoints.
    pub fn to_dto(&self) -> SelectionDto {
        SelectionDto {
            country_id: self.country_id,
            country_meta: self.country_meta.clone(),
            selected_states: self.states.entries().to_vec(),
            selected_cities: self.cities.entries().to_vec(),
            state_options: self.state_options.clone(),
            city_options: self.city_options.clone(),
        }
    }
}
