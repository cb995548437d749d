//! Read-only access to the country/state/city catalog.
//!
//! The selection flow must keep working while the catalog is unreachable, so every
//! lookup here degrades to an empty result and logs a warning instead of returning an
//! error. [`GeoService::try_cities_of`] is the one exception, used where the caller has to
//! tell "no cities" apart from "lookup failed".

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::{
    model::geo::{CountryMeta, GeoNode},
    server::{data::geo::GeoRepository, error::Error},
};

/// First-level shape of an entry in a country's `timezones` column.
#[derive(Deserialize)]
struct TimezoneEntry {
    abbreviation: String,
    #[serde(rename = "gmtOffsetName")]
    gmt_offset_name: String,
}

/// Catalog lookups for the company form.
pub struct GeoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GeoService<'a> {
    /// Creates a new instance of [`GeoService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All countries sorted by name.
    pub async fn countries(&self) -> Vec<GeoNode> {
        match GeoRepository::new(self.db).list_countries().await {
            Ok(countries) => countries.into_iter().map(GeoNode::from).collect(),
            Err(e) => {
                tracing::warn!("Failed to list countries: {:?}", e);
                Vec::new()
            }
        }
    }

    /// States of `country_id` sorted by name, empty for an unknown country.
    pub async fn states_of(&self, country_id: i32) -> Vec<GeoNode> {
        match GeoRepository::new(self.db).list_states(country_id).await {
            Ok(states) => states.into_iter().map(GeoNode::from).collect(),
            Err(e) => {
                tracing::warn!("Failed to list states of country {}: {:?}", country_id, e);
                Vec::new()
            }
        }
    }

    /// Cities of all `state_ids` sorted by name, empty for an empty input.
    pub async fn cities_of(&self, state_ids: &[i32]) -> Vec<GeoNode> {
        match self.try_cities_of(state_ids).await {
            Ok(cities) => cities,
            Err(e) => {
                tracing::warn!("Failed to list cities of states {:?}: {:?}", state_ids, e);
                Vec::new()
            }
        }
    }

    /// Like [`Self::cities_of`] but reports lookup failures.
    pub async fn try_cities_of(&self, state_ids: &[i32]) -> Result<Vec<GeoNode>, Error> {
        let cities = GeoRepository::new(self.db).list_cities(state_ids).await?;

        Ok(cities.into_iter().map(GeoNode::from).collect())
    }

    /// States with the given IDs sorted by name, unknown IDs skipped.
    pub async fn states_by_ids(&self, state_ids: &[i32]) -> Vec<GeoNode> {
        match GeoRepository::new(self.db).get_states_by_ids(state_ids).await {
            Ok(states) => states.into_iter().map(GeoNode::from).collect(),
            Err(e) => {
                tracing::warn!("Failed to resolve states {:?}: {:?}", state_ids, e);
                Vec::new()
            }
        }
    }

    /// Cities with the given IDs sorted by name, unknown IDs skipped.
    pub async fn cities_by_ids(&self, city_ids: &[i32]) -> Vec<GeoNode> {
        match GeoRepository::new(self.db).get_cities_by_ids(city_ids).await {
            Ok(cities) => cities.into_iter().map(GeoNode::from).collect(),
            Err(e) => {
                tracing::warn!("Failed to resolve cities {:?}: {:?}", city_ids, e);
                Vec::new()
            }
        }
    }

    /// Currency and time zone display strings of a country.
    ///
    /// Both strings are empty when no country is given, the country is unknown, the
    /// lookup fails or its timezone payload can't be decoded.
    pub async fn country_meta(&self, country_id: Option<i32>) -> CountryMeta {
        let Some(country_id) = country_id else {
            return CountryMeta::default();
        };

        let country = match GeoRepository::new(self.db).find_country(country_id).await {
            Ok(Some(country)) => country,
            Ok(None) => {
                tracing::debug!("Country {} not found, using empty meta", country_id);
                return CountryMeta::default();
            }
            Err(e) => {
                tracing::warn!("Failed to look up country {}: {:?}", country_id, e);
                return CountryMeta::default();
            }
        };

        derive_country_meta(&country).unwrap_or_else(|| {
            tracing::warn!("Undecodable timezones for country {}", country_id);
            CountryMeta::default()
        })
    }
}

/// Builds the display strings of a country record.
///
/// Returns `None` when the timezone payload is present but not a list of timezone
/// objects.
fn derive_country_meta(country: &entity::geo_country::Model) -> Option<CountryMeta> {
    let currency_display = match (
        country.currency.as_deref(),
        country.currency_symbol.as_deref(),
    ) {
        (Some(code), Some(symbol)) if !code.is_empty() && !symbol.is_empty() => {
            format!("{} ({})", code, symbol)
        }
        _ => String::new(),
    };

    let time_zone_display = match country.timezones.as_deref() {
        Some(raw) => {
            let zones: Vec<TimezoneEntry> = serde_json::from_str(raw).ok()?;
            zones
                .first()
                .map(|zone| format!("{} ({})", zone.abbreviation, zone.gmt_offset_name))
                .unwrap_or_default()
        }
        None => String::new(),
    };

    Some(CountryMeta {
        currency_display,
        time_zone_display,
    })
}
