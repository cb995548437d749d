//! Geographic catalog DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A country, state or city of the geo catalog.
///
/// Countries have no parent, states reference their country and cities their state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeoNode {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
}

impl From<entity::geo_country::Model> for GeoNode {
    fn from(country: entity::geo_country::Model) -> Self {
        Self {
            id: country.id,
            name: country.name,
            parent_id: None,
        }
    }
}

impl From<entity::geo_state::Model> for GeoNode {
    fn from(state: entity::geo_state::Model) -> Self {
        Self {
            id: state.id,
            name: state.name,
            parent_id: Some(state.country_id),
        }
    }
}

impl From<entity::geo_city::Model> for GeoNode {
    fn from(city: entity::geo_city::Model) -> Self {
        Self {
            id: city.id,
            name: city.name,
            parent_id: Some(city.state_id),
        }
    }
}

/// Display strings derived from a country record.
///
/// Both fields are empty when the country is unknown or its data can't be decoded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CountryMeta {
    /// `"<code> (<symbol>)"`, e.g. `"INR (₹)"`
    pub currency_display: String,
    /// `"<abbreviation> (<gmt offset name>)"`, e.g. `"IST (UTC+05:30)"`
    pub time_zone_display: String,
}
