//! Read-only country, state and city catalog endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        geo::{CountryMeta, GeoNode},
    },
    server::{error::Error, model::app::AppState, service::geo::GeoService},
};

/// OpenAPI tag of the catalog endpoints
pub static GEO_TAG: &str = "geo";

/// Query parameters of the city listing
#[derive(Deserialize, IntoParams)]
pub struct CitiesParams {
    /// Comma separated state IDs, e.g. `10,11`
    pub state_ids: Option<String>,
}

/// Get all countries sorted by name
///
/// # Responses
/// - 200 (OK): The countries, empty when the catalog can't be read
#[utoipa::path(
    get,
    path = "/api/geo/countries",
    tag = GEO_TAG,
    responses(
        (status = 200, description = "Countries sorted by name", body = Vec<GeoNode>)
    ),
)]
pub async fn get_countries(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let geo_service = GeoService::new(&state.db);

    Ok((StatusCode::OK, Json(geo_service.countries().await)))
}

/// Get the states of a country sorted by name
#[utoipa::path(
    get,
    path = "/api/geo/countries/{country_id}/states",
    tag = GEO_TAG,
    params(("country_id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "States of the country, empty for an unknown country", body = Vec<GeoNode>)
    ),
)]
pub async fn get_states(
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let geo_service = GeoService::new(&state.db);

    Ok((StatusCode::OK, Json(geo_service.states_of(country_id).await)))
}

/// Get the currency and time zone display strings of a country
#[utoipa::path(
    get,
    path = "/api/geo/countries/{country_id}/meta",
    tag = GEO_TAG,
    params(("country_id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Display strings, both empty when unavailable", body = CountryMeta)
    ),
)]
pub async fn get_country_meta(
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let geo_service = GeoService::new(&state.db);

    Ok((
        StatusCode::OK,
        Json(geo_service.country_meta(Some(country_id)).await),
    ))
}

/// Get the cities of all given states sorted by name
///
/// # Responses
/// - 200 (OK): Cities of the states, empty when no states are given
/// - 400 (Bad Request): `state_ids` holds a value that isn't an integer
#[utoipa::path(
    get,
    path = "/api/geo/cities",
    tag = GEO_TAG,
    params(CitiesParams),
    responses(
        (status = 200, description = "Cities of the states sorted by name", body = Vec<GeoNode>),
        (status = 400, description = "Malformed state ID list", body = ErrorDto)
    ),
)]
pub async fn get_cities(
    State(state): State<AppState>,
    Query(params): Query<CitiesParams>,
) -> Result<impl IntoResponse, Error> {
    let geo_service = GeoService::new(&state.db);

    let state_ids = parse_id_list(params.state_ids.as_deref().unwrap_or_default())?;

    Ok((StatusCode::OK, Json(geo_service.cities_of(&state_ids).await)))
}

/// Parses a comma separated list of IDs, ignoring blank items.
fn parse_id_list(raw: &str) -> Result<Vec<i32>, Error> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<i32>()
                .map_err(|e| Error::ParseError(format!("state ID {:?}: {}", item, e)))
        })
        .collect()
}
