//! Endpoints driving the company form's cascading country, state and city selection.
//!
//! The selection is kept in the session between requests and every endpoint returns the
//! updated selection.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        selection::{SelectEntryDto, SelectionDto},
    },
    server::{
        error::Error,
        model::{app::AppState, session::selection::SessionSelection},
        service::geo::GeoService,
    },
};

/// OpenAPI tag of the branch selection endpoints
pub static SELECTION_TAG: &str = "selection";

/// Get the current company form selection
#[utoipa::path(
    get,
    path = "/api/selection",
    tag = SELECTION_TAG,
    responses(
        (status = 200, description = "Current selection", body = SelectionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_selection(session: Session) -> Result<impl IntoResponse, Error> {
    let selection = SessionSelection::get(&session).await?;

    Ok((StatusCode::OK, Json(selection.to_dto())))
}

/// Reset the selection to start a new company form
#[utoipa::path(
    delete,
    path = "/api/selection",
    tag = SELECTION_TAG,
    responses(
        (status = 200, description = "Empty selection", body = SelectionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_selection(session: Session) -> Result<impl IntoResponse, Error> {
    SessionSelection::clear(&session).await?;

    Ok((StatusCode::OK, Json(SelectionDto::default())))
}

/// Choose the company's country
///
/// Clears the selected states and cities and loads the states and display strings of
/// the new country.
#[utoipa::path(
    put,
    path = "/api/selection/country/{country_id}",
    tag = SELECTION_TAG,
    params(("country_id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Selection after the country change", body = SelectionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn select_country(
    State(state): State<AppState>,
    session: Session,
    Path(country_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let geo_service = GeoService::new(&state.db);
    let mut selection = SessionSelection::get(&session).await?;

    selection
        .on_country_changed(&geo_service, Some(country_id))
        .await;
    SessionSelection::insert(&session, &selection).await?;

    Ok((StatusCode::OK, Json(selection.to_dto())))
}

/// Add a state to the selection
///
/// Selecting a sixth state or one already selected leaves the selection unchanged.
#[utoipa::path(
    post,
    path = "/api/selection/states",
    tag = SELECTION_TAG,
    request_body = SelectEntryDto,
    responses(
        (status = 200, description = "Selection with the state's cities offered", body = SelectionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn select_state(
    State(state): State<AppState>,
    session: Session,
    Json(entry): Json<SelectEntryDto>,
) -> Result<impl IntoResponse, Error> {
    let geo_service = GeoService::new(&state.db);
    let mut selection = SessionSelection::get(&session).await?;

    if selection
        .select_state(&geo_service, entry.id, &entry.name)
        .await
    {
        SessionSelection::insert(&session, &selection).await?;
    } else {
        tracing::debug!("State {} not added to the selection", entry.id);
    }

    Ok((StatusCode::OK, Json(selection.to_dto())))
}

/// Remove a state and the cities that no longer belong to a selected state
#[utoipa::path(
    delete,
    path = "/api/selection/states/{state_id}",
    tag = SELECTION_TAG,
    params(("state_id" = i32, Path, description = "State ID")),
    responses(
        (status = 200, description = "Selection after the cascade", body = SelectionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_state(
    State(state): State<AppState>,
    session: Session,
    Path(state_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let geo_service = GeoService::new(&state.db);
    let mut selection = SessionSelection::get(&session).await?;

    if selection.remove_state(&geo_service, state_id).await {
        SessionSelection::insert(&session, &selection).await?;
    }

    Ok((StatusCode::OK, Json(selection.to_dto())))
}

/// Add a city to the selection
#[utoipa::path(
    post,
    path = "/api/selection/cities",
    tag = SELECTION_TAG,
    request_body = SelectEntryDto,
    responses(
        (status = 200, description = "Selection with the city", body = SelectionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn select_city(
    session: Session,
    Json(entry): Json<SelectEntryDto>,
) -> Result<impl IntoResponse, Error> {
    let mut selection = SessionSelection::get(&session).await?;

    if selection.select_city(entry.id, &entry.name) {
        SessionSelection::insert(&session, &selection).await?;
    } else {
        tracing::debug!("City {} not added to the selection", entry.id);
    }

    Ok((StatusCode::OK, Json(selection.to_dto())))
}

/// Remove a city from the selection
#[utoipa::path(
    delete,
    path = "/api/selection/cities/{city_id}",
    tag = SELECTION_TAG,
    params(("city_id" = i32, Path, description = "City ID")),
    responses(
        (status = 200, description = "Selection without the city", body = SelectionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_city(
    session: Session,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let mut selection = SessionSelection::get(&session).await?;

    if selection.remove_city(city_id) {
        SessionSelection::insert(&session, &selection).await?;
    }

    Ok((StatusCode::OK, Json(selection.to_dto())))
}
