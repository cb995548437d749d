//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/geo/countries` - Countries sorted by name
/// - `GET /api/geo/countries/{country_id}/states` - States of a country
/// - `GET /api/geo/countries/{country_id}/meta` - Currency and time zone display strings
/// - `GET /api/geo/cities` - Cities of a comma separated list of states
/// - `GET /api/selection` - Current company form selection
/// - `DELETE /api/selection` - Reset the selection for a new form
/// - `PUT /api/selection/country/{country_id}` - Choose the country
/// - `POST /api/selection/states` - Add a state
/// - `DELETE /api/selection/states/{state_id}` - Remove a state and its orphaned cities
/// - `POST /api/selection/cities` - Add a city
/// - `DELETE /api/selection/cities/{city_id}` - Remove a city
/// - `POST /api/companies` - Create a company
/// - `GET /api/companies/parents` - Parent company candidates
/// - `GET /api/companies/{company_id}` - Load a company and seed the selection
/// - `PUT /api/companies/{company_id}` - Overwrite a company
/// - `DELETE /api/companies/{company_id}` - Soft-delete a company
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Company Master", description = "Company Master API"), tags(
        (name = controller::geo::GEO_TAG, description = "Country, state and city catalog"),
        (name = controller::selection::SELECTION_TAG, description = "Branch location selection of the company form"),
        (name = controller::company::COMPANY_TAG, description = "Company records"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::geo::get_countries))
        .routes(routes!(controller::geo::get_states))
        .routes(routes!(controller::geo::get_country_meta))
        .routes(routes!(controller::geo::get_cities))
        .routes(routes!(
            controller::selection::get_selection,
            controller::selection::reset_selection
        ))
        .routes(routes!(controller::selection::select_country))
        .routes(routes!(controller::selection::select_state))
        .routes(routes!(controller::selection::remove_state))
        .routes(routes!(controller::selection::select_city))
        .routes(routes!(controller::selection::remove_city))
        .routes(routes!(controller::company::create_company))
        .routes(routes!(controller::company::get_parent_candidates))
        .routes(routes!(
            controller::company::get_company,
            controller::company::update_company,
            controller::company::delete_company
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
