//! Company record endpoints: create, update, load, soft-delete and parent candidates.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        company::{
            CompanyDetailDto, CompanyDto, CompanyForm, ParentCandidateDto, ValidationErrors,
        },
    },
    server::{
        error::{company::CompanyError, Error},
        model::{app::AppState, session::selection::SessionSelection},
        service::{company::CompanyService, retry::RetryContext, selection::SelectionSetManager},
    },
};

/// OpenAPI tag of the company endpoints
pub static COMPANY_TAG: &str = "company";

/// Query parameters of the parent candidate listing
#[derive(Deserialize, IntoParams)]
pub struct ParentCandidateParams {
    /// Company being edited, left out of the candidates
    pub exclude_id: Option<String>,
}

/// Create a company from the form and the current branch selection
///
/// The selection is cleared once the company is stored.
///
/// # Responses
/// - 201 (Created): The stored company under its generated identity
/// - 422 (Unprocessable Entity): Field-keyed validation messages
/// - 500 (Internal Server Error): A store or session error
#[utoipa::path(
    post,
    path = "/api/companies",
    tag = COMPANY_TAG,
    request_body = CompanyForm,
    responses(
        (status = 201, description = "Company created", body = CompanyDto),
        (status = 422, description = "Validation failed", body = ValidationErrors),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_company(
    State(state): State<AppState>,
    session: Session,
    Json(mut form): Json<CompanyForm>,
) -> Result<impl IntoResponse, Error> {
    let company_service = CompanyService::new(&state.db);
    let selection = SessionSelection::get(&session).await?;
    reconcile_country(&mut form, &selection)?;

    let company = company_service
        .upsert(
            form,
            &selection.states().ids(),
            &selection.cities().ids(),
            None,
        )
        .await?;

    SessionSelection::clear(&session).await?;

    Ok((StatusCode::CREATED, Json(CompanyDto::from(company))))
}

/// Overwrite the company stored under `company_id`
///
/// Uses the current branch selection, which a preceding `GET /api/companies/{company_id}`
/// seeds with the stored branches. The selection is cleared once the company is stored.
#[utoipa::path(
    put,
    path = "/api/companies/{company_id}",
    tag = COMPANY_TAG,
    params(("company_id" = String, Path, description = "Company identity")),
    request_body = CompanyForm,
    responses(
        (status = 200, description = "Company stored", body = CompanyDto),
        (status = 422, description = "Validation failed", body = ValidationErrors),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_company(
    State(state): State<AppState>,
    session: Session,
    Path(company_id): Path<String>,
    Json(mut form): Json<CompanyForm>,
) -> Result<impl IntoResponse, Error> {
    let company_service = CompanyService::new(&state.db);
    let selection = SessionSelection::get(&session).await?;
    reconcile_country(&mut form, &selection)?;

    let company = company_service
        .upsert(
            form,
            &selection.states().ids(),
            &selection.cities().ids(),
            Some(&company_id),
        )
        .await?;

    SessionSelection::clear(&session).await?;

    Ok((StatusCode::OK, Json(CompanyDto::from(company))))
}

/// Get a company with the names of its branch states and cities
///
/// The company's branches become the current selection so an edit starts from them.
///
/// # Responses
/// - 200 (OK): The company, soft-deleted companies included
/// - 404 (Not Found): No company has this identity
/// - 500 (Internal Server Error): A store or session error
#[utoipa::path(
    get,
    path = "/api/companies/{company_id}",
    tag = COMPANY_TAG,
    params(("company_id" = String, Path, description = "Company identity")),
    responses(
        (status = 200, description = "Company with its branch selection", body = CompanyDetailDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_company(
    State(state): State<AppState>,
    session: Session,
    Path(company_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let db = &state.db;
    let id = company_id.as_str();

    let (company, selection) = RetryContext::new()
        .execute_with_retry(&format!("load of company {}", company_id), move || async move {
            CompanyService::new(db).load(id).await
        })
        .await?;

    SessionSelection::insert(&session, &selection).await?;

    Ok((
        StatusCode::OK,
        Json(CompanyDetailDto {
            company: CompanyDto::from(company),
            selected_states: selection.states().entries().to_vec(),
            selected_cities: selection.cities().entries().to_vec(),
        }),
    ))
}

/// Soft-delete a company
///
/// Deleting a company that is already inactive succeeds without change.
#[utoipa::path(
    delete,
    path = "/api/companies/{company_id}",
    tag = COMPANY_TAG,
    params(("company_id" = String, Path, description = "Company identity")),
    responses(
        (status = 204, description = "Company is inactive"),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let company_service = CompanyService::new(&state.db);

    company_service.delete(&company_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the active companies that can be chosen as parent, sorted by name
#[utoipa::path(
    get,
    path = "/api/companies/parents",
    tag = COMPANY_TAG,
    params(ParentCandidateParams),
    responses(
        (status = 200, description = "Parent candidates", body = Vec<ParentCandidateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parent_candidates(
    State(state): State<AppState>,
    Query(params): Query<ParentCandidateParams>,
) -> Result<impl IntoResponse, Error> {
    let db = &state.db;
    let exclude_id = params.exclude_id.as_deref();

    let candidates = RetryContext::new()
        .execute_with_retry("parent candidate listing", move || async move {
            CompanyService::new(db).parent_candidates(exclude_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(candidates)))
}

/// Aligns the form's country with the country the branches were selected under.
///
/// A form without a country takes the selection's country, a form naming another
/// country is rejected on `country_id`.
fn reconcile_country(
    form: &mut CompanyForm,
    selection: &SelectionSetManager,
) -> Result<(), Error> {
    let Some(selected_country) = selection.country_id() else {
        return Ok(());
    };

    match form.country_id {
        None => form.country_id = Some(selected_country),
        Some(country_id) if country_id != selected_country => {
            return Err(CompanyError::Validation(ValidationErrors::single(
                "country_id",
                "The country id must match the country of the selected branches.",
            ))
            .into());
        }
        Some(_) => {}
    }

    Ok(())
}
