use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use company_master::{
    model::company::{CompanyDto, ValidationErrors},
    server::{controller::company::create_company, model::session::selection::SessionSelection},
};

use super::*;

/// Expect 201 Created with the session selection stored and then cleared
#[tokio::test]
async fn creates_company_from_session_selection() -> Result<(), TestError> {
    let test = catalog().await?;
    select_branch(&test).await;

    let result = create_company(
        State(test.to_app_state()),
        test.session.clone(),
        Json(valid_form(1)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let company: CompanyDto = response_json(resp).await;
    assert!(company.company_id.starts_with("99"));
    assert_eq!(company.company_id.len(), 8);
    assert_eq!(company.state_ids, vec![10]);
    assert_eq!(company.branch_location_ids, vec![101]);
    assert!(company.is_parent);
    assert!(company.active);

    let selection = SessionSelection::get(&test.session).await.unwrap();
    assert!(selection.states().is_empty());
    assert_eq!(selection.country_id(), None);

    Ok(())
}

/// Expect 422 with field errors and the selection kept when validation fails
#[tokio::test]
async fn rejects_invalid_form_and_keeps_selection() -> Result<(), TestError> {
    let test = catalog().await?;
    select_branch(&test).await;
    let mut form = valid_form(1);
    form.gst_no = Some("1234".to_string());

    let result = create_company(State(test.to_app_state()), test.session.clone(), Json(form)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let errors: ValidationErrors = response_json(resp).await;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("gst_no"), Some("The gst no field format is invalid."));

    let selection = SessionSelection::get(&test.session).await.unwrap();
    assert_eq!(selection.states().ids(), vec![10]);

    Ok(())
}

/// Expect 422 on the selection fields when nothing has been selected
#[tokio::test]
async fn requires_branch_selection() -> Result<(), TestError> {
    let test = catalog().await?;

    let result = create_company(
        State(test.to_app_state()),
        test.session.clone(),
        Json(valid_form(1)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let errors: ValidationErrors = response_json(resp).await;
    assert!(errors.has("selected_states"));
    assert!(errors.has("selected_cities"));

    Ok(())
}

/// Expect 422 on `country_id` when the form names a country other than the selection's
#[tokio::test]
async fn rejects_country_differing_from_selection() -> Result<(), TestError> {
    let test = catalog().await?;
    test.geo().insert_mock_country(2, "Nepal").await?;
    select_branch(&test).await;
    let mut form = valid_form(1);
    form.country_id = Some(2);

    let result = create_company(State(test.to_app_state()), test.session.clone(), Json(form)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let errors: ValidationErrors = response_json(resp).await;
    assert_eq!(
        errors.get("country_id"),
        Some("The country id must match the country of the selected branches.")
    );

    let selection = SessionSelection::get(&test.session).await.unwrap();
    assert_eq!(selection.country_id(), Some(1));

    Ok(())
}

/// Expect a form without a country to take the selection's country
#[tokio::test]
async fn takes_country_from_selection() -> Result<(), TestError> {
    let test = catalog().await?;
    select_branch(&test).await;
    let mut form = valid_form(1);
    form.country_id = None;

    let result = create_company(State(test.to_app_state()), test.session.clone(), Json(form)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let company: CompanyDto = response_json(resp).await;
    assert_eq!(company.country_id, 1);

    Ok(())
}

/// Expect 422 on `country_id` for a country missing from the catalog
#[tokio::test]
async fn rejects_unknown_country() -> Result<(), TestError> {
    let test = catalog().await?;
    let mut form = valid_form(1);
    form.country_id = Some(777);

    let result = create_company(State(test.to_app_state()), test.session.clone(), Json(form)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let errors: ValidationErrors = response_json(resp).await;
    assert_eq!(
        errors.get("country_id"),
        Some("The selected country id is invalid.")
    );

    Ok(())
}
