use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use company_master::{
    model::company::CompanyDto,
    server::{
        controller::company::{get_company, update_company},
        model::session::selection::SessionSelection,
    },
};

use super::*;

/// Expect the loaded selection to be saved back with the edited fields
#[tokio::test]
async fn edits_loaded_company() -> Result<(), TestError> {
    let test = catalog().await?;
    test.company()
        .insert_mock_company_with_locations("99123456", 1, "[10]", "[100]")
        .await?;

    get_company(
        State(test.to_app_state()),
        test.session.clone(),
        Path("99123456".to_string()),
    )
    .await
    .unwrap();

    let mut form = valid_form(1);
    form.ceo_name = Some("Ravi Kumar".to_string());
    let result = update_company(
        State(test.to_app_state()),
        test.session.clone(),
        Path("99123456".to_string()),
        Json(form),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let company: CompanyDto = response_json(resp).await;
    assert_eq!(company.company_id, "99123456");
    assert_eq!(company.ceo_name, "Ravi Kumar");
    assert_eq!(company.state_ids, vec![10]);
    assert_eq!(company.branch_location_ids, vec![100]);

    let selection = SessionSelection::get(&test.session).await.unwrap();
    assert!(selection.cities().is_empty());

    Ok(())
}

/// Expect a uniqueness error when the edit takes another company's value
#[tokio::test]
async fn rejects_value_of_other_company() -> Result<(), TestError> {
    let test = catalog().await?;
    test.company()
        .insert_mock_company_with_locations("99123456", 1, "[10]", "[100]")
        .await?;
    test.company().insert_mock_company("99654321", 2).await?;

    get_company(
        State(test.to_app_state()),
        test.session.clone(),
        Path("99123456".to_string()),
    )
    .await
    .unwrap();

    let mut form = valid_form(1);
    form.email_domain = company_factory::mock_company(2).email_domain.into();
    let result = update_company(
        State(test.to_app_state()),
        test.session.clone(),
        Path("99123456".to_string()),
        Json(form),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
