use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use company_master::{
    model::company::CompanyDetailDto,
    server::{controller::company::get_company, model::session::selection::SessionSelection},
};

use super::*;

/// Expect the company with named selections and the session seeded for an edit
#[tokio::test]
async fn loads_company_and_seeds_selection() -> Result<(), TestError> {
    let test = catalog().await?;
    test.company()
        .insert_mock_company_with_locations("99123456", 1, "[11,10]", "[110,101]")
        .await?;

    let result = get_company(
        State(test.to_app_state()),
        test.session.clone(),
        Path("99123456".to_string()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let detail: CompanyDetailDto = response_json(resp).await;
    assert_eq!(detail.company.company_id, "99123456");
    let state_names: Vec<&str> = detail
        .selected_states
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(state_names, vec!["Karnataka", "Kerala"]);
    let city_names: Vec<&str> = detail
        .selected_cities
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(city_names, vec!["Bengaluru", "Kochi"]);

    let selection = SessionSelection::get(&test.session).await.unwrap();
    assert_eq!(selection.country_id(), Some(1));
    assert_eq!(selection.states().ids(), vec![10, 11]);
    assert_eq!(selection.city_options().len(), 3);

    Ok(())
}

/// Expect 404 Not Found for an unknown identity
#[tokio::test]
async fn not_found_for_unknown_company() -> Result<(), TestError> {
    let test = catalog().await?;

    let result = get_company(
        State(test.to_app_state()),
        test.session.clone(),
        Path("99123456".to_string()),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 Internal Server Error when the company table is missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_company(
        State(test.to_app_state()),
        test.session.clone(),
        Path("99123456".to_string()),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
