use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use company_master::{
    model::selection::{SelectEntryDto, SelectionDto},
    server::{
        controller::selection::{
            get_selection, remove_city, remove_state, reset_selection, select_city,
            select_country, select_state,
        },
        model::session::selection::SessionSelection,
    },
};

use super::*;

fn entry(id: i32, name: &str) -> Json<SelectEntryDto> {
    Json(SelectEntryDto {
        id,
        name: name.to_string(),
    })
}

/// Expect an empty selection for a fresh session
#[tokio::test]
async fn empty_selection_for_new_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_selection(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let selection: SelectionDto = response_json(resp).await;
    assert_eq!(selection.country_id, None);
    assert!(selection.selected_states.is_empty());

    Ok(())
}

/// Expect choosing a country to offer its states and store the selection in session
#[tokio::test]
async fn country_offers_states() -> Result<(), TestError> {
    let test = catalog().await?;

    let result = select_country(State(test.to_app_state()), test.session.clone(), Path(1)).await;

    let resp = result.unwrap().into_response();
    let selection: SelectionDto = response_json(resp).await;
    assert_eq!(selection.country_id, Some(1));
    assert_eq!(selection.state_options.len(), 2);
    assert_eq!(selection.country_meta.currency_display, "INR (₹)");

    let stored = SessionSelection::get(&test.session).await.unwrap();
    assert_eq!(stored.country_id(), Some(1));

    Ok(())
}

/// Expect removing a state to drop the cities selected under it
#[tokio::test]
async fn removing_state_cascades_to_cities() -> Result<(), TestError> {
    let test = catalog().await?;

    select_country(State(test.to_app_state()), test.session.clone(), Path(1))
        .await
        .unwrap();
    select_state(State(test.to_app_state()), test.session.clone(), entry(10, "Karnataka"))
        .await
        .unwrap();
    let resp = select_state(State(test.to_app_state()), test.session.clone(), entry(11, "Kerala"))
        .await
        .unwrap()
        .into_response();
    let selection: SelectionDto = response_json(resp).await;
    assert_eq!(selection.city_options.len(), 3);

    select_city(test.session.clone(), entry(101, "Bengaluru"))
        .await
        .unwrap();
    select_city(test.session.clone(), entry(110, "Kochi"))
        .await
        .unwrap();

    let resp = remove_state(State(test.to_app_state()), test.session.clone(), Path(11))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let selection: SelectionDto = response_json(resp).await;
    let city_ids: Vec<i32> = selection.selected_cities.iter().map(|c| c.id).collect();
    assert_eq!(city_ids, vec![101]);
    assert_eq!(selection.city_options.len(), 2);

    let stored = SessionSelection::get(&test.session).await.unwrap();
    assert_eq!(stored.cities().ids(), vec![101]);

    Ok(())
}

/// Expect a sixth state to leave the selection unchanged
#[tokio::test]
async fn sixth_state_is_ignored() -> Result<(), TestError> {
    let test = catalog().await?;

    for id in 20..26 {
        select_state(
            State(test.to_app_state()),
            test.session.clone(),
            entry(id, &format!("State {}", id)),
        )
        .await
        .unwrap();
    }

    let stored = SessionSelection::get(&test.session).await.unwrap();
    assert_eq!(stored.states().ids(), vec![20, 21, 22, 23, 24]);

    Ok(())
}

/// Expect a removed city to leave the selection
#[tokio::test]
async fn removes_city() -> Result<(), TestError> {
    let test = catalog().await?;

    select_city(test.session.clone(), entry(100, "Mysuru"))
        .await
        .unwrap();
    let resp = remove_city(test.session.clone(), Path(100))
        .await
        .unwrap()
        .into_response();

    let selection: SelectionDto = response_json(resp).await;
    assert!(selection.selected_cities.is_empty());

    Ok(())
}

/// Expect reset to forget the stored selection
#[tokio::test]
async fn reset_clears_selection() -> Result<(), TestError> {
    let test = catalog().await?;

    select_country(State(test.to_app_state()), test.session.clone(), Path(1))
        .await
        .unwrap();
    let result = reset_selection(test.session.clone()).await;

    assert!(result.is_ok());
    let stored = SessionSelection::get(&test.session).await.unwrap();
    assert_eq!(stored.country_id(), None);
    assert!(stored.state_options().is_empty());

    Ok(())
}
