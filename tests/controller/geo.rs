use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use company_master::{
    model::geo::{CountryMeta, GeoNode},
    server::controller::geo::{
        get_cities, get_countries, get_country_meta, get_states, CitiesParams,
    },
};

use super::*;

/// Expect countries sorted by name
#[tokio::test]
async fn countries_sorted_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geo_tables()
        .with_mock_country(2, "Nepal")
        .with_mock_country(1, "India")
        .build()
        .await?;

    let result = get_countries(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let countries: Vec<GeoNode> = response_json(resp).await;
    let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["India", "Nepal"]);

    Ok(())
}

/// Expect 200 with no countries when the catalog tables are missing
#[tokio::test]
async fn countries_degrade_to_empty() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_countries(State(test.to_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let countries: Vec<GeoNode> = response_json(resp).await;
    assert!(countries.is_empty());

    Ok(())
}

/// Expect the states of the country and none for an unknown one
#[tokio::test]
async fn states_of_country() -> Result<(), TestError> {
    let test = catalog().await?;

    let resp = get_states(State(test.to_app_state()), Path(1))
        .await
        .unwrap()
        .into_response();
    let states: Vec<GeoNode> = response_json(resp).await;
    assert_eq!(states.len(), 2);
    assert_eq!(states[0].parent_id, Some(1));

    let resp = get_states(State(test.to_app_state()), Path(42))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let states: Vec<GeoNode> = response_json(resp).await;
    assert!(states.is_empty());

    Ok(())
}

/// Expect display strings built from the country's currency and first time zone
#[tokio::test]
async fn country_meta_display_strings() -> Result<(), TestError> {
    let test = catalog().await?;

    let resp = get_country_meta(State(test.to_app_state()), Path(1))
        .await
        .unwrap()
        .into_response();

    let meta: CountryMeta = response_json(resp).await;
    assert_eq!(meta.currency_display, "INR (₹)");
    assert_eq!(meta.time_zone_display, "IST (UTC+05:30)");

    Ok(())
}

/// Expect cities of every listed state
#[tokio::test]
async fn cities_of_listed_states() -> Result<(), TestError> {
    let test = catalog().await?;

    let result = get_cities(
        State(test.to_app_state()),
        Query(CitiesParams {
            state_ids: Some("10, 11".to_string()),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    let cities: Vec<GeoNode> = response_json(resp).await;
    let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Bengaluru", "Kochi", "Mysuru"]);

    Ok(())
}

/// Expect no cities without states
#[tokio::test]
async fn cities_without_states() -> Result<(), TestError> {
    let test = catalog().await?;

    let result = get_cities(
        State(test.to_app_state()),
        Query(CitiesParams { state_ids: None }),
    )
    .await;

    let resp = result.unwrap().into_response();
    let cities: Vec<GeoNode> = response_json(resp).await;
    assert!(cities.is_empty());

    Ok(())
}

/// Expect 400 Bad Request for a state ID that isn't an integer
#[tokio::test]
async fn cities_reject_malformed_ids() -> Result<(), TestError> {
    let test = catalog().await?;

    let result = get_cities(
        State(test.to_app_state()),
        Query(CitiesParams {
            state_ids: Some("10,ten".to_string()),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
