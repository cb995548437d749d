use super::*;

/// Expect only the states of the requested country, ordered by name
#[tokio::test]
async fn lists_states_of_country_sorted_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geo_tables()
        .with_mock_state(10, 1, "Karnataka")
        .with_mock_state(11, 1, "Goa")
        .with_mock_state(20, 2, "Bagmati")
        .build()
        .await?;

    let geo_repo = GeoRepository::new(&test.db);
    let states = geo_repo.list_states(1).await?;

    let ids: Vec<i32> = states.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![11, 10]);

    Ok(())
}

/// Expect an empty list for a country that doesn't exist
#[tokio::test]
async fn returns_empty_for_unknown_country() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geo_tables()
        .with_mock_state(10, 1, "Karnataka")
        .build()
        .await?;

    let geo_repo = GeoRepository::new(&test.db);
    let states = geo_repo.list_states(42).await?;

    assert!(states.is_empty());

    Ok(())
}
