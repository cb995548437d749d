use super::*;

/// Expect cities of every requested state merged and ordered by name
#[tokio::test]
async fn lists_cities_across_states_sorted_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geo_tables()
        .with_mock_state(10, 1, "Karnataka")
        .with_mock_state(11, 1, "Goa")
        .with_mock_state(12, 1, "Kerala")
        .with_mock_city(100, 10, "Mysuru")
        .with_mock_city(101, 10, "Bengaluru")
        .with_mock_city(110, 11, "Panaji")
        .with_mock_city(120, 12, "Kochi")
        .build()
        .await?;

    let geo_repo = GeoRepository::new(&test.db);
    let cities = geo_repo.list_cities(&[10, 11]).await?;

    let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Bengaluru", "Mysuru", "Panaji"]);

    Ok(())
}

/// Expect no cities for an empty state list rather than every city
#[tokio::test]
async fn returns_empty_for_empty_state_ids() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geo_tables()
        .with_mock_city(100, 10, "Mysuru")
        .build()
        .await?;

    let geo_repo = GeoRepository::new(&test.db);
    let cities = geo_repo.list_cities(&[]).await?;

    assert!(cities.is_empty());

    Ok(())
}
