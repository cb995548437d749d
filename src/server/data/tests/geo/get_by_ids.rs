use super::*;

/// Expect requested states ordered by name with unknown IDs skipped
#[tokio::test]
async fn gets_states_by_ids_skipping_unknown() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geo_tables()
        .with_mock_state(10, 1, "Karnataka")
        .with_mock_state(11, 1, "Goa")
        .build()
        .await?;

    let geo_repo = GeoRepository::new(&test.db);
    let states = geo_repo.get_states_by_ids(&[10, 11, 99]).await?;

    let ids: Vec<i32> = states.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![11, 10]);

    Ok(())
}

/// Expect requested cities ordered by name
#[tokio::test]
async fn gets_cities_by_ids() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geo_tables()
        .with_mock_city(100, 10, "Mysuru")
        .with_mock_city(101, 10, "Bengaluru")
        .with_mock_city(102, 10, "Hubballi")
        .build()
        .await?;

    let geo_repo = GeoRepository::new(&test.db);
    let cities = geo_repo.get_cities_by_ids(&[100, 101]).await?;

    let ids: Vec<i32> = cities.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![101, 100]);

    Ok(())
}
