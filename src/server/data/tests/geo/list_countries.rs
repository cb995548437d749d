use super::*;

/// Expect countries ordered by name
#[tokio::test]
async fn lists_countries_sorted_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geo_tables()
        .with_mock_country(3, "Nepal")
        .with_mock_country(1, "India")
        .with_mock_country(2, "Bhutan")
        .build()
        .await?;

    let geo_repo = GeoRepository::new(&test.db);
    let countries = geo_repo.list_countries().await?;

    let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Bhutan", "India", "Nepal"]);

    Ok(())
}

/// Expect Error when required database tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let geo_repo = GeoRepository::new(&test.db);
    let result = geo_repo.list_countries().await;

    assert!(result.is_err());

    Ok(())
}
