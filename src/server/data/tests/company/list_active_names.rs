use super::*;

/// Expect active companies only, sorted by name
#[tokio::test]
async fn lists_active_companies_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_company_tables()
        .with_mock_company("99000003", 3)
        .with_mock_company("99000001", 1)
        .with_mock_company("99000002", 2)
        .build()
        .await?;
    test.company().deactivate("99000002").await?;

    let company_repo = CompanyRepository::new(&test.db);
    let result = company_repo.list_active_names().await?;

    assert_eq!(
        result,
        vec![
            ("99000001".to_string(), "Company 1".to_string()),
            ("99000003".to_string(), "Company 3".to_string()),
        ]
    );

    Ok(())
}
