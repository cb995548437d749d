use super::*;

/// Expect Some(true) and an inactive record after deleting an active company
#[tokio::test]
async fn deactivates_active_company() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_company_tables()
        .with_mock_company("99123456", 1)
        .build()
        .await?;

    let company_repo = CompanyRepository::new(&test.db);
    let result = company_repo.soft_delete("99123456").await?;

    assert_eq!(result, Some(true));
    let stored = company_repo.find("99123456").await?.unwrap();
    assert_eq!(stored.status, entity::company::STATUS_INACTIVE);

    Ok(())
}

/// Expect Some(false) when deleting a company twice, leaving the record in place
#[tokio::test]
async fn repeated_delete_is_noop() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_company_tables()
        .with_mock_company("99123456", 1)
        .build()
        .await?;

    let company_repo = CompanyRepository::new(&test.db);
    company_repo.soft_delete("99123456").await?;
    let result = company_repo.soft_delete("99123456").await?;

    assert_eq!(result, Some(false));
    assert!(company_repo.exists("99123456").await?);

    Ok(())
}

/// Expect None for an unknown identity
#[tokio::test]
async fn returns_none_for_unknown_company() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Company)?;

    let company_repo = CompanyRepository::new(&test.db);
    let result = company_repo.soft_delete("99123456").await?;

    assert_eq!(result, None);

    Ok(())
}
