use super::*;

/// Expect the company holding the value to be found
#[tokio::test]
async fn finds_company_by_field_value() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_company_tables()
        .with_mock_company("99123456", 1)
        .build()
        .await?;
    let values = company_factory::mock_company(1);

    let company_repo = CompanyRepository::new(&test.db);
    let result = company_repo
        .find_by_field_value(entity::company::Column::GstNo, &values.gst_no, None)
        .await?;

    assert!(matches!(result, Some(company) if company.company_id == "99123456"));

    Ok(())
}

/// Expect the excluded identity to be ignored so an edit doesn't collide with itself
#[tokio::test]
async fn excludes_given_identity() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_company_tables()
        .with_mock_company("99123456", 1)
        .build()
        .await?;
    let values = company_factory::mock_company(1);

    let company_repo = CompanyRepository::new(&test.db);
    let result = company_repo
        .find_by_field_value(
            entity::company::Column::PanNo,
            &values.pan_no,
            Some("99123456"),
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Expect exclusion of one identity to still find another holder of the value
#[tokio::test]
async fn finds_other_holder_when_excluding() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_company_tables()
        .with_mock_company("99123456", 1)
        .build()
        .await?;
    let values = company_factory::mock_company(1);

    let company_repo = CompanyRepository::new(&test.db);
    let result = company_repo
        .find_by_field_value(
            entity::company::Column::CompanyName,
            &values.company_name,
            Some("99000001"),
        )
        .await?;

    assert!(result.is_some());

    Ok(())
}
