use sea_orm::SqlErr;

use super::*;

/// Expect Ok with the stored record when inserting a new company
#[tokio::test]
async fn creates_company() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Company)?;
    let company = company_factory::mock_company_model("99123456", 1);

    let company_repo = CompanyRepository::new(&test.db);
    let result = company_repo.create(company).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.company_id, "99123456");
    assert_eq!(created.status, entity::company::STATUS_ACTIVE);

    Ok(())
}

/// Expect a unique constraint violation when the identity is taken
#[tokio::test]
async fn fails_for_taken_identity() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_company_tables()
        .with_mock_company("99123456", 1)
        .build()
        .await?;
    let company = company_factory::mock_company_model("99123456", 2);

    let company_repo = CompanyRepository::new(&test.db);
    let result = company_repo.create(company).await;

    let err = result.expect_err("identity collision must fail");
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(message)) if message.contains("company_id")
    ));

    Ok(())
}

/// Expect a unique constraint violation naming the column when a regulatory number is taken
#[tokio::test]
async fn fails_for_taken_unique_field() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_company_tables()
        .with_mock_company("99123456", 1)
        .build()
        .await?;
    let mut company = company_factory::mock_company_model("99654321", 2);
    company.tan_no = company_factory::mock_company(1).tan_no;

    let company_repo = CompanyRepository::new(&test.db);
    let result = company_repo.create(company).await;

    let err = result.expect_err("duplicate tan_no must fail");
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(message)) if message.contains("tan_no")
    ));

    Ok(())
}
