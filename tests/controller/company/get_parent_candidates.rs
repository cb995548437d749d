use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use company_master::{
    model::company::ParentCandidateDto,
    server::controller::company::{get_parent_candidates, ParentCandidateParams},
};

use super::*;

/// Expect active companies other than the excluded one
#[tokio::test]
async fn lists_active_candidates() -> Result<(), TestError> {
    let test = catalog().await?;
    test.company().insert_mock_company("99000001", 1).await?;
    test.company().insert_mock_company("99000002", 2).await?;
    test.company().insert_mock_company("99000003", 3).await?;
    test.company().deactivate("99000002").await?;

    let result = get_parent_candidates(
        State(test.to_app_state()),
        Query(ParentCandidateParams {
            exclude_id: Some("99000003".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let candidates: Vec<ParentCandidateDto> = response_json(resp).await;
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].company_id, "99000001");

    Ok(())
}
