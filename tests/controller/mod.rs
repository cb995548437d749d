//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an in-memory database and a memory-backed
//! session, verifying status codes, response bodies and the selection kept in session.

mod company;
mod geo;
mod selection;

use company_master_test_utils::prelude::*;

use crate::util::response_json;

/// Country 1 with states 10 (cities 100, 101) and 11 (city 110)
async fn catalog() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_geo_tables()
        .with_company_tables()
        .with_mock_country(1, "India")
        .with_mock_state(10, 1, "Karnataka")
        .with_mock_state(11, 1, "Kerala")
        .with_mock_city(100, 10, "Mysuru")
        .with_mock_city(101, 10, "Bengaluru")
        .with_mock_city(110, 11, "Kochi")
        .build()
        .await
}
