use company_master_test_utils::prelude::*;

use crate::{
    model::company::{CompanyForm, ValidationErrors},
    server::{
        error::{company::CompanyError, Error},
        service::company::{validation::CompanyValidator, CompanyService},
    },
};


/// Form built from the fixture values of `seed`, passing every rule for country 1
fn valid_form(seed: u32) -> CompanyForm {
    let values = company_factory::mock_company(seed);

    CompanyForm {
        company_name: Some(values.company_name),
        company_industry: Some(values.company_industry),
        company_type: Some(values.company_type),
        country_id: Some(1),
        time_zone: Some(values.time_zone),
        currency: Some(values.currency),
        company_present_address: Some(values.company_present_address),
        company_permanent_address: Some(values.company_permanent_address),
        same_as_present: false,
        company_registration_no: Some(values.company_registration_no),
        gst_no: Some(values.gst_no),
        pf_no: Some(values.pf_no),
        lin_no: Some(values.lin_no),
        pan_no: Some(values.pan_no),
        esi_no: Some(values.esi_no),
        tan_no: Some(values.tan_no),
        company_website: Some(values.company_website),
        company_registration_date: Some(values.company_registration_date),
        ceo_name: Some(values.ceo_name),
        contact_email: Some(values.contact_email),
        contact_phone: Some(values.contact_phone),
        email_domain: Some(values.email_domain),
        is_parent: Some(true),
        parent_company_id: None,
        company_logo: None,
    }
}

/// Catalog with states 10 (city 100) and 11 (city 110) of country 1, plus the company table
async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_geo_tables()
        .with_company_tables()
        .with_mock_country(1, "India")
        .with_mock_state(10, 1, "Karnataka")
        .with_mock_state(11, 1, "Kerala")
        .with_mock_city(100, 10, "Bengaluru")
        .with_mock_city(110, 11, "Kochi")
        .build()
        .await
}

/// Extracts the field errors of a validation failure, panicking on anything else
fn validation_errors<T: std::fmt::Debug>(result: Result<T, Error>) -> ValidationErrors {
    match result {
        Err(Error::CompanyError(CompanyError::Validation(errors))) => errors,
        other => panic!("expected validation failure, got {:?}", other),
    }
}
