//! Tests for company controller endpoints.

mod create_company;
mod get_company;
mod get_parent_candidates;
mod update_company;

use axum::{
    extract::{Path, State},
    Json,
};
use company_master::{
    model::{company::CompanyForm, selection::SelectEntryDto},
    server::controller::selection::{select_city, select_country, select_state},
};

use super::*;

/// Form built from the fixture values of `seed` for a parent company in country 1
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
        ..Default::default()
    }
}

/// Selects country 1, state 10 and city 101 through the selection endpoints
async fn select_branch(test: &TestContext) {
    select_country(State(test.to_app_state()), test.session.clone(), Path(1))
        .await
        .unwrap();
    select_state(
        State(test.to_app_state()),
        test.session.clone(),
        Json(SelectEntryDto {
            id: 10,
            name: "Karnataka".to_string(),
        }),
    )
    .await
    .unwrap();
    select_city(
        test.session.clone(),
        Json(SelectEntryDto {
            id: 101,
            name: "Bengaluru".to_string(),
        }),
    )
    .await
    .unwrap();
}
