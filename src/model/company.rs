use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{model::selection::SelectionEntry, server::util::hierarchy::decode_ids};

/// Candidate company fields as submitted from the company form.
///
/// Every field is optional so that a missing value surfaces as a validation error
/// for that field instead of a deserialization failure of the whole request.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CompanyForm {
    pub company_name: Option<String>,
    pub company_industry: Option<String>,
    pub company_type: Option<String>,
    pub country_id: Option<i32>,
    pub time_zone: Option<String>,
    pub currency: Option<String>,
    pub company_present_address: Option<String>,
    pub company_permanent_address: Option<String>,
    /// Copy the present address into the permanent address before validation
    pub same_as_present: bool,
    pub company_registration_no: Option<String>,
    pub gst_no: Option<String>,
    pub pf_no: Option<String>,
    pub lin_no: Option<String>,
    pub pan_no: Option<String>,
    pub esi_no: Option<String>,
    pub tan_no: Option<String>,
    pub company_website: Option<String>,
    /// `YYYY-MM-DD`
    pub company_registration_date: Option<String>,
    pub ceo_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub email_domain: Option<String>,
    pub is_parent: Option<bool>,
    pub parent_company_id: Option<String>,
    /// Base64-encoded logo; when absent on an edit the stored logo is kept
    pub company_logo: Option<String>,
}

/// A stored company as returned by the API.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyDto {
    pub company_id: String,
    pub company_name: String,
    pub company_industry: String,
    pub company_type: String,
    pub country_id: i32,
    pub time_zone: String,
    pub currency: String,
    pub company_present_address: String,
    pub company_permanent_address: String,
    pub company_registration_no: String,
    pub gst_no: String,
    pub pf_no: String,
    pub lin_no: String,
    pub pan_no: String,
    pub esi_no: String,
    pub tan_no: String,
    pub company_website: String,
    pub company_logo: Option<String>,
    pub company_registration_date: NaiveDate,
    pub ceo_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub email_domain: String,
    pub is_parent: bool,
    pub parent_company_id: Option<String>,
    pub state_ids: Vec<i32>,
    pub branch_location_ids: Vec<i32>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::company::Model> for CompanyDto {
    fn from(company: entity::company::Model) -> Self {
        Self {
            state_ids: decode_ids(&company.state_ids),
            branch_location_ids: decode_ids(&company.branch_location_ids),
            is_parent: company.is_parent == entity::company::ParentFlag::Yes,
            active: company.status == entity::company::STATUS_ACTIVE,
            company_id: company.company_id,
            company_name: company.company_name,
            company_industry: company.company_industry,
            company_type: company.company_type,
            country_id: company.country_id,
            time_zone: company.time_zone,
            currency: company.currency,
            company_present_address: company.company_present_address,
            company_permanent_address: company.company_permanent_address,
            company_registration_no: company.company_registration_no,
            gst_no: company.gst_no,
            pf_no: company.pf_no,
            lin_no: company.lin_no,
            pan_no: company.pan_no,
            esi_no: company.esi_no,
            tan_no: company.tan_no,
            company_website: company.company_website,
            company_logo: company.company_logo,
            company_registration_date: company.company_registration_date,
            ceo_name: company.ceo_name,
            contact_email: company.contact_email,
            contact_phone: company.contact_phone,
            email_domain: company.email_domain,
            parent_company_id: company.parent_company_id,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

/// A stored company together with the resolved names of its selections.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyDetailDto {
    pub company: CompanyDto,
    pub selected_states: Vec<SelectionEntry>,
    pub selected_cities: Vec<SelectionEntry>,
}

/// An existing company that can be chosen as parent.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ParentCandidateDto {
    pub company_id: String,
    pub company_name: String,
}

/// Field-keyed validation failures, at most one message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrors {
    pub errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-field failure.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Records `message` for `field` unless the field already failed a rule.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}
