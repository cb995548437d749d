//! Field values for company fixtures.
//!
//! Every value is derived from a `seed` so that two fixtures with different seeds never
//! collide on a uniquely constrained column, while two with the same seed always do.

/// Raw field values of a company that pass every format rule.
#[derive(Clone, Debug)]
pub struct MockCompanyValues {
    pub company_name: String,
    pub company_industry: String,
    pub company_type: String,
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
    pub company_registration_date: String,
    pub ceo_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub email_domain: String,
}

/// Create field values for a company.
///
/// # Arguments
/// - `seed` - Distinguishes uniquely constrained values, must be below 10000
///
/// # Returns
/// - `MockCompanyValues` - Values that satisfy every format rule
pub fn mock_company(seed: u32) -> MockCompanyValues {
    MockCompanyValues {
        company_name: format!("Company {}", seed),
        company_industry: "Information Technology".to_string(),
        company_type: "Private Limited".to_string(),
        time_zone: "IST (UTC+05:30)".to_string(),
        currency: "INR (₹)".to_string(),
        company_present_address: format!("{} MG Road, Bengaluru", seed),
        company_permanent_address: format!("{} Residency Road, Bengaluru", seed),
        company_registration_no: format!("U72200KA/{}", seed),
        gst_no: format!("29ABCDE{:04}F1Z5", seed),
        pf_no: format!("KABNG{:07}", seed),
        lin_no: format!("{:08}", seed),
        pan_no: format!("ABCDE{:04}F", seed),
        esi_no: format!("{:017}", seed),
        tan_no: format!("BLRA{:05}B", seed),
        company_website: format!("https://company{}.example.com", seed),
        company_registration_date: "2020-01-15".to_string(),
        ceo_name: "Asha Rao".to_string(),
        contact_email: format!("contact{}@company{}.com", seed, seed),
        contact_phone: format!("98450{:05}", seed),
        email_domain: format!("company{}.com", seed),
    }
}

/// Create an unsaved active parent company model built from `seed`.
///
/// # Arguments
/// - `company_id` - Identity of the record
/// - `seed` - Seed passed to [`mock_company`]
pub fn mock_company_model(company_id: &str, seed: u32) -> entity::company::Model {
    use chrono::{NaiveDate, Utc};

    let values = mock_company(seed);
    let now = Utc::now().naive_utc();

    entity::company::Model {
        company_id: company_id.to_string(),
        company_name: values.company_name,
        company_industry: values.company_industry,
        company_type: values.company_type,
        country_id: 1,
        time_zone: values.time_zone,
        currency: values.currency,
        company_present_address: values.company_present_address,
        company_permanent_address: values.company_permanent_address,
        company_registration_no: values.company_registration_no,
        gst_no: values.gst_no,
        pf_no: values.pf_no,
        lin_no: values.lin_no,
        pan_no: values.pan_no,
        esi_no: values.esi_no,
        tan_no: values.tan_no,
        company_website: values.company_website,
        state_ids: "[]".to_string(),
        branch_location_ids: "[]".to_string(),
        company_logo: None,
        company_registration_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap_or_default(),
        ceo_name: values.ceo_name,
        contact_email: values.contact_email,
        contact_phone: values.contact_phone,
        email_domain: values.email_domain,
        is_parent: entity::company::ParentFlag::Yes,
        parent_company_id: None,
        status: entity::company::STATUS_ACTIVE,
        created_at: now,
        updated_at: now,
    }
}
