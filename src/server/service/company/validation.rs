//! Company form validation.
//!
//! A candidate is checked against a fixed rule table. Each field lists its rules in
//! evaluation order and only the first failing rule of a field is reported. Uniqueness
//! rules query the store and exclude the company being edited.
//!
//! A candidate that passes is returned as a [`ValidatedCompany`] whose fields are no
//! longer optional.

use std::{collections::HashSet, sync::LazyLock};

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::NaiveDate;
use entity::company::Column;
use regex::Regex;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        company::{CompanyForm, ValidationErrors},
        selection::MAX_SELECTION,
    },
    server::{
        data::{company::CompanyRepository, geo::GeoRepository},
        error::{company::CompanyError, Error},
    },
};

static REGISTRATION_NO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z\-/]+$").unwrap());
static GST_NO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z]{1}[0-9A-Z]{1}Z[0-9A-Z]{1}$").unwrap()
});
static PF_NO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[A-Z0-9]{3}[0-9]{7}$").unwrap());
static LIN_NO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{8}$").unwrap());
static PAN_NO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]{1}$").unwrap());
static ESI_NO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{17}$").unwrap());
static TAN_NO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}[0-9]{5}[A-Z]{1}$").unwrap());
static EMAIL_DOMAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$").unwrap());
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Date format of `company_registration_date`
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single check applied to a text field.
#[derive(Clone, Copy)]
enum Rule {
    Required,
    Max(usize),
    Digits(usize),
    Pattern(&'static LazyLock<Regex>),
    Email,
    Url,
    Date,
    Unique(entity::company::Column),
}

/// Rules of one text field of the form.
struct FieldRules {
    field: &'static str,
    value: fn(&CompanyForm) -> Option<&str>,
    rules: &'static [Rule],
}

static TEXT_FIELDS: &[FieldRules] = &[
    FieldRules {
        field: "company_name",
        value: |f| f.company_name.as_deref(),
        rules: &[Rule::Required, Rule::Max(255), Rule::Unique(Column::CompanyName)],
    },
    FieldRules {
        field: "contact_email",
        value: |f| f.contact_email.as_deref(),
        rules: &[
            Rule::Required,
            Rule::Email,
            Rule::Max(255),
            Rule::Unique(Column::ContactEmail),
        ],
    },
    FieldRules {
        field: "contact_phone",
        value: |f| f.contact_phone.as_deref(),
        rules: &[Rule::Required, Rule::Digits(10), Rule::Unique(Column::ContactPhone)],
    },
    FieldRules {
        field: "ceo_name",
        value: |f| f.ceo_name.as_deref(),
        rules: &[Rule::Required, Rule::Max(255)],
    },
    FieldRules {
        field: "company_present_address",
        value: |f| f.company_present_address.as_deref(),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "company_permanent_address",
        value: |f| f.company_permanent_address.as_deref(),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "company_industry",
        value: |f| f.company_industry.as_deref(),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "company_type",
        value: |f| f.company_type.as_deref(),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "time_zone",
        value: |f| f.time_zone.as_deref(),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "currency",
        value: |f| f.currency.as_deref(),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "company_registration_no",
        value: |f| f.company_registration_no.as_deref(),
        rules: &[
            Rule::Required,
            Rule::Pattern(&REGISTRATION_NO),
            Rule::Unique(Column::CompanyRegistrationNo),
        ],
    },
    FieldRules {
        field: "gst_no",
        value: |f| f.gst_no.as_deref(),
        rules: &[Rule::Required, Rule::Pattern(&GST_NO), Rule::Unique(Column::GstNo)],
    },
    FieldRules {
        field: "pf_no",
        value: |f| f.pf_no.as_deref(),
        rules: &[Rule::Required, Rule::Pattern(&PF_NO), Rule::Unique(Column::PfNo)],
    },
    FieldRules {
        field: "lin_no",
        value: |f| f.lin_no.as_deref(),
        rules: &[Rule::Required, Rule::Pattern(&LIN_NO), Rule::Unique(Column::LinNo)],
    },
    FieldRules {
        field: "pan_no",
        value: |f| f.pan_no.as_deref(),
        rules: &[Rule::Required, Rule::Pattern(&PAN_NO), Rule::Unique(Column::PanNo)],
    },
    FieldRules {
        field: "esi_no",
        value: |f| f.esi_no.as_deref(),
        rules: &[Rule::Required, Rule::Pattern(&ESI_NO), Rule::Unique(Column::EsiNo)],
    },
    FieldRules {
        field: "tan_no",
        value: |f| f.tan_no.as_deref(),
        rules: &[Rule::Required, Rule::Pattern(&TAN_NO), Rule::Unique(Column::TanNo)],
    },
    FieldRules {
        field: "company_website",
        value: |f| f.company_website.as_deref(),
        rules: &[Rule::Required, Rule::Url, Rule::Unique(Column::CompanyWebsite)],
    },
    FieldRules {
        field: "company_registration_date",
        value: |f| f.company_registration_date.as_deref(),
        rules: &[Rule::Required, Rule::Date],
    },
    FieldRules {
        field: "email_domain",
        value: |f| f.email_domain.as_deref(),
        rules: &[
            Rule::Required,
            Rule::Max(255),
            Rule::Pattern(&EMAIL_DOMAIN),
            Rule::Unique(Column::EmailDomain),
        ],
    },
];

/// Form fields backed by a unique column, longest name first.
pub static UNIQUE_FIELDS: &[&str] = &[
    "company_registration_no",
    "company_website",
    "company_name",
    "contact_email",
    "contact_phone",
    "email_domain",
    "gst_no",
    "pf_no",
    "lin_no",
    "pan_no",
    "esi_no",
    "tan_no",
];

/// Human readable name of a field as used in messages, `gst_no` reads `gst no`.
pub fn field_label(field: &str) -> String {
    field.replace('_', " ")
}

/// Message for a value already held by another company.
pub fn taken_message(field: &str) -> String {
    format!("The {} has already been taken.", field_label(field))
}

fn required_message(field: &str) -> String {
    format!("The {} field is required.", field_label(field))
}

/// Trimmed value, blank counts as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn is_http_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

/// A company form that passed every rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedCompany {
    /// Trimmed display name
    pub company_name: String,
    /// Industry, free text
    pub company_industry: String,
    /// Company type, free text
    pub company_type: String,
    /// Country the company and its branches are in
    pub country_id: i32,
    /// Display string of the country's time zone
    pub time_zone: String,
    /// Display string of the country's currency
    pub currency: String,
    /// Current address
    pub company_present_address: String,
    /// Permanent address, the present address when marked the same
    pub company_permanent_address: String,
    /// Registration number
    pub company_registration_no: String,
    /// GST number
    pub gst_no: String,
    /// Provident fund number
    pub pf_no: String,
    /// Labour identification number
    pub lin_no: String,
    /// PAN number
    pub pan_no: String,
    /// ESI number
    pub esi_no: String,
    /// TAN number
    pub tan_no: String,
    /// Website, an http or https URL
    pub company_website: String,
    /// Date of registration
    pub company_registration_date: NaiveDate,
    /// Name of the CEO
    pub ceo_name: String,
    /// Contact email address
    pub contact_email: String,
    /// Ten digit contact phone number
    pub contact_phone: String,
    /// Email domain of the company
    pub email_domain: String,
    /// Whether the company is a parent company
    pub is_parent: bool,
    /// Always `None` for a parent company
    pub parent_company_id: Option<String>,
    /// New base64 logo, `None` when no logo was supplied
    pub company_logo: Option<String>,
    /// Selected branch states
    pub state_ids: Vec<i32>,
    /// Selected branch cities
    pub city_ids: Vec<i32>,
}

/// Checks a submitted company form against the field rules and the stored records.
pub struct CompanyValidator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyValidator<'a> {
    /// Creates a new instance of [`CompanyValidator`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates a candidate company.
    ///
    /// # Arguments
    /// - `form` - Submitted field values
    /// - `state_ids` / `city_ids` - IDs of the current state and city selection
    /// - `exclude_id` - Identity of the company being edited, excluded from uniqueness checks
    ///
    /// # Returns
    /// - `Ok(ValidatedCompany)` - Every rule passed
    /// - `Err(Error::CompanyError(CompanyError::Validation))` - The first failed rule of
    ///   each failing field
    /// - `Err(Error::DbErr)` - The store couldn't be queried
    pub async fn validate(
        &self,
        form: &CompanyForm,
        state_ids: &[i32],
        city_ids: &[i32],
        exclude_id: Option<&str>,
    ) -> Result<ValidatedCompany, Error> {
        let mut errors = ValidationErrors::new();

        for field_rules in TEXT_FIELDS {
            let value = present((field_rules.value)(form));

            if let Some(message) = self
                .check_text(field_rules.field, value, field_rules.rules, exclude_id)
                .await?
            {
                errors.add(field_rules.field, message);
            }
        }

        let country_id = self.check_country(form.country_id, &mut errors).await?;

        let parent_company_id = self.check_parent(form, &mut errors).await?;

        if let Some(logo) = present(form.company_logo.as_deref()) {
            if STANDARD.decode(logo).is_err() {
                errors.add(
                    "company_logo",
                    "The company logo field must be a valid base64 encoded image.",
                );
            }
        }

        check_selection("selected_states", state_ids, &mut errors);
        check_selection("selected_cities", city_ids, &mut errors);

        if let Some(country_id) = country_id {
            self.check_branches(country_id, state_ids, city_ids, &mut errors)
                .await?;
        }

        if !errors.is_empty() {
            return Err(CompanyError::Validation(errors).into());
        }

        Ok(into_validated(form, parent_company_id, state_ids, city_ids))
    }

    /// Returns the message of the first rule `value` fails.
    async fn check_text(
        &self,
        field: &str,
        value: Option<&str>,
        rules: &[Rule],
        exclude_id: Option<&str>,
    ) -> Result<Option<String>, Error> {
        let label = field_label(field);

        let Some(value) = value else {
            return Ok(rules
                .iter()
                .any(|rule| matches!(rule, Rule::Required))
                .then(|| required_message(field)));
        };

        for rule in rules {
            let failure = match *rule {
                Rule::Required => None,
                Rule::Max(max) => (value.chars().count() > max).then(|| {
                    format!(
                        "The {} field must not be greater than {} characters.",
                        label, max
                    )
                }),
                Rule::Digits(count) => {
                    let valid = value.len() == count && value.bytes().all(|b| b.is_ascii_digit());
                    (!valid).then(|| format!("The {} field must be {} digits.", label, count))
                }
                Rule::Pattern(pattern) => (!pattern.is_match(value))
                    .then(|| format!("The {} field format is invalid.", label)),
                Rule::Email => (!EMAIL.is_match(value))
                    .then(|| format!("The {} field must be a valid email address.", label)),
                Rule::Url => (!is_http_url(value))
                    .then(|| format!("The {} field must be a valid URL.", label)),
                Rule::Date => NaiveDate::parse_from_str(value, DATE_FORMAT)
                    .is_err()
                    .then(|| format!("The {} field must be a valid date.", label)),
                Rule::Unique(column) => CompanyRepository::new(self.db)
                    .find_by_field_value(column, value, exclude_id)
                    .await?
                    .map(|_| taken_message(field)),
            };

            if failure.is_some() {
                return Ok(failure);
            }
        }

        Ok(None)
    }

    /// Checks that the country is given and known, returning it when it is.
    async fn check_country(
        &self,
        country_id: Option<i32>,
        errors: &mut ValidationErrors,
    ) -> Result<Option<i32>, Error> {
        let Some(country_id) = country_id else {
            errors.add("country_id", required_message("country_id"));
            return Ok(None);
        };

        if GeoRepository::new(self.db)
            .find_country(country_id)
            .await?
            .is_none()
        {
            errors.add("country_id", "The selected country id is invalid.");
            return Ok(None);
        }

        Ok(Some(country_id))
    }

    /// Checks that the selected states belong to the country and the selected cities to
    /// the selected states.
    ///
    /// Skipped for a selection that already failed its size rule.
    async fn check_branches(
        &self,
        country_id: i32,
        state_ids: &[i32],
        city_ids: &[i32],
        errors: &mut ValidationErrors,
    ) -> Result<(), Error> {
        if errors.has("selected_states") {
            return Ok(());
        }

        let geo_repo = GeoRepository::new(self.db);

        let country_states: HashSet<i32> = geo_repo
            .list_states(country_id)
            .await?
            .into_iter()
            .map(|state| state.id)
            .collect();
        if state_ids.iter().any(|id| !country_states.contains(id)) {
            errors.add(
                "selected_states",
                "The selected states must belong to the selected country.",
            );
            return Ok(());
        }

        if errors.has("selected_cities") {
            return Ok(());
        }

        let state_cities: HashSet<i32> = geo_repo
            .list_cities(state_ids)
            .await?
            .into_iter()
            .map(|city| city.id)
            .collect();
        if city_ids.iter().any(|id| !state_cities.contains(id)) {
            errors.add(
                "selected_cities",
                "The selected cities must belong to the selected states.",
            );
        }

        Ok(())
    }

    /// Applies the parent rules, returning the parent to store.
    ///
    /// A subsidiary (`is_parent` false) must name an existing company, a parent company
    /// must not name one.
    async fn check_parent(
        &self,
        form: &CompanyForm,
        errors: &mut ValidationErrors,
    ) -> Result<Option<String>, Error> {
        let parent_company_id = present(form.parent_company_id.as_deref());

        match (form.is_parent, parent_company_id) {
            (None, _) => {
                errors.add("is_parent", required_message("is_parent"));
                Ok(None)
            }
            (Some(true), None) => Ok(None),
            (Some(true), Some(_)) => {
                errors.add(
                    "parent_company_id",
                    "The parent company id field is prohibited when is parent is true.",
                );
                Ok(None)
            }
            (Some(false), None) => {
                errors.add("parent_company_id", required_message("parent_company_id"));
                Ok(None)
            }
            (Some(false), Some(parent_company_id)) => {
                let exists = CompanyRepository::new(self.db)
                    .exists(parent_company_id)
                    .await?;
                if !exists {
                    errors.add(
                        "parent_company_id",
                        "The selected parent company id is invalid.",
                    );
                }
                Ok(Some(parent_company_id.to_string()))
            }
        }
    }
}

fn check_selection(field: &str, ids: &[i32], errors: &mut ValidationErrors) {
    if ids.is_empty() {
        errors.add(field, required_message(field));
    } else if ids.len() > MAX_SELECTION {
        errors.add(
            field,
            format!(
                "The {} field must not have more than {} items.",
                field_label(field),
                MAX_SELECTION
            ),
        );
    }
}

/// Builds the validated company once every rule passed.
fn into_validated(
    form: &CompanyForm,
    parent_company_id: Option<String>,
    state_ids: &[i32],
    city_ids: &[i32],
) -> ValidatedCompany {
    let text = |value: &Option<String>| present(value.as_deref()).unwrap_or_default().to_string();

    ValidatedCompany {
        company_name: text(&form.company_name),
        company_industry: text(&form.company_industry),
        company_type: text(&form.company_type),
        country_id: form.country_id.unwrap_or_default(),
        time_zone: text(&form.time_zone),
        currency: text(&form.currency),
        company_present_address: text(&form.company_present_address),
        company_permanent_address: text(&form.company_permanent_address),
        company_registration_no: text(&form.company_registration_no),
        gst_no: text(&form.gst_no),
        pf_no: text(&form.pf_no),
        lin_no: text(&form.lin_no),
        pan_no: text(&form.pan_no),
        esi_no: text(&form.esi_no),
        tan_no: text(&form.tan_no),
        company_website: text(&form.company_website),
        company_registration_date: present(form.company_registration_date.as_deref())
            .and_then(|value| NaiveDate::parse_from_str(value, DATE_FORMAT).ok())
            .unwrap_or_default(),
        ceo_name: text(&form.ceo_name),
        contact_email: text(&form.contact_email),
        contact_phone: text(&form.contact_phone),
        email_domain: text(&form.email_domain),
        is_parent: form.is_parent.unwrap_or(true),
        parent_company_id,
        company_logo: present(form.company_logo.as_deref()).map(str::to_string),
        state_ids: state_ids.to_vec(),
        city_ids: city_ids.to_vec(),
    }
}
