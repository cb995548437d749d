//! Company record lifecycle.
//!
//! [`CompanyService`] composes the validator, the identity generator and the company
//! repository: it validates a submitted form with the current branch selection, mints an
//! identity for new companies and persists the record by identity.

pub mod identity;
pub mod validation;

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::company::{CompanyForm, ParentCandidateDto, ValidationErrors},
    server::{
        data::company::CompanyRepository,
        error::{company::CompanyError, Error},
        service::{geo::GeoService, selection::SelectionSetManager},
        util::hierarchy::{decode_ids, encode_ids},
    },
};

use identity::{CompanyIdentityGenerator, IdentitySource};
use validation::{taken_message, CompanyValidator, ValidatedCompany, UNIQUE_FIELDS};

/// Maximum length of a company identity
const COMPANY_ID_MAX_LEN: usize = 8;

/// What a unique constraint violation raised on save collided with.
#[derive(Debug, PartialEq, Eq)]
enum WriteConflict {
    /// Another record was stored under the drawn identity
    Identity,
    /// Another record holds the value of this form field
    Field(&'static str),
}

/// Maps a store error to the constraint it violated, `None` for any other error.
fn classify_write_conflict(err: &DbErr) -> Option<WriteConflict> {
    let Some(SqlErr::UniqueConstraintViolation(message)) = err.sql_err() else {
        return None;
    };

    if let Some(field) = UNIQUE_FIELDS
        .iter()
        .copied()
        .find(|field| message.contains(field))
    {
        return Some(WriteConflict::Field(field));
    }

    if message.contains("company_id") || message.contains("pkey") {
        return Some(WriteConflict::Identity);
    }

    None
}

/// Converts a failed save into the error reported to the caller.
fn save_error(err: DbErr) -> Error {
    match classify_write_conflict(&err) {
        Some(WriteConflict::Field(field)) => {
            tracing::debug!("Save rejected by unique constraint on {}", field);

            CompanyError::Validation(ValidationErrors::single(field, taken_message(field))).into()
        }
        _ => err.into(),
    }
}

/// Validates, stores, loads and soft-deletes company records.
pub struct CompanyService<'a> {
    db: &'a DatabaseConnection,
    max_identity_attempts: u32,
}

impl<'a> CompanyService<'a> {
    const DEFAULT_MAX_IDENTITY_ATTEMPTS: u32 = 5;

    /// Creates a service allowing the default number of identity collisions per save.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            max_identity_attempts: Self::DEFAULT_MAX_IDENTITY_ATTEMPTS,
        }
    }

    /// Overrides how many freshly drawn identities a new company may collide on.
    pub fn with_max_identity_attempts(mut self, max_identity_attempts: u32) -> Self {
        self.max_identity_attempts = max_identity_attempts.max(1);
        self
    }

    /// Validates and stores a company.
    ///
    /// With `existing_id` the company stored under that identity is overwritten, or
    /// created if there is none; its `created_at`, status and logo (when no new logo is
    /// supplied) are kept. Without it a new identity is generated.
    ///
    /// # Arguments
    /// - `form` - Submitted field values
    /// - `state_ids` / `city_ids` - IDs of the current branch selection
    /// - `existing_id` - Identity of the company being edited
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored company
    /// - `Err(Error::CompanyError(CompanyError::Validation))` - A rule failed or the store
    ///   rejected a value already held by another company
    /// - `Err(Error::CompanyError(CompanyError::IdentityExhausted))` - Every drawn identity
    ///   was taken by a concurrent save
    /// - `Err(Error::DbErr)` - The store couldn't be queried
    pub async fn upsert(
        &self,
        mut form: CompanyForm,
        state_ids: &[i32],
        city_ids: &[i32],
        existing_id: Option<&str>,
    ) -> Result<entity::company::Model, Error> {
        if form.same_as_present {
            form.company_permanent_address = form.company_present_address.clone();
        }

        if let Some(existing_id) = existing_id {
            if existing_id.is_empty() || existing_id.chars().count() > COMPANY_ID_MAX_LEN {
                return Err(CompanyError::Validation(ValidationErrors::single(
                    "company_id",
                    format!(
                        "The company id field must be between 1 and {} characters.",
                        COMPANY_ID_MAX_LEN
                    ),
                ))
                .into());
            }
        }

        let validated = CompanyValidator::new(self.db)
            .validate(&form, state_ids, city_ids, existing_id)
            .await?;

        match existing_id {
            Some(company_id) => self.save_existing(validated, company_id).await,
            None => {
                let mut generator = CompanyIdentityGenerator::new(self.db);
                self.save_new(validated, &mut generator).await
            }
        }
    }

    async fn save_existing(
        &self,
        validated: ValidatedCompany,
        company_id: &str,
    ) -> Result<entity::company::Model, Error> {
        let company_repo = CompanyRepository::new(self.db);
        let existing = company_repo.find(company_id).await?;

        let company = build_model(validated, company_id.to_string(), existing.as_ref());
        let company = company_repo.upsert(company).await.map_err(save_error)?;

        tracing::debug!("Saved company {}", company.company_id);

        Ok(company)
    }

    /// Stores a new company, redrawing the identity when a concurrent save took it.
    async fn save_new<S: IdentitySource>(
        &self,
        validated: ValidatedCompany,
        identities: &mut S,
    ) -> Result<entity::company::Model, Error> {
        let company_repo = CompanyRepository::new(self.db);

        for attempt in 1..=self.max_identity_attempts {
            let company_id = identities.next_identity().await?;
            let company = build_model(validated.clone(), company_id, None);

            match company_repo.create(company).await {
                Ok(company) => {
                    tracing::debug!("Created company {}", company.company_id);
                    return Ok(company);
                }
                Err(err) => match classify_write_conflict(&err) {
                    Some(WriteConflict::Identity) => {
                        tracing::warn!(
                            "Generated company ID was taken before insert (attempt {}/{})",
                            attempt,
                            self.max_identity_attempts
                        );
                    }
                    _ => return Err(save_error(err)),
                },
            }
        }

        Err(CompanyError::IdentityExhausted(self.max_identity_attempts).into())
    }

    /// Loads a company with its branch selection for editing or viewing.
    ///
    /// Soft-deleted companies are loaded as well. Malformed hierarchy columns load as an
    /// empty selection.
    pub async fn load(
        &self,
        company_id: &str,
    ) -> Result<(entity::company::Model, SelectionSetManager), Error> {
        let company = CompanyRepository::new(self.db)
            .find(company_id)
            .await?
            .ok_or_else(|| CompanyError::NotFound(company_id.to_string()))?;

        let selection = SelectionSetManager::from_stored(
            &GeoService::new(self.db),
            company.country_id,
            &decode_ids(&company.state_ids),
            &decode_ids(&company.branch_location_ids),
        )
        .await;

        Ok((company, selection))
    }

    /// Soft-deletes a company, deleting an inactive company again is a no-op.
    pub async fn delete(&self, company_id: &str) -> Result<(), Error> {
        match CompanyRepository::new(self.db).soft_delete(company_id).await? {
            Some(true) => {
                tracing::info!("Deactivated company {}", company_id);
                Ok(())
            }
            Some(false) => {
                tracing::debug!("Company {} is already inactive", company_id);
                Ok(())
            }
            None => Err(CompanyError::NotFound(company_id.to_string()).into()),
        }
    }

    /// Active companies that can be chosen as parent, sorted by name.
    ///
    /// `exclude_id` leaves out the company being edited.
    pub async fn parent_candidates(
        &self,
        exclude_id: Option<&str>,
    ) -> Result<Vec<ParentCandidateDto>, Error> {
        let companies = CompanyRepository::new(self.db).list_active_names().await?;

        Ok(companies
            .into_iter()
            .filter(|(company_id, _)| Some(company_id.as_str()) != exclude_id)
            .map(|(company_id, company_name)| ParentCandidateDto {
                company_id,
                company_name,
            })
            .collect())
    }
}

/// Builds the stored form of a validated company.
fn build_model(
    validated: ValidatedCompany,
    company_id: String,
    existing: Option<&entity::company::Model>,
) -> entity::company::Model {
    let now = Utc::now().naive_utc();

    let (is_parent, parent_company_id) = if validated.is_parent {
        (entity::company::ParentFlag::Yes, None)
    } else {
        (entity::company::ParentFlag::No, validated.parent_company_id)
    };

    entity::company::Model {
        company_id,
        company_name: validated.company_name,
        company_industry: validated.company_industry,
        company_type: validated.company_type,
        country_id: validated.country_id,
        time_zone: validated.time_zone,
        currency: validated.currency,
        company_present_address: validated.company_present_address,
        company_permanent_address: validated.company_permanent_address,
        company_registration_no: validated.company_registration_no,
        gst_no: validated.gst_no,
        pf_no: validated.pf_no,
        lin_no: validated.lin_no,
        pan_no: validated.pan_no,
        esi_no: validated.esi_no,
        tan_no: validated.tan_no,
        company_website: validated.company_website,
        state_ids: encode_ids(&validated.state_ids),
        branch_location_ids: encode_ids(&validated.city_ids),
        company_logo: validated
            .company_logo
            .or_else(|| existing.and_then(|company| company.company_logo.clone())),
        company_registration_date: validated.company_registration_date,
        ceo_name: validated.ceo_name,
        contact_email: validated.contact_email,
        contact_phone: validated.contact_phone,
        email_domain: validated.email_domain,
        is_parent,
        parent_company_id,
        status: existing
            .map(|company| company.status)
            .unwrap_or(entity::company::STATUS_ACTIVE),
        created_at: existing.map(|company| company.created_at).unwrap_or(now),
        updated_at: now,
    }
}

#[cfg(test)]
mod tests;
