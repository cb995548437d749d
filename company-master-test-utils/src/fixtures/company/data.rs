//! Company database insertion utilities.

use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use crate::{
    error::TestError,
    fixtures::company::{factory, CompanyFixtures},
    model::CompanyModel,
};

impl<'a> CompanyFixtures<'a> {
    /// Insert an active parent company with no branch locations.
    ///
    /// # Arguments
    /// - `company_id` - Identity of the record
    /// - `seed` - Seed passed to [`factory::mock_company`]
    pub async fn insert_mock_company(
        &self,
        company_id: &str,
        seed: u32,
    ) -> Result<CompanyModel, TestError> {
        self.insert_mock_company_with_locations(company_id, seed, "[]", "[]")
            .await
    }

    /// Insert an active parent company with raw hierarchy column contents.
    ///
    /// The hierarchy columns are written verbatim so tests can store malformed JSON.
    pub async fn insert_mock_company_with_locations(
        &self,
        company_id: &str,
        seed: u32,
        state_ids: &str,
        branch_location_ids: &str,
    ) -> Result<CompanyModel, TestError> {
        let mut company = factory::mock_company_model(company_id, seed);
        company.state_ids = state_ids.to_string();
        company.branch_location_ids = branch_location_ids.to_string();

        Ok(
            entity::prelude::Company::insert(company.into_active_model().reset_all())
                .exec_with_returning(&self.setup.db)
                .await?,
        )
    }

    /// Flip a stored company to the soft-deleted status.
    pub async fn deactivate(&self, company_id: &str) -> Result<(), TestError> {
        entity::prelude::Company::update(entity::company::ActiveModel {
            company_id: ActiveValue::Unchanged(company_id.to_string()),
            status: ActiveValue::Set(entity::company::STATUS_INACTIVE),
            ..Default::default()
        })
        .exec(&self.setup.db)
        .await?;

        Ok(())
    }
}
