//! Company record repository.

use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Queries and writes over the company table.
pub struct CompanyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompanyRepository<'a, C> {
    /// Creates a new instance of [`CompanyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a company by identity regardless of its status
    pub async fn find(&self, company_id: &str) -> Result<Option<entity::company::Model>, DbErr> {
        entity::prelude::Company::find_by_id(company_id.to_string())
            .one(self.db)
            .await
    }

    /// Checks whether any record, active or soft-deleted, holds `company_id`
    pub async fn exists(&self, company_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Company::find_by_id(company_id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds a company other than `exclude_id` whose `column` equals `value`
    ///
    /// Used for uniqueness checks; passing the identity of the record being edited
    /// excludes it from the lookup.
    pub async fn find_by_field_value(
        &self,
        column: entity::company::Column,
        value: &str,
        exclude_id: Option<&str>,
    ) -> Result<Option<entity::company::Model>, DbErr> {
        let mut query = entity::prelude::Company::find().filter(column.eq(value));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::company::Column::CompanyId.ne(exclude_id));
        }

        query.one(self.db).await
    }

    /// Inserts a new company
    ///
    /// Fails with a unique constraint violation if the identity or any uniquely
    /// constrained field is already taken.
    pub async fn create(
        &self,
        company: entity::company::Model,
    ) -> Result<entity::company::Model, DbErr> {
        entity::prelude::Company::insert(company.into_active_model().reset_all())
            .exec_with_returning(self.db)
            .await
    }

    /// Creates or overwrites the company stored under the model's identity
    ///
    /// On conflict every column is overwritten except the identity, `created_at`
    /// and `status`, so an edit never resurrects a soft-deleted company.
    pub async fn upsert(
        &self,
        company: entity::company::Model,
    ) -> Result<entity::company::Model, DbErr> {
        entity::prelude::Company::insert(company.into_active_model().reset_all())
            .on_conflict(
                OnConflict::column(entity::company::Column::CompanyId)
                    .update_columns([
                        entity::company::Column::CompanyName,
                        entity::company::Column::CompanyIndustry,
                        entity::company::Column::CompanyType,
                        entity::company::Column::CountryId,
                        entity::company::Column::TimeZone,
                        entity::company::Column::Currency,
                        entity::company::Column::CompanyPresentAddress,
                        entity::company::Column::CompanyPermanentAddress,
                        entity::company::Column::CompanyRegistrationNo,
                        entity::company::Column::GstNo,
                        entity::company::Column::PfNo,
                        entity::company::Column::LinNo,
                        entity::company::Column::PanNo,
                        entity::company::Column::EsiNo,
                        entity::company::Column::TanNo,
                        entity::company::Column::CompanyWebsite,
                        entity::company::Column::StateIds,
                        entity::company::Column::BranchLocationIds,
                        entity::company::Column::CompanyLogo,
                        entity::company::Column::CompanyRegistrationDate,
                        entity::company::Column::CeoName,
                        entity::company::Column::ContactEmail,
                        entity::company::Column::ContactPhone,
                        entity::company::Column::EmailDomain,
                        entity::company::Column::IsParent,
                        entity::company::Column::ParentCompanyId,
                        entity::company::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Flips a company to the inactive status
    ///
    /// # Returns
    /// - `Ok(None)` - No company with `company_id` exists
    /// - `Ok(Some(false))` - The company was already inactive, nothing changed
    /// - `Ok(Some(true))` - The company was deactivated
    pub async fn soft_delete(&self, company_id: &str) -> Result<Option<bool>, DbErr> {
        let company = match self.find(company_id).await? {
            Some(company) => company,
            None => return Ok(None),
        };

        if company.status == entity::company::STATUS_INACTIVE {
            return Ok(Some(false));
        }

        let mut company_am = company.into_active_model();
        company_am.status = ActiveValue::Set(entity::company::STATUS_INACTIVE);
        company_am.updated_at = ActiveValue::Set(chrono::Utc::now().naive_utc());
        company_am.update(self.db).await?;

        Ok(Some(true))
    }

    /// Lists `(company_id, company_name)` of active companies sorted by name
    pub async fn list_active_names(&self) -> Result<Vec<(String, String)>, DbErr> {
        entity::prelude::Company::find()
            .select_only()
            .column(entity::company::Column::CompanyId)
            .column(entity::company::Column::CompanyName)
            .filter(entity::company::Column::Status.eq(entity::company::STATUS_ACTIVE))
            .order_by_asc(entity::company::Column::CompanyName)
            .into_tuple::<(String, String)>()
            .all(self.db)
            .await
    }
}
