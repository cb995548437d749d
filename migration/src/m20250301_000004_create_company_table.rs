use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_create_geo_country_table::GeoCountry;

static IDX_COMPANY_PARENT_COMPANY_ID: &str = "idx_company_parent_company_id";
static IDX_COMPANY_STATUS: &str = "idx_company_status";
static FK_COMPANY_PARENT_COMPANY_ID: &str = "fk_company_parent_company_id";
static FK_COMPANY_COUNTRY_ID: &str = "fk_company_country_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(string_len(Company::CompanyId, 8).primary_key())
                    .col(string_uniq(Company::CompanyName))
                    .col(string(Company::CompanyIndustry))
                    .col(string(Company::CompanyType))
                    .col(integer(Company::CountryId))
                    .col(string(Company::TimeZone))
                    .col(string(Company::Currency))
                    .col(text(Company::CompanyPresentAddress))
                    .col(text(Company::CompanyPermanentAddress))
                    .col(string_uniq(Company::CompanyRegistrationNo))
                    .col(string_uniq(Company::GstNo))
                    .col(string_uniq(Company::PfNo))
                    .col(string_uniq(Company::LinNo))
                    .col(string_uniq(Company::PanNo))
                    .col(string_uniq(Company::EsiNo))
                    .col(string_uniq(Company::TanNo))
                    .col(string_uniq(Company::CompanyWebsite))
                    .col(text(Company::StateIds))
                    .col(text(Company::BranchLocationIds))
                    .col(text_null(Company::CompanyLogo))
                    .col(date(Company::CompanyRegistrationDate))
                    .col(string(Company::CeoName))
                    .col(string_uniq(Company::ContactEmail))
                    .col(string_uniq(Company::ContactPhone))
                    .col(string_uniq(Company::EmailDomain))
                    .col(string_len(Company::IsParent, 3))
                    .col(string_len_null(Company::ParentCompanyId, 8))
                    .col(integer(Company::Status).default(1))
                    .col(timestamp(Company::CreatedAt))
                    .col(timestamp(Company::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMPANY_PARENT_COMPANY_ID)
                    .table(Company::Table)
                    .col(Company::ParentCompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMPANY_STATUS)
                    .table(Company::Table)
                    .col(Company::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMPANY_PARENT_COMPANY_ID)
                    .from_tbl(Company::Table)
                    .from_col(Company::ParentCompanyId)
                    .to_tbl(Company::Table)
                    .to_col(Company::CompanyId)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMPANY_COUNTRY_ID)
                    .from_tbl(Company::Table)
                    .from_col(Company::CountryId)
                    .to_tbl(GeoCountry::Table)
                    .to_col(GeoCountry::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COMPANY_COUNTRY_ID)
                    .table(Company::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COMPANY_PARENT_COMPANY_ID)
                    .table(Company::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMPANY_STATUS)
                    .table(Company::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMPANY_PARENT_COMPANY_ID)
                    .table(Company::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Company::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Company {
    Table,
    CompanyId,
    CompanyName,
    CompanyIndustry,
    CompanyType,
    CountryId,
    TimeZone,
    Currency,
    CompanyPresentAddress,
    CompanyPermanentAddress,
    CompanyRegistrationNo,
    GstNo,
    PfNo,
    LinNo,
    PanNo,
    EsiNo,
    TanNo,
    CompanyWebsite,
    StateIds,
    BranchLocationIds,
    CompanyLogo,
    CompanyRegistrationDate,
    CeoName,
    ContactEmail,
    ContactPhone,
    EmailDomain,
    IsParent,
    ParentCompanyId,
    Status,
    CreatedAt,
    UpdatedAt,
}
