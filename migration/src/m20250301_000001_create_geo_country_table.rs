use sea_orm_migration::{prelude::*, schema::*};

static IDX_GEO_COUNTRY_NAME: &str = "idx_geo_country_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GeoCountry::Table)
                    .if_not_exists()
                    .col(pk_auto(GeoCountry::Id))
                    .col(string(GeoCountry::Name))
                    .col(string_null(GeoCountry::Currency))
                    .col(string_null(GeoCountry::CurrencySymbol))
                    .col(text_null(GeoCountry::Timezones))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GEO_COUNTRY_NAME)
                    .table(GeoCountry::Table)
                    .col(GeoCountry::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GEO_COUNTRY_NAME)
                    .table(GeoCountry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GeoCountry::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GeoCountry {
    Table,
    Id,
    Name,
    Currency,
    CurrencySymbol,
    Timezones,
}
