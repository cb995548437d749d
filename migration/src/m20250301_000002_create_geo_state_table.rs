use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_create_geo_country_table::GeoCountry;

static IDX_GEO_STATE_COUNTRY_ID: &str = "idx_geo_state_country_id";
static FK_GEO_STATE_COUNTRY_ID: &str = "fk_geo_state_country_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GeoState::Table)
                    .if_not_exists()
                    .col(pk_auto(GeoState::Id))
                    .col(integer(GeoState::CountryId))
                    .col(string(GeoState::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GEO_STATE_COUNTRY_ID)
                    .table(GeoState::Table)
                    .col(GeoState::CountryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GEO_STATE_COUNTRY_ID)
                    .from_tbl(GeoState::Table)
                    .from_col(GeoState::CountryId)
                    .to_tbl(GeoCountry::Table)
                    .to_col(GeoCountry::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GEO_STATE_COUNTRY_ID)
                    .table(GeoState::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GEO_STATE_COUNTRY_ID)
                    .table(GeoState::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GeoState::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GeoState {
    Table,
    Id,
    CountryId,
    Name,
}
