use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000002_create_geo_state_table::GeoState;

static IDX_GEO_CITY_STATE_ID: &str = "idx_geo_city_state_id";
static FK_GEO_CITY_STATE_ID: &str = "fk_geo_city_state_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GeoCity::Table)
                    .if_not_exists()
                    .col(pk_auto(GeoCity::Id))
                    .col(integer(GeoCity::StateId))
                    .col(string(GeoCity::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GEO_CITY_STATE_ID)
                    .table(GeoCity::Table)
                    .col(GeoCity::StateId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GEO_CITY_STATE_ID)
                    .from_tbl(GeoCity::Table)
                    .from_col(GeoCity::StateId)
                    .to_tbl(GeoState::Table)
                    .to_col(GeoState::Id)
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
                    .name(FK_GEO_CITY_STATE_ID)
                    .table(GeoCity::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GEO_CITY_STATE_ID)
                    .table(GeoCity::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GeoCity::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GeoCity {
    Table,
    Id,
    StateId,
    Name,
}
