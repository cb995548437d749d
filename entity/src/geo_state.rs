use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "geo_state")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub country_id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::geo_country::Entity",
        from = "Column::CountryId",
        to = "super::geo_country::Column::Id"
    )]
    GeoCountry,
    #[sea_orm(has_many = "super::geo_city::Entity")]
    GeoCity,
}

impl Related<super::geo_country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GeoCountry.def()
    }
}

impl Related<super::geo_city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GeoCity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
