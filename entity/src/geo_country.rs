use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "geo_country")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub name: String,
    pub currency: Option<String>,
    pub currency_symbol: Option<String>,
    /// JSON array of timezone objects, first entry is the display timezone
    #[sea_orm(column_type = "Text", nullable)]
    pub timezones: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::geo_state::Entity")]
    GeoState,
}

impl Related<super::geo_state::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GeoState.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
