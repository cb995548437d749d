use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "geo_city")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub state_id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::geo_state::Entity",
        from = "Column::StateId",
        to = "super::geo_state::Column::Id"
    )]
    GeoState,
}

impl Related<super::geo_state::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GeoState.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
