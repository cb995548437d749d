use sea_orm::entity::prelude::*;

/// Persisted form of the company's parent flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(3))")]
pub enum ParentFlag {
    #[sea_orm(string_value = "yes")]
    Yes,
    #[sea_orm(string_value = "no")]
    No,
}

/// Status value of a company that has not been soft-deleted
pub const STATUS_ACTIVE: i32 = 1;
/// Status value of a soft-deleted company
pub const STATUS_INACTIVE: i32 = 0;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub company_id: String,
    #[sea_orm(unique)]
    pub company_name: String,
    pub company_industry: String,
    pub company_type: String,
    pub country_id: i32,
    pub time_zone: String,
    pub currency: String,
    #[sea_orm(column_type = "Text")]
    pub company_present_address: String,
    #[sea_orm(column_type = "Text")]
    pub company_permanent_address: String,
    #[sea_orm(unique)]
    pub company_registration_no: String,
    #[sea_orm(unique)]
    pub gst_no: String,
    #[sea_orm(unique)]
    pub pf_no: String,
    #[sea_orm(unique)]
    pub lin_no: String,
    #[sea_orm(unique)]
    pub pan_no: String,
    #[sea_orm(unique)]
    pub esi_no: String,
    #[sea_orm(unique)]
    pub tan_no: String,
    #[sea_orm(unique)]
    pub company_website: String,
    /// JSON-encoded array of selected state IDs
    #[sea_orm(column_type = "Text")]
    pub state_ids: String,
    /// JSON-encoded array of selected city IDs
    #[sea_orm(column_type = "Text")]
    pub branch_location_ids: String,
    /// Base64-encoded logo image
    #[sea_orm(column_type = "Text", nullable)]
    pub company_logo: Option<String>,
    pub company_registration_date: Date,
    pub ceo_name: String,
    #[sea_orm(unique)]
    pub contact_email: String,
    #[sea_orm(unique)]
    pub contact_phone: String,
    #[sea_orm(unique)]
    pub email_domain: String,
    pub is_parent: ParentFlag,
    #[sea_orm(indexed)]
    pub parent_company_id: Option<String>,
    pub status: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
