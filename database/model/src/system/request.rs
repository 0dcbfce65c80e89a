//! Request record
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub employee_id: String,
    pub created_at: DateTimeUtc,
    pub requester: String,
    pub requester_area: String,
    pub operation_type: String,
    pub item_code: String,
    pub location: String,
    #[sea_orm(column_type = "Text")]
    pub note: String,
    pub service_duration: Option<String>,
    pub status: String,
    pub service_started_at: Option<DateTimeUtc>,
    pub service_completed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
