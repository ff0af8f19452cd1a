use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Check detail attached 1:1 to a payup work when the method is "check".
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_checks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub check_id: i32,
    pub order_payup_work_id: i32,
    pub check_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::payup_work::Entity",
        from = "Column::OrderPayupWorkId",
        to = "super::payup_work::Column::OrderPayupWorkId"
    )]
    PayupWork,
}

impl Related<super::payup_work::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PayupWork.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
