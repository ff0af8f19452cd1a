use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Links a payment instrument transaction to an order. `is_arrears_order`
/// marks settlements of prior arrears rather than the order's own charges.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub order_payup_id: i32,
    pub order_id: String,
    pub order_payup_work_id: i32,
    pub payment_amount: Decimal,
    pub is_arrears_order: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::OrderId"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::payup_work::Entity",
        from = "Column::OrderPayupWorkId",
        to = "super::payup_work::Column::OrderPayupWorkId"
    )]
    PayupWork,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::payup_work::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PayupWork.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
