use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order header. `order_id` is the human-readable `{prefix}O_{n}` identifier
/// and is immutable once created; line items are only ever appended, never
/// removed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: String,
    pub cis_id: String,
    pub contact_phone: String,
    pub note: Option<String>,
    /// One of "undelivered", "delivering", "accomplished".
    pub order_status: String,
    /// One of "unpicked", "picked", "accomplished". Independent axis from
    /// `order_status`; only some combinations are meaningful for display.
    pub delivery_sub_status: String,
    /// One of "immediate", "scheduled".
    pub delivery_type: String,
    pub time_slot: Option<String>,
    pub discount: Decimal,
    pub gas_discount: Decimal,
    pub tax_id_number: Option<String>,
    pub address_id: i64,
    pub courier_id: Option<String>,
    pub delivery_time_stamp: DateTime<Utc>,
    pub create_time_stamp: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer_in_supplier::Entity",
        from = "Column::CisId",
        to = "super::customer_in_supplier::Column::CisId"
    )]
    CustomerInSupplier,
    #[sea_orm(has_many = "super::order_gas_line::Entity")]
    OrderGasLine,
    #[sea_orm(has_many = "super::order_commodity_line::Entity")]
    OrderCommodityLine,
    #[sea_orm(has_many = "super::order_cylinder_line::Entity")]
    OrderCylinderLine,
    #[sea_orm(has_many = "super::cylinder_mortgage::Entity")]
    CylinderMortgage,
    #[sea_orm(has_many = "super::usage_fee::Entity")]
    UsageFee,
    #[sea_orm(has_many = "super::order_refund::Entity")]
    OrderRefund,
    #[sea_orm(has_many = "super::payup::Entity")]
    Payup,
}

impl Related<super::customer_in_supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerInSupplier.def()
    }
}

impl Related<super::order_gas_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderGasLine.def()
    }
}

impl Related<super::order_commodity_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderCommodityLine.def()
    }
}

impl Related<super::order_cylinder_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderCylinderLine.def()
    }
}

impl Related<super::cylinder_mortgage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CylinderMortgage.def()
    }
}

impl Related<super::usage_fee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsageFee.def()
    }
}

impl Related<super::order_refund::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderRefund.def()
    }
}

impl Related<super::payup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
