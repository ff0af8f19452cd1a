use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Gas line item. Exactly one of `gp_id` / `cis_gp_id` is set, recording
/// which price list the line was resolved against.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_gas_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub order_gas_id: i32,
    pub order_id: String,
    pub gp_id: Option<i32>,
    pub cis_gp_id: Option<i32>,
    pub numbers_of_cylinder: i32,
    pub delivery_id: Option<i32>,
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
        belongs_to = "super::gas_price::Entity",
        from = "Column::GpId",
        to = "super::gas_price::Column::GpId"
    )]
    GasPrice,
    #[sea_orm(
        belongs_to = "super::cis_gas_price::Entity",
        from = "Column::CisGpId",
        to = "super::cis_gas_price::Column::CisGpId"
    )]
    CisGasPrice,
    #[sea_orm(
        belongs_to = "super::delivery_descriptor::Entity",
        from = "Column::DeliveryId",
        to = "super::delivery_descriptor::Column::DeliveryId"
    )]
    DeliveryDescriptor,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::gas_price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GasPrice.def()
    }
}

impl Related<super::cis_gas_price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CisGasPrice.def()
    }
}

impl Related<super::delivery_descriptor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryDescriptor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
