use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Price for a cylinder action (deposit, exchange) by cylinder specification.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cylinder_prices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub cp_id: i32,
    pub cylinder_specification: i32,
    pub customer_action_type: String,
    pub price: Decimal,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_cylinder_line::Entity")]
    OrderCylinderLine,
}

impl Related<super::order_cylinder_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderCylinderLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
