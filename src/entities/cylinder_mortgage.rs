use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cylinder deposit taken or returned alongside an order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cylinder_mortgages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub cis_cylinder_mortgage_id: i32,
    pub cis_id: String,
    pub order_id: String,
    pub take_cylinder_type: String,
    pub cylinder_specification: i32,
    pub money: Decimal,
    pub numbers_of_cylinder: i32,
    pub create_time_stamp: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::OrderId"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
