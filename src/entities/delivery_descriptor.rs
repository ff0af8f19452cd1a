use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reusable drop-off descriptor (location, usage, floor, elevator) attached to
/// one or more gas lines of the same order. Deduplicated per creation
/// transaction on the full tuple.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "delivery_descriptors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub delivery_id: i32,
    pub cis_id: String,
    pub delivery_location: String,
    pub usage_name: String,
    pub floor: i32,
    pub is_elevator: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_gas_line::Entity")]
    OrderGasLine,
}

impl Related<super::order_gas_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderGasLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
