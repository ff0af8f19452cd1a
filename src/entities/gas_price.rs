use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Supplier-wide gas price row. Time-versioned: the effective price for a
/// cylinder at instant T is the non-deleted row with the greatest
/// `effect_time_stamp <= T`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gas_prices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub gp_id: i32,
    pub gas_id: i32,
    pub price: Decimal,
    pub effect_time_stamp: DateTime<Utc>,
    pub upload_time_stamp: DateTime<Utc>,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gas_cylinder::Entity",
        from = "Column::GasId",
        to = "super::gas_cylinder::Column::GasId"
    )]
    GasCylinder,
    #[sea_orm(has_many = "super::order_gas_line::Entity")]
    OrderGasLine,
}

impl Related<super::gas_cylinder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GasCylinder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
