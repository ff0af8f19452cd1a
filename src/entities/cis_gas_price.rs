use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer-specific gas price override. When an effective row exists for a
/// cylinder it always wins over the supplier-wide list for that customer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cis_gas_prices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub cis_gp_id: i32,
    pub gas_id: i32,
    pub cis_id: String,
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
    #[sea_orm(
        belongs_to = "super::customer_in_supplier::Entity",
        from = "Column::CisId",
        to = "super::customer_in_supplier::Column::CisId"
    )]
    CustomerInSupplier,
    #[sea_orm(has_many = "super::order_gas_line::Entity")]
    OrderGasLine,
}

impl Related<super::gas_cylinder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GasCylinder.def()
    }
}

impl Related<super::customer_in_supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerInSupplier.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
