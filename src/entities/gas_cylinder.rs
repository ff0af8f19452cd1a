use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product identity for gas pricing: cylinder type and size per supplier.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gas_cylinders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub gas_id: i32,
    pub supplier_id: String,
    pub gas_type: String,
    pub kilogram: i32,
    pub visible: bool,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gas_price::Entity")]
    GasPrice,
    #[sea_orm(has_many = "super::cis_gas_price::Entity")]
    CisGasPrice,
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

impl ActiveModelBehavior for ActiveModel {}
