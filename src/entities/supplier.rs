use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub supplier_id: String,
    /// Short code used to build human-readable order ids (`{prefix}O_{n}`).
    pub prefix: String,
    pub supplier_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::customer_in_supplier::Entity")]
    CustomerInSupplier,
}

impl Related<super::customer_in_supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerInSupplier.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
