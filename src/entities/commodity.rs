use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "commodities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub commodity_id: i32,
    pub supplier_id: String,
    pub commodity_name: String,
    pub commodity_type: String,
    pub visible: bool,
    pub instock: bool,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::commodity_price::Entity")]
    CommodityPrice,
}

impl Related<super::commodity_price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CommodityPrice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
