use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_commodity_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub order_commodity_id: i32,
    pub order_id: String,
    pub commodity_price_id: i32,
    pub numbers_of_commodity: i32,
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
        belongs_to = "super::commodity_price::Entity",
        from = "Column::CommodityPriceId",
        to = "super::commodity_price::Column::CommodityPriceId"
    )]
    CommodityPrice,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::commodity_price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CommodityPrice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
