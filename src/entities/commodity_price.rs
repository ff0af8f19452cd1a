use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Commodity price row. Latest non-deleted row (by `create_time_stamp`) wins.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "commodity_prices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub commodity_price_id: i32,
    pub commodity_id: i32,
    pub price: Decimal,
    pub create_time_stamp: DateTime<Utc>,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::commodity::Entity",
        from = "Column::CommodityId",
        to = "super::commodity::Column::CommodityId"
    )]
    Commodity,
    #[sea_orm(has_many = "super::order_commodity_line::Entity")]
    OrderCommodityLine,
}

impl Related<super::commodity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Commodity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
