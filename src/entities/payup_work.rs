use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One payment instrument transaction. `pay_way` is "cash", "e_wallet" or
/// "check".
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payup_works")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub order_payup_work_id: i32,
    pub pay_way: String,
    pub payment_amount: Decimal,
    pub create_time_stamp: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::payup::Entity")]
    Payup,
    #[sea_orm(has_one = "super::order_check::Entity")]
    OrderCheck,
}

impl Related<super::payup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payup.def()
    }
}

impl Related<super::order_check::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderCheck.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
