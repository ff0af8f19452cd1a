use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only wallet ledger. The wallet balance for a CIS at any time is the
/// sum of all entries; rows are never updated or deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wallet_ledger_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub cis_wallet_id: i32,
    pub cis_id: String,
    pub order_id: String,
    /// Always "payment" (a debit) for entries written by this subsystem.
    pub flow_type: String,
    pub money: Decimal,
    pub create_time_stamp: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer_in_supplier::Entity",
        from = "Column::CisId",
        to = "super::customer_in_supplier::Column::CisId"
    )]
    CustomerInSupplier,
}

impl Related<super::customer_in_supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerInSupplier.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
