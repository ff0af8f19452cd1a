use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The account a customer holds with one specific supplier ("CIS"); scopes
/// pricing overrides, arrears, and the wallet ledger.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers_in_suppliers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cis_id: String,
    pub customer_id: i64,
    pub supplier_id: String,
    pub customer_name: String,
    pub main_phone: String,
    /// Outstanding balance carried from before this system's records.
    pub init_arrears: Decimal,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::SupplierId"
    )]
    Supplier,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
    #[sea_orm(has_many = "super::wallet_ledger_entry::Entity")]
    WalletLedgerEntry,
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::wallet_ledger_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WalletLedgerEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
