pub mod cis_gas_price;
pub mod commodity;
pub mod commodity_price;
pub mod customer_in_supplier;
pub mod cylinder_mortgage;
pub mod cylinder_price;
pub mod delivery_descriptor;
pub mod gas_cylinder;
pub mod gas_price;
pub mod order;
pub mod order_check;
pub mod order_commodity_line;
pub mod order_cylinder_line;
pub mod order_gas_line;
pub mod order_refund;
pub mod payup;
pub mod payup_work;
pub mod supplier;
pub mod usage_fee;
pub mod wallet_ledger_entry;
