use crate::{
    db::DbPool,
    entities::cis_gas_price::{self, Entity as CisGasPriceEntity},
    entities::commodity::{self, Entity as CommodityEntity},
    entities::commodity_price::{self, Entity as CommodityPriceEntity},
    entities::gas_cylinder::{self, Entity as GasCylinderEntity},
    entities::gas_price::{self, Entity as GasPriceEntity},
    errors::ServiceError,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Which price list an effective price was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    Supplier,
    CustomerOverride,
}

/// Scope a price query resolves against: the supplier-wide list alone, or
/// that list merged with one customer's override list.
#[derive(Debug, Clone)]
pub enum PriceScope {
    Supplier { supplier_id: String },
    Customer { supplier_id: String, cis_id: String },
}

impl PriceScope {
    pub fn supplier_id(&self) -> &str {
        match self {
            Self::Supplier { supplier_id } | Self::Customer { supplier_id, .. } => supplier_id,
        }
    }

    pub fn cis_id(&self) -> Option<&str> {
        match self {
            Self::Supplier { .. } => None,
            Self::Customer { cis_id, .. } => Some(cis_id),
        }
    }
}

/// One gas cylinder with its price effective at the requested instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedGasPrice {
    pub gas_id: i32,
    pub gas_type: String,
    pub kilogram: i32,
    pub price: Decimal,
    /// Set when the price came from the supplier-wide list.
    pub gp_id: Option<i32>,
    /// Set when the price came from the customer override list.
    pub cis_gp_id: Option<i32>,
    pub source: PriceSource,
    pub effect_time_stamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommodityWithPrice {
    pub commodity_id: i32,
    pub commodity_name: String,
    pub commodity_type: String,
    pub commodity_price_id: i32,
    pub price: Decimal,
}

/// Optional attribute filters for the gas price listing.
#[derive(Debug, Clone, Default)]
pub struct GasPriceFilter {
    pub gas_type: Option<String>,
    pub kilogram: Option<i32>,
}

/// Picks the effective supplier-wide row: non-deleted, `effect_time_stamp`
/// at or before `as_of`, greatest `effect_time_stamp`, ties broken toward
/// the highest primary key so the result is reproducible.
fn effective_supplier_row(
    rows: Vec<gas_price::Model>,
    as_of: DateTime<Utc>,
) -> Option<gas_price::Model> {
    rows.into_iter()
        .filter(|r| !r.deleted && r.effect_time_stamp <= as_of)
        .max_by_key(|r| (r.effect_time_stamp, r.gp_id))
}

/// Same rule over the customer override list.
fn effective_override_row(
    rows: Vec<cis_gas_price::Model>,
    as_of: DateTime<Utc>,
) -> Option<cis_gas_price::Model> {
    rows.into_iter()
        .filter(|r| !r.deleted && r.effect_time_stamp <= as_of)
        .max_by_key(|r| (r.effect_time_stamp, r.cis_gp_id))
}

/// Resolves effective prices from the two competing time-versioned lists.
/// A customer override, when present and effective, always beats the
/// supplier-wide price for the same cylinder.
#[derive(Clone)]
pub struct PriceResolver {
    db_pool: Arc<DbPool>,
}

impl PriceResolver {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Merged effective price per cylinder in scope. Cylinders with no
    /// effective row in either list are omitted, not errors.
    #[instrument(skip(self))]
    pub async fn list_effective_gas_prices(
        &self,
        scope: &PriceScope,
        filter: &GasPriceFilter,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<Vec<ResolvedGasPrice>, ServiceError> {
        let db = &*self.db_pool;
        let as_of = as_of.unwrap_or_else(Utc::now);

        let mut cylinders = GasCylinderEntity::find()
            .filter(gas_cylinder::Column::SupplierId.eq(scope.supplier_id()))
            .filter(gas_cylinder::Column::Visible.eq(true))
            .filter(gas_cylinder::Column::Deleted.eq(false));
        if let Some(gas_type) = &filter.gas_type {
            cylinders = cylinders.filter(gas_cylinder::Column::GasType.eq(gas_type));
        }
        if let Some(kilogram) = filter.kilogram {
            cylinders = cylinders.filter(gas_cylinder::Column::Kilogram.eq(kilogram));
        }
        let cylinders = cylinders
            .order_by_asc(gas_cylinder::Column::GasId)
            .all(db)
            .await?;

        if cylinders.is_empty() {
            return Ok(Vec::new());
        }
        let gas_ids: Vec<i32> = cylinders.iter().map(|c| c.gas_id).collect();

        let supplier_rows = GasPriceEntity::find()
            .filter(gas_price::Column::GasId.is_in(gas_ids.clone()))
            .filter(gas_price::Column::Deleted.eq(false))
            .all(db)
            .await?;
        let mut supplier_by_gas: HashMap<i32, Vec<gas_price::Model>> = HashMap::new();
        for row in supplier_rows {
            supplier_by_gas.entry(row.gas_id).or_default().push(row);
        }

        let mut override_by_gas: HashMap<i32, Vec<cis_gas_price::Model>> = HashMap::new();
        if let Some(cis_id) = scope.cis_id() {
            let override_rows = CisGasPriceEntity::find()
                .filter(cis_gas_price::Column::CisId.eq(cis_id))
                .filter(cis_gas_price::Column::GasId.is_in(gas_ids))
                .filter(cis_gas_price::Column::Deleted.eq(false))
                .all(db)
                .await?;
            for row in override_rows {
                override_by_gas.entry(row.gas_id).or_default().push(row);
            }
        }

        let mut resolved = Vec::with_capacity(cylinders.len());
        for cylinder in cylinders {
            let override_row = override_by_gas
                .remove(&cylinder.gas_id)
                .and_then(|rows| effective_override_row(rows, as_of));
            if let Some(row) = override_row {
                resolved.push(ResolvedGasPrice {
                    gas_id: cylinder.gas_id,
                    gas_type: cylinder.gas_type,
                    kilogram: cylinder.kilogram,
                    price: row.price,
                    gp_id: None,
                    cis_gp_id: Some(row.cis_gp_id),
                    source: PriceSource::CustomerOverride,
                    effect_time_stamp: row.effect_time_stamp,
                });
                continue;
            }
            let supplier_row = supplier_by_gas
                .remove(&cylinder.gas_id)
                .and_then(|rows| effective_supplier_row(rows, as_of));
            if let Some(row) = supplier_row {
                resolved.push(ResolvedGasPrice {
                    gas_id: cylinder.gas_id,
                    gas_type: cylinder.gas_type,
                    kilogram: cylinder.kilogram,
                    price: row.price,
                    gp_id: Some(row.gp_id),
                    cis_gp_id: None,
                    source: PriceSource::Supplier,
                    effect_time_stamp: row.effect_time_stamp,
                });
            }
        }
        Ok(resolved)
    }

    /// Resolves the effective price for one cylinder. Used at order-creation
    /// time, where an absent price is an error rather than an omission.
    #[instrument(skip(self))]
    pub async fn resolve_gas_price(
        &self,
        gas_id: i32,
        scope: &PriceScope,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<ResolvedGasPrice, ServiceError> {
        let db = &*self.db_pool;
        let as_of = as_of.unwrap_or_else(Utc::now);

        let cylinder = GasCylinderEntity::find_by_id(gas_id)
            .filter(gas_cylinder::Column::SupplierId.eq(scope.supplier_id()))
            .filter(gas_cylinder::Column::Deleted.eq(false))
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Gas cylinder {} not found", gas_id))
            })?;

        if let Some(cis_id) = scope.cis_id() {
            let rows = CisGasPriceEntity::find()
                .filter(cis_gas_price::Column::CisId.eq(cis_id))
                .filter(cis_gas_price::Column::GasId.eq(gas_id))
                .filter(cis_gas_price::Column::Deleted.eq(false))
                .all(db)
                .await?;
            if let Some(row) = effective_override_row(rows, as_of) {
                return Ok(ResolvedGasPrice {
                    gas_id,
                    gas_type: cylinder.gas_type,
                    kilogram: cylinder.kilogram,
                    price: row.price,
                    gp_id: None,
                    cis_gp_id: Some(row.cis_gp_id),
                    source: PriceSource::CustomerOverride,
                    effect_time_stamp: row.effect_time_stamp,
                });
            }
        }

        // Supplier-wide fallback only considers visible cylinders; customer
        // overrides are always visible to that customer.
        if !cylinder.visible {
            return Err(ServiceError::NotFound(format!(
                "No effective price for gas cylinder {}",
                gas_id
            )));
        }
        let rows = GasPriceEntity::find()
            .filter(gas_price::Column::GasId.eq(gas_id))
            .filter(gas_price::Column::Deleted.eq(false))
            .all(db)
            .await?;
        effective_supplier_row(rows, as_of)
            .map(|row| ResolvedGasPrice {
                gas_id,
                gas_type: cylinder.gas_type,
                kilogram: cylinder.kilogram,
                price: row.price,
                gp_id: Some(row.gp_id),
                cis_gp_id: None,
                source: PriceSource::Supplier,
                effect_time_stamp: row.effect_time_stamp,
            })
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "No effective price for gas cylinder {}",
                    gas_id
                ))
            })
    }

    /// Latest non-deleted price row for a commodity. Commodity prices are
    /// not time-scheduled; the newest row wins.
    #[instrument(skip(self))]
    pub async fn resolve_commodity_price(
        &self,
        commodity_id: i32,
    ) -> Result<commodity_price::Model, ServiceError> {
        let db = &*self.db_pool;
        CommodityPriceEntity::find()
            .filter(commodity_price::Column::CommodityId.eq(commodity_id))
            .filter(commodity_price::Column::Deleted.eq(false))
            .order_by_desc(commodity_price::Column::CreateTimeStamp)
            .order_by_desc(commodity_price::Column::CommodityPriceId)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("No price for commodity {}", commodity_id))
            })
    }

    /// Visible, in-stock commodities for a supplier with their latest price.
    /// Commodities with no price row yet are omitted.
    #[instrument(skip(self))]
    pub async fn list_commodities(
        &self,
        supplier_id: &str,
        commodity_type: Option<&str>,
    ) -> Result<Vec<CommodityWithPrice>, ServiceError> {
        let db = &*self.db_pool;

        let mut query = CommodityEntity::find()
            .filter(commodity::Column::SupplierId.eq(supplier_id))
            .filter(commodity::Column::Visible.eq(true))
            .filter(commodity::Column::Instock.eq(true))
            .filter(commodity::Column::Deleted.eq(false));
        if let Some(commodity_type) = commodity_type {
            query = query.filter(commodity::Column::CommodityType.eq(commodity_type));
        }
        let commodities = query
            .order_by_asc(commodity::Column::CommodityId)
            .all(db)
            .await?;

        if commodities.is_empty() {
            return Ok(Vec::new());
        }
        let commodity_ids: Vec<i32> = commodities.iter().map(|c| c.commodity_id).collect();

        let price_rows = CommodityPriceEntity::find()
            .filter(commodity_price::Column::CommodityId.is_in(commodity_ids))
            .filter(commodity_price::Column::Deleted.eq(false))
            .all(db)
            .await?;
        let mut latest_by_commodity: HashMap<i32, commodity_price::Model> = HashMap::new();
        for row in price_rows {
            let replace = latest_by_commodity
                .get(&row.commodity_id)
                .map(|current| {
                    (row.create_time_stamp, row.commodity_price_id)
                        > (current.create_time_stamp, current.commodity_price_id)
                })
                .unwrap_or(true);
            if replace {
                latest_by_commodity.insert(row.commodity_id, row);
            }
        }

        Ok(commodities
            .into_iter()
            .filter_map(|c| {
                latest_by_commodity
                    .remove(&c.commodity_id)
                    .map(|price| CommodityWithPrice {
                        commodity_id: c.commodity_id,
                        commodity_name: c.commodity_name,
                        commodity_type: c.commodity_type,
                        commodity_price_id: price.commodity_price_id,
                        price: price.price,
                    })
            })
            .collect())
    }
}
