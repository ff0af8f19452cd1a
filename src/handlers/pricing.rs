use axum::{
    extract::{Query, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::ServiceError;
use crate::services::pricing::{
    CommodityWithPrice, GasPriceFilter, PriceScope, ResolvedGasPrice,
};
use crate::{ApiResponse, ApiResult, AppState};

#[derive(Debug, Deserialize)]
pub struct GasPriceQuery {
    pub supplier_id: String,
    pub cis_id: Option<String>,
    pub gas_type: Option<String>,
    pub kilogram: Option<i32>,
    pub as_of: Option<DateTime<Utc>>,
}

/// Merged effective gas price list: the customer override wins per cylinder
/// when `cis_id` is given, the supplier-wide list otherwise.
pub async fn list_gas_prices(
    State(state): State<AppState>,
    Query(query): Query<GasPriceQuery>,
) -> ApiResult<Vec<ResolvedGasPrice>> {
    if query.supplier_id.is_empty() {
        return Err(ServiceError::ValidationError(
            "supplier_id is required".to_string(),
        ));
    }
    let scope = match query.cis_id {
        Some(cis_id) => PriceScope::Customer {
            supplier_id: query.supplier_id,
            cis_id,
        },
        None => PriceScope::Supplier {
            supplier_id: query.supplier_id,
        },
    };
    let filter = GasPriceFilter {
        gas_type: query.gas_type,
        kilogram: query.kilogram,
    };
    let prices = state
        .services
        .pricing
        .list_effective_gas_prices(&scope, &filter, query.as_of)
        .await?;
    Ok(Json(ApiResponse::success(prices)))
}

#[derive(Debug, Deserialize)]
pub struct CommodityQuery {
    pub supplier_id: String,
    pub commodity_type: Option<String>,
}

pub async fn list_commodities(
    State(state): State<AppState>,
    Query(query): Query<CommodityQuery>,
) -> ApiResult<Vec<CommodityWithPrice>> {
    if query.supplier_id.is_empty() {
        return Err(ServiceError::ValidationError(
            "supplier_id is required".to_string(),
        ));
    }
    let commodities = state
        .services
        .pricing
        .list_commodities(&query.supplier_id, query.commodity_type.as_deref())
        .await?;
    Ok(Json(ApiResponse::success(commodities)))
}
