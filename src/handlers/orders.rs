use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::services::orders::{
    CreateOrderRequest, CreateOrderResponse, OrderDetailResponse, OrderListFilter,
    OrderListResponse,
};
use crate::{ApiJson, ApiResponse, ApiResult, AppState};

fn default_page() -> u64 {
    1
}
fn default_size() -> u64 {
    20
}

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub sort_column_name: Option<String>,
    pub order_type: Option<String>,
    pub order_status: Option<String>,
    pub supplier_id: Option<String>,
}

pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> ApiResult<OrderListResponse> {
    let filter = OrderListFilter {
        page: query.page,
        size: query.size,
        first_date: query.first_date,
        last_date: query.last_date,
        sort_column_name: query.sort_column_name,
        order_type: query.order_type,
        order_status: query.order_status,
        supplier_id: query.supplier_id,
    };
    let result = state.services.orders.get_order_list(filter).await?;
    Ok(Json(ApiResponse::success(result)))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> ApiResult<OrderDetailResponse> {
    let detail = state.services.orders.get_order_detail(&order_id).await?;
    Ok(Json(ApiResponse::success(detail)))
}

pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateOrderRequest>,
) -> ApiResult<CreateOrderResponse> {
    let result = state.services.orders.create_order(request).await?;
    Ok(Json(ApiResponse::success(result)))
}
