use axum::{extract::State, response::Json};

use crate::services::payments::{ApplyPaymentRequest, ApplyPaymentResponse};
use crate::{ApiJson, ApiResponse, ApiResult, AppState};

pub async fn apply_payment(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ApplyPaymentRequest>,
) -> ApiResult<ApplyPaymentResponse> {
    let result = state.services.payments.apply_payment(request).await?;
    Ok(Json(ApiResponse::success(result)))
}
