use crate::{
    db::DbPool,
    entities::customer_in_supplier::{self, Entity as CisEntity},
    entities::cylinder_mortgage::{self, Entity as CylinderMortgageEntity},
    entities::cylinder_price::{self, Entity as CylinderPriceEntity},
    entities::delivery_descriptor::{self, Entity as DeliveryDescriptorEntity},
    entities::gas_price::{self, Entity as GasPriceEntity},
    entities::cis_gas_price::{self, Entity as CisGasPriceEntity},
    entities::commodity_price::{self, Entity as CommodityPriceEntity},
    entities::order::{self, Entity as OrderEntity, ActiveModel as OrderActiveModel},
    entities::order_check::{self, Entity as OrderCheckEntity},
    entities::order_commodity_line::{self, Entity as OrderCommodityLineEntity},
    entities::order_cylinder_line::{self, Entity as OrderCylinderLineEntity},
    entities::order_gas_line::{self, Entity as OrderGasLineEntity},
    entities::order_refund::{self, Entity as OrderRefundEntity},
    entities::payup::{self, Entity as PayupEntity},
    entities::payup_work::{self, Entity as PayupWorkEntity},
    entities::supplier::Entity as SupplierEntity,
    entities::usage_fee::{self, Entity as UsageFeeEntity},
    errors::ServiceError,
    events::{Event, EventSender},
    services::pricing::{PriceResolver, PriceScope},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, SqlErr, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use validator::Validate;

pub const ORDER_STATUS_UNDELIVERED: &str = "undelivered";
pub const ORDER_STATUS_DELIVERING: &str = "delivering";
pub const ORDER_STATUS_ACCOMPLISHED: &str = "accomplished";

pub const SUB_STATUS_UNPICKED: &str = "unpicked";
pub const SUB_STATUS_PICKED: &str = "picked";
pub const SUB_STATUS_ACCOMPLISHED: &str = "accomplished";

pub const DELIVERY_TYPE_IMMEDIATE: &str = "immediate";
pub const DELIVERY_TYPE_SCHEDULED: &str = "scheduled";

/// Delivery-state label computed per row at read time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatusLabel {
    Delivering,
    Waiting,
    Scheduled,
    Accomplished,
}

impl DeliveryStatusLabel {
    /// Lower value sorts first when the list is unfiltered by status.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Delivering => 1,
            Self::Waiting => 2,
            Self::Scheduled => 3,
            Self::Accomplished => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delivering => "delivering",
            Self::Waiting => "waiting",
            Self::Scheduled => "scheduled",
            Self::Accomplished => "accomplished",
        }
    }
}

/// Derivation rule, first match wins: an order actively out with a courier
/// shows "delivering"; an undelivered one is "waiting"; a scheduled one not
/// yet in motion is "scheduled"; everything else has been completed.
pub fn delivery_status_label(
    order_status: &str,
    delivery_sub_status: &str,
    delivery_type: &str,
) -> DeliveryStatusLabel {
    if order_status == ORDER_STATUS_DELIVERING
        && (delivery_sub_status == SUB_STATUS_PICKED
            || delivery_sub_status == SUB_STATUS_ACCOMPLISHED)
    {
        DeliveryStatusLabel::Delivering
    } else if order_status == ORDER_STATUS_UNDELIVERED {
        DeliveryStatusLabel::Waiting
    } else if delivery_type == DELIVERY_TYPE_SCHEDULED {
        DeliveryStatusLabel::Scheduled
    } else {
        DeliveryStatusLabel::Accomplished
    }
}

/// SQL twin of [`delivery_status_label`], used as the primary sort key for
/// unfiltered listings. Must stay in lockstep with the Rust rule.
fn delivery_priority_expr() -> SimpleExpr {
    Expr::cust(
        "CASE WHEN orders.order_status = 'delivering' \
              AND orders.delivery_sub_status IN ('picked', 'accomplished') THEN 1 \
         WHEN orders.order_status = 'undelivered' THEN 2 \
         WHEN orders.delivery_type = 'scheduled' THEN 3 \
         ELSE 4 END",
    )
    .into()
}

/// Parses the numeric suffix of `{prefix}O_{n}`. Returns None for ids that
/// do not follow the format, so stray rows never poison allocation.
fn order_sequence(order_id: &str, prefix: &str) -> Option<i64> {
    order_id
        .strip_prefix(prefix)?
        .strip_prefix("O_")?
        .parse()
        .ok()
}

/// Max observed sequence + 1, or 1 when the supplier has no orders yet.
fn next_sequence<'a>(existing: impl Iterator<Item = &'a str>, prefix: &str) -> i64 {
    existing
        .filter_map(|id| order_sequence(id, prefix))
        .max()
        .map(|n| n + 1)
        .unwrap_or(1)
}

/// Total price floors at zero: refunds and discounts can cancel an order's
/// charges but never turn it into a credit.
fn compute_total_price(
    line_total: Decimal,
    usage_fee_total: Decimal,
    mortgage_total: Decimal,
    refund_total: Decimal,
    discount: Decimal,
    gas_discount: Decimal,
) -> Decimal {
    let total = line_total + usage_fee_total + mortgage_total - refund_total - discount - gas_discount;
    total.max(Decimal::ZERO)
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate]
    pub order_infos: OrderInfos,
    #[serde(default)]
    pub order_gas_list: Vec<GasLineRequest>,
    #[serde(default)]
    pub order_commodity_list: Vec<CommodityLineRequest>,
    #[serde(default)]
    pub order_cylinder_infos: Vec<CylinderLineRequest>,
    #[serde(default)]
    pub order_refund_list: Vec<RefundLineRequest>,
    #[serde(default)]
    pub cylinder_mortgage_list: Vec<MortgageLineRequest>,
    pub usage_fee: Option<UsageFeeRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderInfos {
    #[validate(length(min = 1, message = "supplier_id is required"))]
    pub supplier_id: String,
    #[validate(length(min = 1, message = "cis_id is required"))]
    pub cis_id: String,
    #[validate(length(min = 1, message = "contact_phone is required"))]
    pub contact_phone: String,
    pub note: Option<String>,
    /// "immediate" or "scheduled".
    pub delivery_type: String,
    pub time_slot: Option<String>,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub gas_discount: Decimal,
    pub tax_id_number: Option<String>,
    pub address_id: i64,
    pub delivery_time_stamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryDescriptorRequest {
    pub delivery_location: String,
    pub usage_name: String,
    pub floor: i32,
    pub is_elevator: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasLineRequest {
    pub gas_id: i32,
    pub numbers_of_cylinder: i32,
    pub delivery_descriptor: Option<DeliveryDescriptorRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommodityLineRequest {
    pub commodity_id: i32,
    pub numbers_of_commodity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CylinderLineRequest {
    pub cp_id: i32,
    pub numbers_of_cylinder: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundLineRequest {
    pub refund_gas_kilogram: Decimal,
    pub refund_gas_type: String,
    pub gas_price: Decimal,
    pub order_refund_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageLineRequest {
    pub take_cylinder_type: String,
    pub cylinder_specification: i32,
    pub money: Decimal,
    pub numbers_of_cylinder: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageFeeRequest {
    pub number_of_records: i32,
    pub money: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub order_id: String,
    pub order_gas_ids: Vec<i32>,
    pub order_commodity_ids: Vec<i32>,
    pub order_cylinder_ids: Vec<i32>,
    pub order_refund_ids: Vec<i32>,
    pub cylinder_mortgage_ids: Vec<i32>,
    pub usage_fee_ids: Vec<i32>,
    pub delivery_ids: Vec<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderListFilter {
    pub page: u64,
    pub size: u64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub sort_column_name: Option<String>,
    pub order_type: Option<String>,
    pub order_status: Option<String>,
    pub supplier_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: String,
    pub cis_id: String,
    pub contact_phone: String,
    pub order_status: String,
    pub delivery_sub_status: String,
    pub delivery_type: String,
    pub delivery_status: String,
    pub time_slot: Option<String>,
    pub courier_id: Option<String>,
    pub delivery_time_stamp: DateTime<Utc>,
    pub create_time_stamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub order_list: Vec<OrderSummary>,
    pub rows_count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GasLineDetail {
    pub order_gas_id: i32,
    pub gas_id: Option<i32>,
    pub gp_id: Option<i32>,
    pub cis_gp_id: Option<i32>,
    pub price: Decimal,
    pub numbers_of_cylinder: i32,
    pub delivery: Option<delivery_descriptor::Model>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommodityLineDetail {
    pub order_commodity_id: i32,
    pub commodity_id: i32,
    pub commodity_price_id: i32,
    pub price: Decimal,
    pub numbers_of_commodity: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CylinderLineDetail {
    pub order_cylinder_id: i32,
    pub cp_id: i32,
    pub customer_action_type: String,
    pub price: Decimal,
    pub numbers_of_cylinder: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PayupDetail {
    pub order_payup_id: i32,
    pub pay_way: String,
    pub payment_amount: Decimal,
    pub is_arrears_order: bool,
    pub check_number: Option<String>,
    pub create_time_stamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderDetailResponse {
    pub order_id: String,
    pub cis_id: String,
    pub customer_name: String,
    pub contact_phone: String,
    pub note: Option<String>,
    pub order_status: String,
    pub delivery_sub_status: String,
    pub delivery_type: String,
    pub delivery_status: String,
    pub time_slot: Option<String>,
    pub discount: Decimal,
    pub gas_discount: Decimal,
    pub tax_id_number: Option<String>,
    pub address_id: i64,
    pub courier_id: Option<String>,
    pub delivery_time_stamp: DateTime<Utc>,
    pub create_time_stamp: DateTime<Utc>,
    pub gas_lines: Vec<GasLineDetail>,
    pub commodity_lines: Vec<CommodityLineDetail>,
    pub cylinder_lines: Vec<CylinderLineDetail>,
    pub mortgages: Vec<cylinder_mortgage::Model>,
    pub usage_fees: Vec<usage_fee::Model>,
    pub refunds: Vec<order_refund::Model>,
    pub payups: Vec<PayupDetail>,
    pub arrears: Decimal,
    pub total_price: Decimal,
}

// Lines with all price references resolved, ready to insert. Built once per
// request so the allocation retry loop can replay the same writes.
struct ResolvedOrder {
    gas_lines: Vec<ResolvedGasLine>,
    commodity_lines: Vec<(i32, i32)>,
    descriptors: Vec<DeliveryDescriptorRequest>,
}

struct ResolvedGasLine {
    gp_id: Option<i32>,
    cis_gp_id: Option<i32>,
    numbers_of_cylinder: i32,
    descriptor_index: Option<usize>,
}

const ALLOCATION_ATTEMPTS: u32 = 3;

/// Orchestrates price resolution, order-id allocation, and the atomic
/// multi-table write for order creation, plus listing and detail reads.
#[derive(Clone)]
pub struct OrderService {
    db_pool: Arc<DbPool>,
    price_resolver: PriceResolver,
    event_sender: Option<Arc<EventSender>>,
}

impl OrderService {
    pub fn new(
        db_pool: Arc<DbPool>,
        price_resolver: PriceResolver,
        event_sender: Option<Arc<EventSender>>,
    ) -> Self {
        Self {
            db_pool,
            price_resolver,
            event_sender,
        }
    }

    #[instrument(skip(self, request), fields(supplier_id = %request.order_infos.supplier_id, cis_id = %request.order_infos.cis_id))]
    pub async fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> Result<CreateOrderResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;
        self.validate_lines(&request)?;

        let db = &*self.db_pool;
        let infos = &request.order_infos;

        let supplier = SupplierEntity::find_by_id(infos.supplier_id.clone())
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Supplier {} not found", infos.supplier_id))
            })?;
        let cis = CisEntity::find_by_id(infos.cis_id.clone())
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Customer {} not found", infos.cis_id)))?;
        if cis.supplier_id != supplier.supplier_id {
            return Err(ServiceError::ValidationError(format!(
                "Customer {} does not belong to supplier {}",
                cis.cis_id, supplier.supplier_id
            )));
        }

        let resolved = self.resolve_lines(&request).await?;

        for attempt in 1..=ALLOCATION_ATTEMPTS {
            match self
                .try_create_order(&request, &resolved, &supplier.prefix)
                .await
            {
                Ok(response) => {
                    info!(order_id = %response.order_id, attempt, "order created");
                    if let Some(sender) = &self.event_sender {
                        if let Err(e) = sender
                            .send(Event::OrderCreated {
                                order_id: response.order_id.clone(),
                                cis_id: infos.cis_id.clone(),
                            })
                            .await
                        {
                            warn!(error = %e, "failed to send order created event");
                        }
                    }
                    return Ok(response);
                }
                Err(CreateAttemptError::IdCollision(order_id)) => {
                    warn!(order_id = %order_id, attempt, "order id collision, retrying allocation");
                }
                Err(CreateAttemptError::Service(e)) => return Err(e),
            }
        }
        Err(ServiceError::AllocationConflict(format!(
            "could not allocate a unique order id for prefix {} after {} attempts",
            supplier.prefix, ALLOCATION_ATTEMPTS
        )))
    }

    fn validate_lines(&self, request: &CreateOrderRequest) -> Result<(), ServiceError> {
        if request.order_gas_list.is_empty() && request.order_commodity_list.is_empty() {
            return Err(ServiceError::ValidationError(
                "order requires at least one gas or commodity line".to_string(),
            ));
        }
        let delivery_type = request.order_infos.delivery_type.as_str();
        if delivery_type != DELIVERY_TYPE_IMMEDIATE && delivery_type != DELIVERY_TYPE_SCHEDULED {
            return Err(ServiceError::ValidationError(format!(
                "unknown delivery_type: {}",
                delivery_type
            )));
        }
        let quantities = request
            .order_gas_list
            .iter()
            .map(|l| l.numbers_of_cylinder)
            .chain(request.order_commodity_list.iter().map(|l| l.numbers_of_commodity))
            .chain(request.order_cylinder_infos.iter().map(|l| l.numbers_of_cylinder))
            .chain(request.cylinder_mortgage_list.iter().map(|l| l.numbers_of_cylinder));
        for quantity in quantities {
            if quantity <= 0 {
                return Err(ServiceError::ValidationError(
                    "line quantities must be greater than zero".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Resolves every line's price reference up front. A line whose product
    /// has no effective price surfaces as not-found before anything is
    /// written.
    async fn resolve_lines(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<ResolvedOrder, ServiceError> {
        let infos = &request.order_infos;
        let scope = PriceScope::Customer {
            supplier_id: infos.supplier_id.clone(),
            cis_id: infos.cis_id.clone(),
        };

        let mut descriptors: Vec<DeliveryDescriptorRequest> = Vec::new();
        let mut gas_lines = Vec::with_capacity(request.order_gas_list.len());
        for line in &request.order_gas_list {
            let price = self
                .price_resolver
                .resolve_gas_price(line.gas_id, &scope, None)
                .await?;
            let descriptor_index = line.delivery_descriptor.as_ref().map(|descriptor| {
                descriptors
                    .iter()
                    .position(|d| d == descriptor)
                    .unwrap_or_else(|| {
                        descriptors.push(descriptor.clone());
                        descriptors.len() - 1
                    })
            });
            gas_lines.push(ResolvedGasLine {
                gp_id: price.gp_id,
                cis_gp_id: price.cis_gp_id,
                numbers_of_cylinder: line.numbers_of_cylinder,
                descriptor_index,
            });
        }

        let mut commodity_lines = Vec::with_capacity(request.order_commodity_list.len());
        for line in &request.order_commodity_list {
            let price = self
                .price_resolver
                .resolve_commodity_price(line.commodity_id)
                .await?;
            commodity_lines.push((price.commodity_price_id, line.numbers_of_commodity));
        }

        Ok(ResolvedOrder {
            gas_lines,
            commodity_lines,
            descriptors,
        })
    }

    /// One allocation + insert attempt inside a single transaction. The scan
    /// and the insert share the transaction; the primary key on `order_id`
    /// is the last line of defense against concurrent allocators.
    async fn try_create_order(
        &self,
        request: &CreateOrderRequest,
        resolved: &ResolvedOrder,
        prefix: &str,
    ) -> Result<CreateOrderResponse, CreateAttemptError> {
        let db = &*self.db_pool;
        let infos = &request.order_infos;
        let now = Utc::now();

        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, "failed to start order creation transaction");
            CreateAttemptError::Service(ServiceError::DatabaseError(e))
        })?;

        let existing: Vec<String> = OrderEntity::find()
            .select_only()
            .column(order::Column::OrderId)
            .filter(order::Column::OrderId.starts_with(format!("{}O_", prefix)))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| CreateAttemptError::Service(ServiceError::DatabaseError(e)))?;
        let sequence = next_sequence(existing.iter().map(String::as_str), prefix);
        let order_id = format!("{}O_{}", prefix, sequence);

        // Dedupe descriptors inside the transaction so repeated identical
        // drop-offs across lines resolve to one row.
        let mut delivery_ids = Vec::with_capacity(resolved.descriptors.len());
        for descriptor in &resolved.descriptors {
            let existing_descriptor = DeliveryDescriptorEntity::find()
                .filter(delivery_descriptor::Column::CisId.eq(infos.cis_id.clone()))
                .filter(
                    delivery_descriptor::Column::DeliveryLocation
                        .eq(descriptor.delivery_location.clone()),
                )
                .filter(delivery_descriptor::Column::UsageName.eq(descriptor.usage_name.clone()))
                .filter(delivery_descriptor::Column::Floor.eq(descriptor.floor))
                .filter(delivery_descriptor::Column::IsElevator.eq(descriptor.is_elevator))
                .one(&txn)
                .await
                .map_err(|e| CreateAttemptError::Service(ServiceError::DatabaseError(e)))?;
            let delivery_id = match existing_descriptor {
                Some(model) => model.delivery_id,
                None => {
                    let inserted = delivery_descriptor::ActiveModel {
                        cis_id: Set(infos.cis_id.clone()),
                        delivery_location: Set(descriptor.delivery_location.clone()),
                        usage_name: Set(descriptor.usage_name.clone()),
                        floor: Set(descriptor.floor),
                        is_elevator: Set(descriptor.is_elevator),
                        ..Default::default()
                    }
                    .insert(&txn)
                    .await
                    .map_err(|e| CreateAttemptError::Service(ServiceError::TransactionFailed(e.to_string())))?;
                    inserted.delivery_id
                }
            };
            delivery_ids.push(delivery_id);
        }

        let header = OrderActiveModel {
            order_id: Set(order_id.clone()),
            cis_id: Set(infos.cis_id.clone()),
            contact_phone: Set(infos.contact_phone.clone()),
            note: Set(infos.note.clone()),
            order_status: Set(ORDER_STATUS_UNDELIVERED.to_string()),
            delivery_sub_status: Set(SUB_STATUS_UNPICKED.to_string()),
            delivery_type: Set(infos.delivery_type.clone()),
            time_slot: Set(infos.time_slot.clone()),
            discount: Set(infos.discount),
            gas_discount: Set(infos.gas_discount),
            tax_id_number: Set(infos.tax_id_number.clone()),
            address_id: Set(infos.address_id),
            courier_id: Set(None),
            delivery_time_stamp: Set(infos.delivery_time_stamp),
            create_time_stamp: Set(now),
        };
        if let Err(e) = header.insert(&txn).await {
            let collided = matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)));
            if let Err(rollback_err) = txn.rollback().await {
                error!(error = %rollback_err, "rollback failed after header insert error");
            }
            return Err(if collided {
                CreateAttemptError::IdCollision(order_id)
            } else {
                CreateAttemptError::Service(ServiceError::TransactionFailed(e.to_string()))
            });
        }

        let result = self
            .insert_children(&txn, request, resolved, &order_id, &delivery_ids, now)
            .await;
        let mut response = match result {
            Ok(response) => response,
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    error!(error = %rollback_err, "rollback failed after child insert error");
                }
                return Err(CreateAttemptError::Service(e));
            }
        };

        if let Err(e) = txn.commit().await {
            let collided = matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)));
            return Err(if collided {
                CreateAttemptError::IdCollision(order_id)
            } else {
                CreateAttemptError::Service(ServiceError::TransactionFailed(e.to_string()))
            });
        }
        response.delivery_ids = delivery_ids;
        Ok(response)
    }

    async fn insert_children(
        &self,
        txn: &sea_orm::DatabaseTransaction,
        request: &CreateOrderRequest,
        resolved: &ResolvedOrder,
        order_id: &str,
        delivery_ids: &[i32],
        now: DateTime<Utc>,
    ) -> Result<CreateOrderResponse, ServiceError> {
        let infos = &request.order_infos;
        let mut response = CreateOrderResponse {
            order_id: order_id.to_string(),
            order_gas_ids: Vec::new(),
            order_commodity_ids: Vec::new(),
            order_cylinder_ids: Vec::new(),
            order_refund_ids: Vec::new(),
            cylinder_mortgage_ids: Vec::new(),
            usage_fee_ids: Vec::new(),
            delivery_ids: Vec::new(),
        };

        for line in &resolved.gas_lines {
            let inserted = order_gas_line::ActiveModel {
                order_id: Set(order_id.to_string()),
                gp_id: Set(line.gp_id),
                cis_gp_id: Set(line.cis_gp_id),
                numbers_of_cylinder: Set(line.numbers_of_cylinder),
                delivery_id: Set(line.descriptor_index.map(|i| delivery_ids[i])),
                ..Default::default()
            }
            .insert(txn)
            .await
            .map_err(|e| ServiceError::TransactionFailed(e.to_string()))?;
            response.order_gas_ids.push(inserted.order_gas_id);
        }

        for (commodity_price_id, quantity) in &resolved.commodity_lines {
            let inserted = order_commodity_line::ActiveModel {
                order_id: Set(order_id.to_string()),
                commodity_price_id: Set(*commodity_price_id),
                numbers_of_commodity: Set(*quantity),
                ..Default::default()
            }
            .insert(txn)
            .await
            .map_err(|e| ServiceError::TransactionFailed(e.to_string()))?;
            response.order_commodity_ids.push(inserted.order_commodity_id);
        }

        for line in &request.order_cylinder_infos {
            let inserted = order_cylinder_line::ActiveModel {
                order_id: Set(order_id.to_string()),
                cp_id: Set(line.cp_id),
                numbers_of_cylinder: Set(line.numbers_of_cylinder),
                ..Default::default()
            }
            .insert(txn)
            .await
            .map_err(|e| ServiceError::TransactionFailed(e.to_string()))?;
            response.order_cylinder_ids.push(inserted.order_cylinder_id);
        }

        for line in &request.order_refund_list {
            let inserted = order_refund::ActiveModel {
                order_id: Set(order_id.to_string()),
                refund_gas_kilogram: Set(line.refund_gas_kilogram),
                refund_gas_type: Set(line.refund_gas_type.clone()),
                gas_price: Set(line.gas_price),
                order_refund_type: Set(line.order_refund_type.clone()),
                ..Default::default()
            }
            .insert(txn)
            .await
            .map_err(|e| ServiceError::TransactionFailed(e.to_string()))?;
            response.order_refund_ids.push(inserted.order_refund_id);
        }

        for line in &request.cylinder_mortgage_list {
            let inserted = cylinder_mortgage::ActiveModel {
                cis_id: Set(infos.cis_id.clone()),
                order_id: Set(order_id.to_string()),
                take_cylinder_type: Set(line.take_cylinder_type.clone()),
                cylinder_specification: Set(line.cylinder_specification),
                money: Set(line.money),
                numbers_of_cylinder: Set(line.numbers_of_cylinder),
                create_time_stamp: Set(now),
                ..Default::default()
            }
            .insert(txn)
            .await
            .map_err(|e| ServiceError::TransactionFailed(e.to_string()))?;
            response
                .cylinder_mortgage_ids
                .push(inserted.cis_cylinder_mortgage_id);
        }

        if let Some(fee) = &request.usage_fee {
            let inserted = usage_fee::ActiveModel {
                order_id: Set(order_id.to_string()),
                number_of_records: Set(fee.number_of_records),
                money: Set(fee.money),
                create_time_stamp: Set(now),
                ..Default::default()
            }
            .insert(txn)
            .await
            .map_err(|e| ServiceError::TransactionFailed(e.to_string()))?;
            response.usage_fee_ids.push(inserted.order_usage_fee_id);
        }

        Ok(response)
    }

    #[instrument(skip(self))]
    pub async fn get_order_list(
        &self,
        filter: OrderListFilter,
    ) -> Result<OrderListResponse, ServiceError> {
        let db = &*self.db_pool;
        let page = filter.page.max(1);
        let size = filter.size.clamp(1, 200);

        let mut query = OrderEntity::find();
        if let Some(status) = &filter.order_status {
            query = query.filter(order::Column::OrderStatus.eq(status));
        }
        if let Some(supplier_id) = &filter.supplier_id {
            query = query
                .join(JoinType::InnerJoin, order::Relation::CustomerInSupplier.def())
                .filter(customer_in_supplier::Column::SupplierId.eq(supplier_id));
        }
        if let Some(first) = filter.first_date {
            let from = first.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
            if let Some(from) = from {
                query = query.filter(order::Column::DeliveryTimeStamp.gte(from));
            }
        }
        if let Some(last) = filter.last_date {
            let to = last
                .succ_opt()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc());
            if let Some(to) = to {
                query = query.filter(order::Column::DeliveryTimeStamp.lt(to));
            }
        }

        // Derived delivery priority leads when no status filter narrows the
        // list; the requested column is the tiebreak.
        if filter.order_status.is_none() {
            query = query.order_by(delivery_priority_expr(), Order::Asc);
        }
        let sort_column = sort_column(filter.sort_column_name.as_deref());
        let direction = match filter.order_type.as_deref() {
            Some(dir) if dir.eq_ignore_ascii_case("asc") => Order::Asc,
            _ => Order::Desc,
        };
        query = query.order_by(sort_column, direction);

        let paginator = query.paginate(db, size);
        let rows_count = paginator.num_items().await?;
        let rows = paginator.fetch_page(page - 1).await?;

        let order_list = rows
            .into_iter()
            .map(|row| {
                let label = delivery_status_label(
                    &row.order_status,
                    &row.delivery_sub_status,
                    &row.delivery_type,
                );
                OrderSummary {
                    order_id: row.order_id,
                    cis_id: row.cis_id,
                    contact_phone: row.contact_phone,
                    order_status: row.order_status,
                    delivery_sub_status: row.delivery_sub_status,
                    delivery_type: row.delivery_type,
                    delivery_status: label.as_str().to_string(),
                    time_slot: row.time_slot,
                    courier_id: row.courier_id,
                    delivery_time_stamp: row.delivery_time_stamp,
                    create_time_stamp: row.create_time_stamp,
                }
            })
            .collect();

        Ok(OrderListResponse {
            order_list,
            rows_count,
        })
    }

    #[instrument(skip(self))]
    pub async fn get_order_detail(
        &self,
        order_id: &str,
    ) -> Result<OrderDetailResponse, ServiceError> {
        let db = &*self.db_pool;

        let order = OrderEntity::find_by_id(order_id.to_string())
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Order {} not found", order_id)))?;
        let cis = CisEntity::find_by_id(order.cis_id.clone())
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Customer {} not found", order.cis_id))
            })?;

        let gas_lines = OrderGasLineEntity::find()
            .filter(order_gas_line::Column::OrderId.eq(order_id))
            .all(db)
            .await?;
        let gp_ids: Vec<i32> = gas_lines.iter().filter_map(|l| l.gp_id).collect();
        let cis_gp_ids: Vec<i32> = gas_lines.iter().filter_map(|l| l.cis_gp_id).collect();
        let delivery_line_ids: Vec<i32> = gas_lines.iter().filter_map(|l| l.delivery_id).collect();

        let gp_rows: HashMap<i32, gas_price::Model> = if gp_ids.is_empty() {
            HashMap::new()
        } else {
            GasPriceEntity::find()
                .filter(gas_price::Column::GpId.is_in(gp_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|r| (r.gp_id, r))
                .collect()
        };
        let cis_gp_rows: HashMap<i32, cis_gas_price::Model> = if cis_gp_ids.is_empty() {
            HashMap::new()
        } else {
            CisGasPriceEntity::find()
                .filter(cis_gas_price::Column::CisGpId.is_in(cis_gp_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|r| (r.cis_gp_id, r))
                .collect()
        };
        let descriptors: HashMap<i32, delivery_descriptor::Model> = if delivery_line_ids.is_empty()
        {
            HashMap::new()
        } else {
            DeliveryDescriptorEntity::find()
                .filter(delivery_descriptor::Column::DeliveryId.is_in(delivery_line_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|r| (r.delivery_id, r))
                .collect()
        };

        let commodity_lines = OrderCommodityLineEntity::find()
            .filter(order_commodity_line::Column::OrderId.eq(order_id))
            .all(db)
            .await?;
        let commodity_price_ids: Vec<i32> =
            commodity_lines.iter().map(|l| l.commodity_price_id).collect();
        let commodity_prices: HashMap<i32, commodity_price::Model> =
            if commodity_price_ids.is_empty() {
                HashMap::new()
            } else {
                CommodityPriceEntity::find()
                    .filter(commodity_price::Column::CommodityPriceId.is_in(commodity_price_ids))
                    .all(db)
                    .await?
                    .into_iter()
                    .map(|r| (r.commodity_price_id, r))
                    .collect()
            };

        let cylinder_lines = OrderCylinderLineEntity::find()
            .filter(order_cylinder_line::Column::OrderId.eq(order_id))
            .all(db)
            .await?;
        let cp_ids: Vec<i32> = cylinder_lines.iter().map(|l| l.cp_id).collect();
        let cylinder_prices: HashMap<i32, cylinder_price::Model> = if cp_ids.is_empty() {
            HashMap::new()
        } else {
            CylinderPriceEntity::find()
                .filter(cylinder_price::Column::CpId.is_in(cp_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|r| (r.cp_id, r))
                .collect()
        };

        let mortgages = CylinderMortgageEntity::find()
            .filter(cylinder_mortgage::Column::OrderId.eq(order_id))
            .all(db)
            .await?;
        let usage_fees = UsageFeeEntity::find()
            .filter(usage_fee::Column::OrderId.eq(order_id))
            .all(db)
            .await?;
        let refunds = OrderRefundEntity::find()
            .filter(order_refund::Column::OrderId.eq(order_id))
            .all(db)
            .await?;

        let payup_rows = PayupEntity::find()
            .filter(payup::Column::OrderId.eq(order_id))
            .order_by_asc(payup::Column::OrderPayupId)
            .all(db)
            .await?;
        let work_ids: Vec<i32> = payup_rows.iter().map(|p| p.order_payup_work_id).collect();
        let works: HashMap<i32, payup_work::Model> = if work_ids.is_empty() {
            HashMap::new()
        } else {
            PayupWorkEntity::find()
                .filter(payup_work::Column::OrderPayupWorkId.is_in(work_ids.clone()))
                .all(db)
                .await?
                .into_iter()
                .map(|r| (r.order_payup_work_id, r))
                .collect()
        };
        let checks: HashMap<i32, order_check::Model> = if work_ids.is_empty() {
            HashMap::new()
        } else {
            OrderCheckEntity::find()
                .filter(order_check::Column::OrderPayupWorkId.is_in(work_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|r| (r.order_payup_work_id, r))
                .collect()
        };

        let mut line_total = Decimal::ZERO;
        let mut gas_details = Vec::with_capacity(gas_lines.len());
        for line in gas_lines {
            let (price, gas_id) = match (line.gp_id, line.cis_gp_id) {
                (Some(gp_id), _) => {
                    let row = gp_rows.get(&gp_id).ok_or_else(|| {
                        ServiceError::InternalError(format!("gas price {} missing", gp_id))
                    })?;
                    (row.price, Some(row.gas_id))
                }
                (None, Some(cis_gp_id)) => {
                    let row = cis_gp_rows.get(&cis_gp_id).ok_or_else(|| {
                        ServiceError::InternalError(format!(
                            "customer gas price {} missing",
                            cis_gp_id
                        ))
                    })?;
                    (row.price, Some(row.gas_id))
                }
                (None, None) => (Decimal::ZERO, None),
            };
            line_total += price * Decimal::from(line.numbers_of_cylinder);
            gas_details.push(GasLineDetail {
                order_gas_id: line.order_gas_id,
                gas_id,
                gp_id: line.gp_id,
                cis_gp_id: line.cis_gp_id,
                price,
                numbers_of_cylinder: line.numbers_of_cylinder,
                delivery: line.delivery_id.and_then(|id| descriptors.get(&id).cloned()),
            });
        }

        let mut commodity_details = Vec::with_capacity(commodity_lines.len());
        for line in commodity_lines {
            let row = commodity_prices.get(&line.commodity_price_id).ok_or_else(|| {
                ServiceError::InternalError(format!(
                    "commodity price {} missing",
                    line.commodity_price_id
                ))
            })?;
            line_total += row.price * Decimal::from(line.numbers_of_commodity);
            commodity_details.push(CommodityLineDetail {
                order_commodity_id: line.order_commodity_id,
                commodity_id: row.commodity_id,
                commodity_price_id: line.commodity_price_id,
                price: row.price,
                numbers_of_commodity: line.numbers_of_commodity,
            });
        }

        let mut cylinder_details = Vec::with_capacity(cylinder_lines.len());
        for line in cylinder_lines {
            let row = cylinder_prices.get(&line.cp_id).ok_or_else(|| {
                ServiceError::InternalError(format!("cylinder price {} missing", line.cp_id))
            })?;
            line_total += row.price * Decimal::from(line.numbers_of_cylinder);
            cylinder_details.push(CylinderLineDetail {
                order_cylinder_id: line.order_cylinder_id,
                cp_id: line.cp_id,
                customer_action_type: row.customer_action_type.clone(),
                price: row.price,
                numbers_of_cylinder: line.numbers_of_cylinder,
            });
        }

        let usage_fee_total: Decimal = usage_fees.iter().map(|f| f.money).sum();
        let mortgage_total: Decimal = mortgages
            .iter()
            .map(|m| m.money * Decimal::from(m.numbers_of_cylinder))
            .sum();
        let refund_total: Decimal = refunds
            .iter()
            .map(|r| r.gas_price * r.refund_gas_kilogram)
            .sum();
        let total_price = compute_total_price(
            line_total,
            usage_fee_total,
            mortgage_total,
            refund_total,
            order.discount,
            order.gas_discount,
        );

        let payups = payup_rows
            .into_iter()
            .map(|p| {
                let work = works.get(&p.order_payup_work_id);
                PayupDetail {
                    order_payup_id: p.order_payup_id,
                    pay_way: work.map(|w| w.pay_way.clone()).unwrap_or_default(),
                    payment_amount: p.payment_amount,
                    is_arrears_order: p.is_arrears_order,
                    check_number: checks
                        .get(&p.order_payup_work_id)
                        .map(|c| c.check_number.clone()),
                    create_time_stamp: work
                        .map(|w| w.create_time_stamp)
                        .unwrap_or(order.create_time_stamp),
                }
            })
            .collect();

        let label = delivery_status_label(
            &order.order_status,
            &order.delivery_sub_status,
            &order.delivery_type,
        );
        Ok(OrderDetailResponse {
            order_id: order.order_id,
            cis_id: order.cis_id,
            customer_name: cis.customer_name,
            contact_phone: order.contact_phone,
            note: order.note,
            order_status: order.order_status,
            delivery_sub_status: order.delivery_sub_status,
            delivery_type: order.delivery_type,
            delivery_status: label.as_str().to_string(),
            time_slot: order.time_slot,
            discount: order.discount,
            gas_discount: order.gas_discount,
            tax_id_number: order.tax_id_number,
            address_id: order.address_id,
            courier_id: order.courier_id,
            delivery_time_stamp: order.delivery_time_stamp,
            create_time_stamp: order.create_time_stamp,
            gas_lines: gas_details,
            commodity_lines: commodity_details,
            cylinder_lines: cylinder_details,
            mortgages,
            usage_fees,
            refunds,
            payups,
            arrears: cis.init_arrears,
            total_price,
        })
    }
}

enum CreateAttemptError {
    /// The generated order id already existed; the caller re-allocates.
    IdCollision(String),
    Service(ServiceError),
}

/// Sort columns are allow-listed; anything else silently falls back to the
/// delivery timestamp instead of erroring.
fn sort_column(name: Option<&str>) -> order::Column {
    match name {
        Some("create_time_stamp") => order::Column::CreateTimeStamp,
        Some("order_id") => order::Column::OrderId,
        Some("order_status") => order::Column::OrderStatus,
        _ => order::Column::DeliveryTimeStamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sequence_parsing_ignores_foreign_ids() {
        assert_eq!(order_sequence("GSO_12", "GS"), Some(12));
        assert_eq!(order_sequence("GSO_1", "GS"), Some(1));
        assert_eq!(order_sequence("GXO_5", "GS"), None);
        assert_eq!(order_sequence("GSO_", "GS"), None);
        assert_eq!(order_sequence("GSO_abc", "GS"), None);
        assert_eq!(order_sequence("GS_7", "GS"), None);
    }

    #[test]
    fn next_sequence_starts_at_one() {
        assert_eq!(next_sequence(std::iter::empty::<&str>(), "GS"), 1);
    }

    #[test]
    fn next_sequence_increments_past_max() {
        let existing = ["GSO_1", "GSO_3", "GSO_2", "GXO_99", "GSO_bad"];
        assert_eq!(next_sequence(existing.iter().copied(), "GS"), 4);
    }

    #[test]
    fn label_priority_order() {
        assert_eq!(
            delivery_status_label("delivering", "picked", "immediate"),
            DeliveryStatusLabel::Delivering
        );
        assert_eq!(
            delivery_status_label("delivering", "accomplished", "scheduled"),
            DeliveryStatusLabel::Delivering
        );
        // Marked delivering but unpicked matches no active rule and falls
        // through to the terminal bucket.
        assert_eq!(
            delivery_status_label("delivering", "unpicked", "immediate"),
            DeliveryStatusLabel::Accomplished
        );
        assert_eq!(
            delivery_status_label("undelivered", "unpicked", "immediate"),
            DeliveryStatusLabel::Waiting
        );
        assert_eq!(
            delivery_status_label("accomplished", "unpicked", "scheduled"),
            DeliveryStatusLabel::Scheduled
        );
        assert_eq!(
            delivery_status_label("accomplished", "accomplished", "immediate"),
            DeliveryStatusLabel::Accomplished
        );

        assert!(DeliveryStatusLabel::Delivering.priority() < DeliveryStatusLabel::Waiting.priority());
        assert!(DeliveryStatusLabel::Waiting.priority() < DeliveryStatusLabel::Scheduled.priority());
        assert!(
            DeliveryStatusLabel::Scheduled.priority() < DeliveryStatusLabel::Accomplished.priority()
        );
    }

    #[test]
    fn total_price_sums_all_charge_kinds() {
        let total = compute_total_price(
            dec!(1000),
            dec!(50),
            dec!(200),
            dec!(100),
            dec!(30),
            dec!(20),
        );
        assert_eq!(total, dec!(1100));
    }

    #[test]
    fn total_price_floors_at_zero() {
        let total = compute_total_price(
            dec!(100),
            Decimal::ZERO,
            Decimal::ZERO,
            dec!(500),
            dec!(50),
            Decimal::ZERO,
        );
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn unknown_sort_column_falls_back_to_delivery_time() {
        assert!(matches!(
            sort_column(Some("password")),
            order::Column::DeliveryTimeStamp
        ));
        assert!(matches!(sort_column(None), order::Column::DeliveryTimeStamp));
        assert!(matches!(sort_column(Some("order_id")), order::Column::OrderId));
    }

    proptest::proptest! {
        #[test]
        fn formatted_ids_parse_back_to_their_sequence(
            prefix in "[A-Z]{1,4}",
            n in 1i64..1_000_000,
        ) {
            let order_id = format!("{prefix}O_{n}");
            proptest::prop_assert_eq!(order_sequence(&order_id, &prefix), Some(n));
        }
    }
}
