use crate::{
    db::DbPool,
    entities::order::{self, Entity as OrderEntity},
    entities::order_check,
    entities::order_refund::{self, Entity as OrderRefundEntity},
    entities::payup,
    entities::payup_work,
    entities::wallet_ledger_entry,
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub const PAY_WAY_CASH: &str = "cash";
pub const PAY_WAY_WALLET: &str = "wallet";
pub const PAY_WAY_CHECK: &str = "check";

/// Wallet entries written here are always payment debits.
pub const FLOW_TYPE_PAYMENT: &str = "payment";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyPaymentRequest {
    pub payment_amount_infos: PaymentAmountInfos,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentAmountInfos {
    pub order_id: String,
    /// Cash settlement amount.
    pub order_payment_amount: Option<Decimal>,
    /// Stored-value wallet settlement amount.
    pub cis_payment_amount: Option<Decimal>,
    pub check_payment_amount: Option<Decimal>,
    pub check_infos: Option<CheckInfos>,
    /// When present, overwrites the order header's discount.
    pub discount: Option<Decimal>,
    #[serde(default)]
    pub order_refund_list: Vec<RefundDiffRequest>,
    /// Additional settlement applied to prior arrears, independent of the
    /// current order's charges.
    pub arrears_payup_amount: Option<ArrearsPayupAmount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInfos {
    pub check_number: String,
}

/// Refund rows carrying an id are updated in place; rows without one are
/// inserted as new refunds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundDiffRequest {
    pub order_refund_id: Option<i32>,
    pub refund_gas_kilogram: Decimal,
    pub refund_gas_type: String,
    pub gas_price: Decimal,
    pub order_refund_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrearsPayupAmount {
    pub order_payment_amount: Option<Decimal>,
    pub cis_payment_amount: Option<Decimal>,
    pub check_payment_amount: Option<Decimal>,
    pub check_infos: Option<CheckInfos>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyPaymentResponse {
    pub message: String,
}

struct MethodAmounts<'a> {
    cash: Option<Decimal>,
    wallet: Option<Decimal>,
    check: Option<Decimal>,
    check_number: Option<&'a str>,
}

fn positive(amount: Option<Decimal>) -> Option<Decimal> {
    amount.filter(|a| *a > Decimal::ZERO)
}

/// Applies a settlement to an existing order: refund adjustments, one
/// PayupWork/Payup pair per method used, wallet ledger debits, and check
/// detail rows, all in one transaction. Submitted amounts are recorded
/// as-is; no outstanding-balance check is performed.
#[derive(Clone)]
pub struct PaymentService {
    db_pool: Arc<DbPool>,
    event_sender: Option<Arc<EventSender>>,
}

impl PaymentService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Option<Arc<EventSender>>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    #[instrument(skip(self, request), fields(order_id = %request.payment_amount_infos.order_id))]
    pub async fn apply_payment(
        &self,
        request: ApplyPaymentRequest,
    ) -> Result<ApplyPaymentResponse, ServiceError> {
        let db = &*self.db_pool;
        let infos = &request.payment_amount_infos;
        let now = Utc::now();

        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, "failed to start payment transaction");
            ServiceError::DatabaseError(e)
        })?;

        let result = self.apply_payment_in_txn(&txn, infos, now).await;
        let (methods, wallet_debits) = match result {
            Ok(applied) => applied,
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    error!(error = %rollback_err, "rollback failed after payment error");
                }
                return Err(e);
            }
        };
        txn.commit()
            .await
            .map_err(|e| ServiceError::TransactionFailed(e.to_string()))?;

        info!(order_id = %infos.order_id, methods = ?methods, "payment applied");
        if let Some(sender) = &self.event_sender {
            if let Err(e) = sender
                .send(Event::PaymentApplied {
                    order_id: infos.order_id.clone(),
                    methods: methods.clone(),
                })
                .await
            {
                warn!(error = %e, "failed to send payment applied event");
            }
            for (cis_id, amount) in wallet_debits {
                if let Err(e) = sender
                    .send(Event::WalletDebited {
                        cis_id,
                        order_id: infos.order_id.clone(),
                        amount,
                    })
                    .await
                {
                    warn!(error = %e, "failed to send wallet debited event");
                }
            }
        }

        Ok(ApplyPaymentResponse {
            message: "payment applied".to_string(),
        })
    }

    async fn apply_payment_in_txn(
        &self,
        txn: &DatabaseTransaction,
        infos: &PaymentAmountInfos,
        now: DateTime<Utc>,
    ) -> Result<(Vec<String>, Vec<(String, Decimal)>), ServiceError> {
        let order = OrderEntity::find_by_id(infos.order_id.clone())
            .one(txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Order {} not found", infos.order_id)))?;

        for refund in &infos.order_refund_list {
            match refund.order_refund_id {
                Some(id) => {
                    let existing = OrderRefundEntity::find_by_id(id)
                        .filter(order_refund::Column::OrderId.eq(order.order_id.clone()))
                        .one(txn)
                        .await?
                        .ok_or_else(|| {
                            ServiceError::NotFound(format!(
                                "Refund {} not found on order {}",
                                id, order.order_id
                            ))
                        })?;
                    let mut active: order_refund::ActiveModel = existing.into();
                    active.refund_gas_kilogram = Set(refund.refund_gas_kilogram);
                    active.refund_gas_type = Set(refund.refund_gas_type.clone());
                    active.gas_price = Set(refund.gas_price);
                    active.order_refund_type = Set(refund.order_refund_type.clone());
                    active
                        .update(txn)
                        .await
                        .map_err(|e| ServiceError::TransactionFailed(e.to_string()))?;
                }
                None => {
                    order_refund::ActiveModel {
                        order_id: Set(order.order_id.clone()),
                        refund_gas_kilogram: Set(refund.refund_gas_kilogram),
                        refund_gas_type: Set(refund.refund_gas_type.clone()),
                        gas_price: Set(refund.gas_price),
                        order_refund_type: Set(refund.order_refund_type.clone()),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                    .map_err(|e| ServiceError::TransactionFailed(e.to_string()))?;
                }
            }
        }

        let mut methods = Vec::new();
        let mut wallet_debits = Vec::new();

        let current = MethodAmounts {
            cash: positive(infos.order_payment_amount),
            wallet: positive(infos.cis_payment_amount),
            check: positive(infos.check_payment_amount),
            check_number: infos.check_infos.as_ref().map(|c| c.check_number.as_str()),
        };
        self.settle_methods(txn, &order, &current, false, now, &mut methods, &mut wallet_debits)
            .await?;

        if let Some(arrears) = &infos.arrears_payup_amount {
            let amounts = MethodAmounts {
                cash: positive(arrears.order_payment_amount),
                wallet: positive(arrears.cis_payment_amount),
                check: positive(arrears.check_payment_amount),
                check_number: arrears.check_infos.as_ref().map(|c| c.check_number.as_str()),
            };
            self.settle_methods(txn, &order, &amounts, true, now, &mut methods, &mut wallet_debits)
                .await?;
        }

        if let Some(discount) = infos.discount {
            let mut active: order::ActiveModel = order.clone().into();
            active.discount = Set(discount);
            active
                .update(txn)
                .await
                .map_err(|e| ServiceError::TransactionFailed(e.to_string()))?;
        }

        Ok((methods, wallet_debits))
    }

    async fn settle_methods(
        &self,
        txn: &DatabaseTransaction,
        order: &order::Model,
        amounts: &MethodAmounts<'_>,
        is_arrears: bool,
        now: DateTime<Utc>,
        methods: &mut Vec<String>,
        wallet_debits: &mut Vec<(String, Decimal)>,
    ) -> Result<(), ServiceError> {
        if let Some(amount) = amounts.cash {
            self.insert_payup(txn, order, PAY_WAY_CASH, amount, is_arrears, now)
                .await?;
            methods.push(PAY_WAY_CASH.to_string());
        }

        if let Some(amount) = amounts.wallet {
            self.insert_payup(txn, order, PAY_WAY_WALLET, amount, is_arrears, now)
                .await?;
            // The ledger is append-only; the balance is the sum of entries.
            wallet_ledger_entry::ActiveModel {
                cis_id: Set(order.cis_id.clone()),
                order_id: Set(order.order_id.clone()),
                flow_type: Set(FLOW_TYPE_PAYMENT.to_string()),
                money: Set(-amount),
                create_time_stamp: Set(now),
                ..Default::default()
            }
            .insert(txn)
            .await
            .map_err(|e| ServiceError::TransactionFailed(e.to_string()))?;
            methods.push(PAY_WAY_WALLET.to_string());
            wallet_debits.push((order.cis_id.clone(), amount));
        }

        if let Some(amount) = amounts.check {
            let work_id = self
                .insert_payup(txn, order, PAY_WAY_CHECK, amount, is_arrears, now)
                .await?;
            if let Some(check_number) = amounts.check_number {
                order_check::ActiveModel {
                    order_payup_work_id: Set(work_id),
                    check_number: Set(check_number.to_string()),
                    ..Default::default()
                }
                .insert(txn)
                .await
                .map_err(|e| ServiceError::TransactionFailed(e.to_string()))?;
            }
            methods.push(PAY_WAY_CHECK.to_string());
        }

        Ok(())
    }

    async fn insert_payup(
        &self,
        txn: &DatabaseTransaction,
        order: &order::Model,
        pay_way: &str,
        amount: Decimal,
        is_arrears: bool,
        now: DateTime<Utc>,
    ) -> Result<i32, ServiceError> {
        let work = payup_work::ActiveModel {
            pay_way: Set(pay_way.to_string()),
            payment_amount: Set(amount),
            create_time_stamp: Set(now),
            ..Default::default()
        }
        .insert(txn)
        .await
        .map_err(|e| ServiceError::TransactionFailed(e.to_string()))?;

        payup::ActiveModel {
            order_id: Set(order.order_id.clone()),
            order_payup_work_id: Set(work.order_payup_work_id),
            payment_amount: Set(amount),
            is_arrears_order: Set(is_arrears),
            ..Default::default()
        }
        .insert(txn)
        .await
        .map_err(|e| ServiceError::TransactionFailed(e.to_string()))?;

        Ok(work.order_payup_work_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_and_negative_amounts_are_skipped() {
        assert_eq!(positive(Some(dec!(500))), Some(dec!(500)));
        assert_eq!(positive(Some(Decimal::ZERO)), None);
        assert_eq!(positive(Some(dec!(-10))), None);
        assert_eq!(positive(None), None);
    }
}
