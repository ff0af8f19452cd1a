use crate::{
    db::DbPool,
    events::EventSender,
    services::{orders::OrderService, payments::PaymentService, pricing::PriceResolver},
};
use std::sync::Arc;

pub mod orders;
pub mod payments;
pub mod pricing;

/// Service container shared through the router state.
#[derive(Clone)]
pub struct AppServices {
    pub orders: Arc<OrderService>,
    pub payments: Arc<PaymentService>,
    pub pricing: Arc<PriceResolver>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        let pricing = PriceResolver::new(db_pool.clone());
        let orders = Arc::new(OrderService::new(
            db_pool.clone(),
            pricing.clone(),
            Some(event_sender.clone()),
        ));
        let payments = Arc::new(PaymentService::new(db_pool, Some(event_sender)));
        Self {
            orders,
            payments,
            pricing: Arc::new(pricing),
        }
    }
}
