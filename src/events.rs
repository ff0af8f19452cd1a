use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Events emitted by the order and payment services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    OrderCreated {
        order_id: String,
        cis_id: String,
    },
    PaymentApplied {
        order_id: String,
        methods: Vec<String>,
    },
    WalletDebited {
        cis_id: String,
        order_id: String,
        amount: rust_decimal::Decimal,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously. Delivery is best-effort; a full or
    /// closed channel is reported to the caller as a string error.
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Background consumer that logs every event. Runs until all senders drop.
pub async fn process_events(mut receiver: mpsc::Receiver<Event>) {
    while let Some(event) = receiver.recv().await {
        match &event {
            Event::OrderCreated { order_id, cis_id } => {
                info!(order_id = %order_id, cis_id = %cis_id, "event: order created");
            }
            Event::PaymentApplied { order_id, methods } => {
                info!(order_id = %order_id, methods = ?methods, "event: payment applied");
            }
            Event::WalletDebited {
                cis_id,
                order_id,
                amount,
            } => {
                info!(cis_id = %cis_id, order_id = %order_id, amount = %amount, "event: wallet debited");
            }
        }
    }
    warn!("event channel closed; processor exiting");
}
