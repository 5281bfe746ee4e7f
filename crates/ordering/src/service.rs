//! Order lifecycle service
//!
//! Create orders from parsed chat messages and move them through the
//! status graph. Notification delivery is best-effort: a failed send is
//! logged and never rolls back the order mutation that triggered it.
//! Storage errors pass through untouched so the caller can decide on
//! retry.

use crate::messages;
use chrono::Utc;
use snacktrack_core::{
    Notifier, Order, OrderError, OrderFilters, OrderItem, OrderStatus, OrderStore,
};
use snacktrack_parser::ParsedOrder;
use std::sync::Arc;
use uuid::Uuid;

pub struct OrderService {
    store: Arc<dyn OrderStore>,
    notifier: Arc<dyn Notifier>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Persist a new order built from a parsed chat message and confirm
    /// it to the customer.
    ///
    /// `customer_id` is the messaging-platform sender id; it doubles as
    /// the notification recipient. Whether a parse with diagnostics is
    /// submitted at all is the chat flow's call — this method takes what
    /// it is given.
    pub async fn create_order(
        &self,
        parsed: &ParsedOrder,
        customer_id: &str,
    ) -> Result<Order, OrderError> {
        let items: Vec<OrderItem> = parsed
            .items
            .iter()
            .map(|line| OrderItem {
                id: line.menu_item.id,
                name: line.menu_item.name.clone(),
                price: line.menu_item.price,
                quantity: line.quantity,
            })
            .collect();

        let mut order = Order::new(customer_id, parsed.order_type, items);
        order.customer_name = parsed.customer_name.clone();
        order.customer_phone = parsed.customer_phone.clone();
        order.delivery_address = parsed.delivery_address.clone();
        order.special_instructions = parsed.special_instructions.clone();

        self.store.create(&order).await?;

        tracing::info!(
            order_id = %order.id,
            customer_id = %order.customer_id,
            items = order.items.len(),
            total = %order.total_price,
            "order created"
        );

        self.notify(&order.customer_id, &messages::order_confirmation(&order))
            .await;

        Ok(order)
    }

    /// Move an order to `target`, validating the edge against the status
    /// graph, then notify the customer.
    ///
    /// The read and the write are two storage calls; serializing
    /// concurrent transitions on the same order is the store's job.
    pub async fn update_status(
        &self,
        order_id: Uuid,
        target: OrderStatus,
    ) -> Result<Order, OrderError> {
        let order = self.store.get(order_id).await?;

        if !order.status.can_transition_to(target) {
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to: target,
            });
        }

        let updated = self.store.update_status(order_id, target, Utc::now()).await?;

        tracing::info!(
            order_id = %order_id,
            from = %order.status,
            to = %target,
            "order status updated"
        );

        if let Some(update) = messages::status_update(target) {
            let text = format!("Order #{} Update: {}", updated.id, update);
            self.notify(&updated.customer_id, &text).await;
        }

        Ok(updated)
    }

    /// `update_status` for callers holding the raw status string from the
    /// dashboard; unknown statuses fail before any storage access.
    pub async fn update_status_from_str(
        &self,
        order_id: Uuid,
        status: &str,
    ) -> Result<Order, OrderError> {
        let target: OrderStatus = status.parse()?;
        self.update_status(order_id, target).await
    }

    pub async fn order(&self, order_id: Uuid) -> Result<Order, OrderError> {
        Ok(self.store.get(order_id).await?)
    }

    pub async fn orders(&self, filters: &OrderFilters) -> Result<Vec<Order>, OrderError> {
        Ok(self.store.list(filters).await?)
    }

    /// Best-effort send; failures are logged, never propagated.
    async fn notify(&self, recipient_id: &str, text: &str) {
        if let Err(error) = self.notifier.send_text(recipient_id, text).await {
            tracing::warn!(%error, recipient_id, "customer notification failed");
        }
    }
}
