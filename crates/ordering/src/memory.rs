//! In-memory implementations of the storage and notification traits
//!
//! Used by tests and local development. The store serializes everything
//! behind one lock, which also gives single-process callers the
//! read-then-write atomicity the service otherwise leaves to the backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use snacktrack_core::{
    Notifier, NotifyError, Order, OrderFilters, OrderStatus, OrderStore, StoreError,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, order: &Order) -> Result<(), StoreError> {
        self.orders.write().insert(order.id, order.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Order, StoreError> {
        self.orders
            .read()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Order, StoreError> {
        let mut orders = self.orders.write();
        let order = orders.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        order.status = status;
        order.updated_at = updated_at;
        Ok(order.clone())
    }

    async fn list(&self, filters: &OrderFilters) -> Result<Vec<Order>, StoreError> {
        let orders = self.orders.read();
        let mut matching: Vec<Order> = orders
            .values()
            .filter(|order| {
                filters.status.map_or(true, |status| order.status == status)
                    && filters
                        .customer_id
                        .as_deref()
                        .map_or(true, |customer| order.customer_id == customer)
                    && filters.date_range.map_or(true, |(start, end)| {
                        order.created_at >= start && order.created_at <= end
                    })
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }
}

/// A sent message captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub recipient_id: String,
    pub text: String,
}

/// Notifier that records every message instead of sending it; can be
/// switched into a failing mode to exercise delivery-failure paths.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: RwLock<Vec<SentMessage>>,
    failing: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent send fail.
    pub fn fail_deliveries(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.messages.read().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_text(&self, recipient_id: &str, text: &str) -> Result<(), NotifyError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotifyError::Delivery("simulated outage".to_string()));
        }
        self.messages.write().push(SentMessage {
            recipient_id: recipient_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snacktrack_core::OrderType;

    #[tokio::test]
    async fn test_store_round_trip() {
        let store = InMemoryOrderStore::new();
        let order = Order::new("psid-1", OrderType::Delivery, Vec::new());
        store.create(&order).await.unwrap();

        let fetched = store.get(order.id).await.unwrap();
        assert_eq!(fetched.id, order.id);
        assert_eq!(fetched.status, OrderStatus::New);

        let missing = store.get(Uuid::new_v4()).await;
        assert!(matches!(missing, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_filters_by_status_and_customer() {
        let store = InMemoryOrderStore::new();
        let order_a = Order::new("customer-a", OrderType::Delivery, Vec::new());
        let order_b = Order::new("customer-b", OrderType::Delivery, Vec::new());
        store.create(&order_a).await.unwrap();
        store.create(&order_b).await.unwrap();
        store
            .update_status(order_b.id, OrderStatus::Accepted, Utc::now())
            .await
            .unwrap();

        let accepted = store
            .list(&OrderFilters {
                status: Some(OrderStatus::Accepted),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].customer_id, "customer-b");

        let for_a = store
            .list(&OrderFilters {
                customer_id: Some("customer-a".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(for_a.len(), 1);

        let all = store.list(&OrderFilters::default()).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_recording_notifier_captures_and_fails() {
        let notifier = RecordingNotifier::new();
        notifier.send_text("psid-1", "hello").await.unwrap();
        assert_eq!(notifier.sent().len(), 1);

        notifier.fail_deliveries(true);
        assert!(notifier.send_text("psid-1", "again").await.is_err());
        assert_eq!(notifier.sent().len(), 1);
    }
}
