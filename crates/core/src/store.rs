//! Order storage contract
//!
//! Persistence itself (SQL, migrations, connection pooling) is owned by the
//! deployment; this trait is the narrow surface the ordering service needs.
//! Concurrent transitions on the same order must be serialized by the
//! implementation (transaction or optimistic version check) — the service
//! performs a read-then-write and does not lock.

use crate::error::StoreError;
use crate::order::{Order, OrderStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Filters for listing orders on the dashboard.
#[derive(Debug, Clone, Default)]
pub struct OrderFilters {
    pub status: Option<OrderStatus>,
    pub customer_id: Option<String>,
    /// Inclusive creation-time range
    pub date_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(&self, order: &Order) -> Result<(), StoreError>;

    async fn get(&self, id: Uuid) -> Result<Order, StoreError>;

    /// Write a new status and `updated_at`, returning the updated order.
    ///
    /// This is a raw write; edge validation happens in the ordering
    /// service before it is called.
    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Order, StoreError>;

    /// List orders newest-first, optionally filtered.
    async fn list(&self, filters: &OrderFilters) -> Result<Vec<Order>, StoreError>;
}
