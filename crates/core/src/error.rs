//! Error types shared across the order backend

use crate::order::OrderStatus;
use uuid::Uuid;

/// Menu catalog lookup failure.
///
/// The parser treats these as collaborator failures: they propagate out of
/// the matching loop and are only converted into a degraded parse at the
/// orchestrator boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("menu catalog query failed: {0}")]
    Query(String),

    #[error("menu catalog unavailable: {0}")]
    Unavailable(String),
}

/// Order storage failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("order {0} not found")]
    NotFound(Uuid),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Notification delivery failure.
///
/// Delivery failures never roll back the order mutation that triggered
/// them; callers log and continue.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NotifyError {
    #[error("message delivery failed: {0}")]
    Delivery(String),
}

/// Order lifecycle errors raised by the status machine.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderError {
    /// The requested status is not one of the known statuses.
    #[error("unknown order status: {0:?}")]
    InvalidStatus(String),

    /// The requested status is known but not reachable from the current one.
    #[error("cannot transition order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// Persistence failure, passed through untouched so the caller can
    /// decide on retry.
    #[error(transparent)]
    Store(#[from] StoreError),
}
