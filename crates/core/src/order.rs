//! Order entity, line items and the status graph

use crate::error::OrderError;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Lifecycle status of an order.
///
/// Orders move `New → Accepted → Finished → Completed`; staff may void an
/// order at any point before completion. `Completed` and `Voided` are
/// terminal. A voided order stays in storage; voiding is a status, not a
/// deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Just created from a chat message, awaiting staff review
    #[default]
    New,
    /// Accepted by staff, being prepared
    Accepted,
    /// Prepared, awaiting pickup or out for delivery
    Finished,
    /// Handed over to the customer
    Completed,
    /// Cancelled by staff
    Voided,
}

/// Static transition map; `allowed_transitions` is a lookup, not an
/// allocation.
static STATUS_TRANSITIONS: Lazy<HashMap<OrderStatus, &'static [OrderStatus]>> = Lazy::new(|| {
    use OrderStatus::*;
    let mut map = HashMap::new();
    map.insert(New, &[Accepted, Voided] as &[_]);
    map.insert(Accepted, &[Finished, Voided] as &[_]);
    map.insert(Finished, &[Completed, Voided] as &[_]);
    map.insert(Completed, &[] as &[_]);
    map.insert(Voided, &[] as &[_]);
    map
});

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Accepted => "accepted",
            Self::Finished => "finished",
            Self::Completed => "completed",
            Self::Voided => "voided",
        }
    }

    /// Statuses reachable from this one.
    pub fn allowed_transitions(&self) -> &'static [OrderStatus] {
        STATUS_TRANSITIONS.get(self).copied().unwrap_or(&[])
    }

    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = OrderError;

    /// Parse a status string as received from the dashboard.
    ///
    /// `"pending"` is accepted as an alias of `New` for compatibility with
    /// orders created before the status rename.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" | "pending" => Ok(Self::New),
            "accepted" => Ok(Self::Accepted),
            "finished" => Ok(Self::Finished),
            "completed" => Ok(Self::Completed),
            "voided" => Ok(Self::Voided),
            other => Err(OrderError::InvalidStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Pickup,
    #[default]
    Delivery,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Delivery => "delivery",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment methods customers mention in chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Gcash,
    Paymaya,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Gcash => "gcash",
            Self::Paymaya => "paymaya",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Menu item id at the time of ordering
    pub id: i64,
    pub name: String,
    /// Unit price at the time of ordering; menu price changes do not
    /// retroactively reprice orders
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// A persisted customer order.
///
/// Created once with status `New`; afterwards only status transitions
/// mutate it (via the ordering service), refreshing `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    /// Messaging-platform sender id, used as the notification recipient
    pub customer_id: String,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub status: OrderStatus,
    pub order_type: OrderType,
    pub total_price: Decimal,
    pub items: Vec<OrderItem>,
    pub delivery_address: Option<String>,
    pub special_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order with status `New` and the total computed from
    /// the line items.
    pub fn new(customer_id: impl Into<String>, order_type: OrderType, items: Vec<OrderItem>) -> Self {
        let now = Utc::now();
        let total_price = items.iter().map(OrderItem::line_total).sum();
        Self {
            id: Uuid::new_v4(),
            customer_id: customer_id.into(),
            customer_name: None,
            customer_phone: None,
            status: OrderStatus::New,
            order_type,
            total_price,
            items,
            delivery_address: None,
            special_instructions: None,
            created_at: now,
            updated_at: now,
        }
    }
}
