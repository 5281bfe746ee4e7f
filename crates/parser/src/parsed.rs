//! Parse result types

use serde::{Deserialize, Serialize};
use snacktrack_core::{MenuItemRef, OrderType, PaymentMethod};

/// One recognized line item: a catalog item and how many of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedItem {
    pub menu_item: MenuItemRef,
    pub quantity: u32,
}

/// Structured result of parsing one chat message.
///
/// Always well-formed: `items` is empty (never absent) when nothing was
/// recognized, and anything wrong with the message lands in `errors`
/// rather than failing the parse. An empty `errors` means the order is
/// complete enough to submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedOrder {
    /// Line items in order of first mention; repeated mentions of the
    /// same item are merged with summed quantities
    pub items: Vec<ParsedItem>,
    pub customer_name: Option<String>,
    /// Digits with an optional leading `+`; all other characters stripped
    pub customer_phone: Option<String>,
    /// Free text, not geocoded
    pub delivery_address: Option<String>,
    pub order_type: OrderType,
    /// All matched instruction phrases, comma-joined in order of appearance
    pub special_instructions: Option<String>,
    /// Raw matched time expression, unnormalized
    pub requested_time: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    /// Upper-cased
    pub discount_code: Option<String>,
    /// The untouched input, retained for audit
    pub original_text: String,
    pub errors: Vec<String>,
}

impl ParsedOrder {
    /// Minimal result returned when parsing itself failed (catalog down,
    /// internal error). The chat flow uses `errors` to apologize and ask
    /// the customer to rephrase.
    pub(crate) fn degraded(original_text: &str) -> Self {
        Self {
            items: Vec::new(),
            customer_name: None,
            customer_phone: None,
            delivery_address: None,
            order_type: OrderType::Delivery,
            special_instructions: None,
            requested_time: None,
            payment_method: None,
            discount_code: None,
            original_text: original_text.to_string(),
            errors: vec!["Failed to parse order text".to_string()],
        }
    }

    pub fn is_submittable(&self) -> bool {
        self.errors.is_empty()
    }
}
