//! Customer notification delivery
//!
//! The actual transport (Messenger send API) lives outside this workspace;
//! the order flow only needs to hand a plain-text message to a recipient.

use crate::error::NotifyError;
use async_trait::async_trait;

/// Outbound text message delivery to a customer.
///
/// `recipient_id` is the messaging-platform sender id captured when the
/// order message arrived.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_text(&self, recipient_id: &str, text: &str) -> Result<(), NotifyError>;
}
