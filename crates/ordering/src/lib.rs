//! Order lifecycle service for SnackTrack
//!
//! Sits between the chat/webhook layer and storage:
//! - Creates orders from parsed chat messages and confirms them to the
//!   customer
//! - Applies status transitions against the fixed status graph, then
//!   dispatches the status-specific customer notification
//! - Builds all customer-facing message text (confirmation, status
//!   updates, the menu)
//!
//! Also ships in-memory implementations of the storage and notification
//! traits, used by tests and local development.

pub mod memory;
pub mod messages;
pub mod service;

pub use memory::{InMemoryOrderStore, RecordingNotifier};
pub use service::OrderService;
