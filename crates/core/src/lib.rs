//! Core types and traits for the SnackTrack order backend
//!
//! This crate provides the foundational types used across the other crates:
//! - Menu item types and the menu catalog lookup trait
//! - Order entity, line items and the order status graph
//! - Language definitions (English/Tagalog)
//! - Collaborator traits for notification delivery and order storage
//! - Error types

pub mod error;
pub mod language;
pub mod menu;
pub mod notify;
pub mod order;
pub mod store;

pub use error::{CatalogError, NotifyError, OrderError, StoreError};
pub use language::Language;
pub use menu::{InMemoryMenuCatalog, MenuCatalog, MenuItemRef};
pub use notify::Notifier;
pub use order::{Order, OrderItem, OrderStatus, OrderType, PaymentMethod};
pub use store::{OrderFilters, OrderStore};
