//! Natural-language order parsing for SnackTrack
//!
//! Turns a free-form, bilingual (English/Tagalog/Taglish) chat message
//! into a structured order without any external NLP dependency:
//!
//! - **Segmentation**: customer-info lines and the delivery address are
//!   split off the order text
//! - **Metadata extraction**: pickup intent, special instructions,
//!   requested time, payment method and discount code
//! - **Tokenization**: compound menu phrases ("pritong manok") are
//!   protected from being split, filler words dropped
//! - **Matching**: quantities and menu items resolved against the
//!   catalog with shrinking token windows, repeated items aggregated
//!
//! # Example
//!
//! ```ignore
//! use snacktrack_parser::OrderParser;
//! use std::sync::Arc;
//!
//! let parser = OrderParser::new(Arc::new(catalog));
//! let parsed = parser
//!     .parse_order_text("2 burger and 1 fries, deliver to 123 Main St")
//!     .await;
//!
//! assert_eq!(parsed.items.len(), 2);
//! assert!(parsed.errors.is_empty());
//! ```

pub mod extractors;
pub mod matcher;
pub mod segmenter;
pub mod tokenizer;
pub mod vocabulary;

mod parsed;
mod parser;
mod scan;
mod validation;

pub use parsed::{ParsedItem, ParsedOrder};
pub use parser::OrderParser;
pub use vocabulary::{Lexicon, ParserVocabulary};
