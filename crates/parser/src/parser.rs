//! Order text parsing orchestrator
//!
//! Composes segmentation, metadata extraction, tokenization and item
//! matching into one pipeline:
//!
//! customer info → address → pickup → instructions → time → payment →
//! discount → tokenize → match → validate
//!
//! `parse_order_text` returns a plain `ParsedOrder` rather than a
//! `Result`: the signature is the contract that parsing never fails past
//! this boundary. Anything that does go wrong — including the menu
//! catalog being unreachable — degrades into an empty result carrying a
//! parse-failure diagnostic, so the chat flow can always answer the
//! customer.

use crate::extractors::MetadataExtractors;
use crate::matcher::find_menu_items;
use crate::parsed::ParsedOrder;
use crate::segmenter::{extract_address, extract_customer_info};
use crate::tokenizer::clean_text;
use crate::validation::validate;
use crate::vocabulary::ParserVocabulary;
use snacktrack_core::{CatalogError, MenuCatalog, OrderType};
use std::sync::Arc;

pub struct OrderParser {
    catalog: Arc<dyn MenuCatalog>,
    vocabulary: ParserVocabulary,
    extractors: MetadataExtractors,
}

impl OrderParser {
    /// Parser with the built-in English/Tagalog vocabulary.
    pub fn new(catalog: Arc<dyn MenuCatalog>) -> Self {
        Self::with_vocabulary(catalog, ParserVocabulary::default())
    }

    /// Parser with an injected vocabulary; extraction regexes are
    /// compiled here, once.
    pub fn with_vocabulary(catalog: Arc<dyn MenuCatalog>, vocabulary: ParserVocabulary) -> Self {
        let extractors = MetadataExtractors::new(&vocabulary);
        Self {
            catalog,
            vocabulary,
            extractors,
        }
    }

    pub fn vocabulary(&self) -> &ParserVocabulary {
        &self.vocabulary
    }

    /// Parse one chat message into a structured order. Never fails; see
    /// the module docs for the degradation contract.
    pub async fn parse_order_text(&self, text: &str) -> ParsedOrder {
        match self.parse_inner(text).await {
            Ok(parsed) => parsed,
            Err(error) => {
                tracing::warn!(%error, "order parsing degraded to empty result");
                ParsedOrder::degraded(text)
            }
        }
    }

    async fn parse_inner(&self, text: &str) -> Result<ParsedOrder, CatalogError> {
        let customer = extract_customer_info(text, &self.vocabulary);
        // A message that was nothing but info lines still gets a chance
        // at address extraction over the original text
        let base = if customer.remaining_text.trim().is_empty() {
            text
        } else {
            customer.remaining_text.as_str()
        };
        let split = extract_address(base, &self.vocabulary);

        let (is_pickup, working) = self.extractors.extract_pickup(&split.order_text);
        let (special_instructions, working) = self.extractors.extract_instructions(&working);
        let (requested_time, working) = self.extractors.extract_time(&working);
        let (payment_method, working) = self.extractors.extract_payment(&working);
        let (discount_code, working) = self.extractors.extract_discount(&working);

        let tokens = clean_text(&working, &self.vocabulary);
        let items = find_menu_items(&tokens, &self.vocabulary, self.catalog.as_ref()).await?;

        let order_type = if is_pickup {
            OrderType::Pickup
        } else {
            OrderType::Delivery
        };
        let errors = validate(
            text,
            &items,
            split.address.as_deref(),
            order_type,
            customer.invalid_phone,
            &self.vocabulary,
        );

        tracing::debug!(
            items = items.len(),
            has_address = split.address.is_some(),
            order_type = %order_type,
            diagnostics = errors.len(),
            "parsed order text"
        );

        Ok(ParsedOrder {
            items,
            customer_name: customer.name,
            customer_phone: customer.phone,
            delivery_address: split.address,
            order_type,
            special_instructions,
            requested_time,
            payment_method,
            discount_code,
            original_text: text.to_string(),
            errors,
        })
    }
}
