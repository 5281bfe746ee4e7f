//! Parse validation
//!
//! Produces the human-readable diagnostics carried on `ParsedOrder.errors`.
//! Validation never fails; multiple diagnostics may coexist.

use crate::parsed::ParsedItem;
use crate::vocabulary::ParserVocabulary;
use once_cell::sync::Lazy;
use regex::Regex;
use snacktrack_core::OrderType;
use unicode_segmentation::UnicodeSegmentation;

/// "0 burger" and the like — an explicit zero quantity is a customer
/// mistake worth asking about, not something to silently treat as one.
static ZERO_QUANTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b0\s+\w+\b").expect("static pattern"));

pub(crate) fn validate(
    original_text: &str,
    items: &[ParsedItem],
    delivery_address: Option<&str>,
    order_type: OrderType,
    invalid_phone: bool,
    vocabulary: &ParserVocabulary,
) -> Vec<String> {
    let mut errors = Vec::new();

    if ZERO_QUANTITY_RE.is_match(original_text) {
        errors.push("Order contains items with zero quantity".to_string());
    }

    if items.is_empty() {
        let unknown = candidate_words(original_text, vocabulary);
        if unknown.is_empty() {
            errors.push("No menu items found in order".to_string());
        } else {
            errors.push(format!("Unknown menu items: {}", unknown.join(", ")));
        }
    }

    if order_type == OrderType::Delivery
        && delivery_address.map_or(true, |address| address.trim().is_empty())
    {
        errors.push("No delivery address found in order".to_string());
    }

    if invalid_phone {
        errors.push("Customer phone number could not be read".to_string());
    }

    errors
}

/// Words a customer may have meant as menu items: longer than three
/// characters and not in the filter lists, deduplicated in order.
fn candidate_words<'a>(text: &'a str, vocabulary: &ParserVocabulary) -> Vec<&'a str> {
    let mut words: Vec<&str> = Vec::new();
    for word in text.unicode_words() {
        if word.chars().count() > 3
            && !vocabulary.is_filter_word(&word.to_lowercase())
            && !words.iter().any(|seen| seen.eq_ignore_ascii_case(word))
        {
            words.push(word);
        }
    }
    words
}
