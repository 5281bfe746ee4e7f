//! Quantity resolution and menu item matching
//!
//! One left-to-right pass over the token stream. Quantity tokens set the
//! quantity for the next item; everything else is tried against the menu
//! catalog with shrinking multi-token windows. Lookups are awaited one at
//! a time on purpose — each hit moves the cursor and feeds the dedup set,
//! so they must be applied in text order.

use crate::parsed::ParsedItem;
use crate::vocabulary::ParserVocabulary;
use snacktrack_core::{CatalogError, MenuCatalog, MenuItemRef};
use std::collections::HashSet;

/// Longest run of tokens tried as a single menu phrase.
const MAX_WINDOW: usize = 4;

/// Cursor over an immutable token sequence. All movement goes through
/// `advance`, so a match consuming a window cannot leave the position
/// inside it.
struct TokenCursor<'a> {
    tokens: &'a [String],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    fn new(tokens: &'a [String]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn current(&self) -> &'a str {
        &self.tokens[self.pos]
    }

    fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    /// The next `width` tokens joined into one lookup phrase.
    fn window(&self, width: usize) -> String {
        self.tokens[self.pos..self.pos + width].join(" ")
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
    }
}

/// Walk the tokens, resolving quantities and matching catalog items.
///
/// Repeated mentions of an item are merged onto the existing line with
/// summed quantities rather than appended. Tokens that resolve to nothing
/// are dropped; validation reports them only when the whole order came up
/// empty.
pub async fn find_menu_items(
    tokens: &[String],
    vocabulary: &ParserVocabulary,
    catalog: &dyn MenuCatalog,
) -> Result<Vec<ParsedItem>, CatalogError> {
    let mut items: Vec<ParsedItem> = Vec::new();
    let mut found_phrases: HashSet<String> = HashSet::new();
    let mut cursor = TokenCursor::new(tokens);
    let mut current_quantity: u32 = 1;

    while !cursor.is_done() {
        let token = cursor.current();

        if let Some(quantity) = vocabulary.quantity_value(token) {
            current_quantity = quantity;
            cursor.advance(1);
            continue;
        }

        let mut matched = false;
        for width in (1..=MAX_WINDOW.min(cursor.remaining())).rev() {
            let phrase = cursor.window(width);
            if found_phrases.contains(&phrase) {
                continue;
            }
            let candidates = catalog.find_by_name(&phrase).await?;
            if let Some(item) = candidates.into_iter().next() {
                record(&mut items, item, current_quantity);
                current_quantity = 1;
                found_phrases.insert(phrase);
                cursor.advance(width);
                matched = true;
                break;
            }
        }
        if matched {
            continue;
        }

        // A phrase seen before skips the window pass above; retrying the
        // bare token here is what lets "burger ... burger" aggregate onto
        // one line instead of stopping at the first mention.
        let token = token.to_string();
        let candidates = catalog.find_by_name(&token).await?;
        if let Some(item) = candidates.into_iter().next() {
            record(&mut items, item, current_quantity);
            current_quantity = 1;
            found_phrases.insert(token);
        } else {
            tracing::debug!(token = %token, "token matched no menu item");
        }
        cursor.advance(1);
    }

    Ok(items)
}

fn record(items: &mut Vec<ParsedItem>, menu_item: MenuItemRef, quantity: u32) {
    if let Some(existing) = items.iter_mut().find(|p| p.menu_item.id == menu_item.id) {
        existing.quantity += quantity;
    } else {
        items.push(ParsedItem {
            menu_item,
            quantity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::clean_text;
    use rust_decimal_macros::dec;
    use snacktrack_core::InMemoryMenuCatalog;

    fn item(id: i64, name: &str, localized: Option<&str>) -> MenuItemRef {
        MenuItemRef {
            id,
            name: name.to_string(),
            localized_name: localized.map(str::to_string),
            price: dec!(100.00),
            category: "Mains".to_string(),
            aliases: Vec::new(),
        }
    }

    fn catalog() -> InMemoryMenuCatalog {
        InMemoryMenuCatalog::new(vec![
            item(1, "Burger", Some("Burger")),
            item(2, "French Fries", Some("Pritong Patatas")),
            item(3, "Fried Chicken", Some("Pritong Manok")),
            item(4, "Soda", Some("Softdrinks")),
        ])
    }

    async fn matched(text: &str) -> Vec<ParsedItem> {
        let vocabulary = ParserVocabulary::default();
        let tokens = clean_text(text, &vocabulary);
        find_menu_items(&tokens, &vocabulary, &catalog())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_quantities_attach_to_following_item() {
        let items = matched("2 burger and 1 fries").await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].menu_item.name, "Burger");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].menu_item.name, "French Fries");
        assert_eq!(items[1].quantity, 1);
    }

    #[tokio::test]
    async fn test_quantity_defaults_to_one() {
        let items = matched("burger and fries").await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[1].quantity, 1);
    }

    #[tokio::test]
    async fn test_quantity_words_in_both_languages() {
        let items = matched("two burger and dalawang softdrinks").await;
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].menu_item.name, "Soda");
        assert_eq!(items[1].quantity, 2);
    }

    #[tokio::test]
    async fn test_repeated_items_aggregate() {
        let items = matched("2 burger and 1 burger and 3 burger").await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].menu_item.name, "Burger");
        assert_eq!(items[0].quantity, 6);
    }

    #[tokio::test]
    async fn test_compound_token_matches_as_one_item() {
        let items = matched("1 pritong manok po").await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].menu_item.name, "Fried Chicken");
    }

    #[tokio::test]
    async fn test_unmatched_tokens_are_dropped() {
        let items = matched("1 burger and some jellyfish").await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].menu_item.name, "Burger");
    }
}
