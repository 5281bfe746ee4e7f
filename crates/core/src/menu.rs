//! Menu item types and catalog lookup
//!
//! The catalog is owned by an external system (menu management lives in its
//! own service with its own storage); this crate only defines the lookup
//! contract the parser needs, plus an in-memory implementation used by
//! tests and local development.

use crate::error::CatalogError;
use crate::language::Language;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A menu item as seen by the order flow.
///
/// Supplied entirely by the catalog; the parser treats it as opaque and
/// read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemRef {
    pub id: i64,
    /// English display name
    pub name: String,
    /// Tagalog display name, when the item has one
    pub localized_name: Option<String>,
    pub price: Decimal,
    pub category: String,
    /// Alternate spellings and colloquial names customers use
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl MenuItemRef {
    /// Display name in the requested language, falling back to the English
    /// name when no localized name exists.
    pub fn display_name(&self, language: Language) -> &str {
        match language {
            Language::English => &self.name,
            Language::Tagalog => self.localized_name.as_deref().unwrap_or(&self.name),
        }
    }
}

/// Menu catalog lookup.
///
/// `find_by_name` returns candidates ranked best-first: exact name or
/// localized-name matches, then prefix matches, then substring/alias
/// matches, ties broken by English name. Matching is case-insensitive;
/// diacritics are treated as literal characters.
#[async_trait]
pub trait MenuCatalog: Send + Sync {
    async fn find_by_name(&self, phrase: &str) -> Result<Vec<MenuItemRef>, CatalogError>;
}

/// In-memory menu catalog with the same ranking semantics as the
/// production lookup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMenuCatalog {
    items: Vec<MenuItemRef>,
}

impl InMemoryMenuCatalog {
    pub fn new(items: Vec<MenuItemRef>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItemRef] {
        &self.items
    }

    /// Match rank for one item: 1 = exact, 2 = prefix, 3 = substring/alias.
    /// Returns None when the item does not match at all.
    fn rank(item: &MenuItemRef, term: &str) -> Option<u8> {
        let name = item.name.to_lowercase();
        let localized = item.localized_name.as_deref().map(str::to_lowercase);
        let localized = localized.as_deref();

        if name == term || localized == Some(term) {
            return Some(1);
        }
        if name.starts_with(term) || localized.is_some_and(|l| l.starts_with(term)) {
            return Some(2);
        }
        let alias_hit = item
            .aliases
            .iter()
            .any(|a| a.to_lowercase().contains(term));
        if name.contains(term) || localized.is_some_and(|l| l.contains(term)) || alias_hit {
            return Some(3);
        }
        None
    }
}

#[async_trait]
impl MenuCatalog for InMemoryMenuCatalog {
    async fn find_by_name(&self, phrase: &str) -> Result<Vec<MenuItemRef>, CatalogError> {
        let term = phrase.trim().to_lowercase();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let mut ranked: Vec<(u8, &MenuItemRef)> = self
            .items
            .iter()
            .filter_map(|item| Self::rank(item, &term).map(|rank| (rank, item)))
            .collect();
        ranked.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.name.cmp(&b.1.name)));

        Ok(ranked.into_iter().map(|(_, item)| item.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(id: i64, name: &str, localized: Option<&str>, aliases: &[&str]) -> MenuItemRef {
        MenuItemRef {
            id,
            name: name.to_string(),
            localized_name: localized.map(str::to_string),
            price: dec!(99.00),
            category: "Mains".to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn catalog() -> InMemoryMenuCatalog {
        InMemoryMenuCatalog::new(vec![
            item(1, "Burger", Some("Burger"), &[]),
            item(2, "Burger Steak", None, &[]),
            item(3, "Fried Chicken", Some("Pritong Manok"), &["chicken"]),
            item(4, "French Fries", Some("Pritong Patatas"), &["fries"]),
        ])
    }

    #[tokio::test]
    async fn test_exact_match_ranks_first() {
        let results = catalog().find_by_name("burger").await.unwrap();
        assert_eq!(results[0].name, "Burger");
        assert_eq!(results[1].name, "Burger Steak");
    }

    #[tokio::test]
    async fn test_localized_name_matches() {
        let results = catalog().find_by_name("Pritong Manok").await.unwrap();
        assert_eq!(results[0].name, "Fried Chicken");
    }

    #[tokio::test]
    async fn test_alias_and_substring_match() {
        let results = catalog().find_by_name("fries").await.unwrap();
        assert_eq!(results[0].name, "French Fries");

        let results = catalog().find_by_name("chicken").await.unwrap();
        assert_eq!(results[0].name, "Fried Chicken");
    }

    #[tokio::test]
    async fn test_no_match_is_empty_not_error() {
        let results = catalog().find_by_name("pizza").await.unwrap();
        assert!(results.is_empty());

        let results = catalog().find_by_name("   ").await.unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_display_name_fallback() {
        let plain = item(9, "Burger Steak", None, &[]);
        assert_eq!(plain.display_name(Language::Tagalog), "Burger Steak");

        let localized = item(3, "Fried Chicken", Some("Pritong Manok"), &[]);
        assert_eq!(localized.display_name(Language::Tagalog), "Pritong Manok");
        assert_eq!(localized.display_name(Language::English), "Fried Chicken");
    }
}
