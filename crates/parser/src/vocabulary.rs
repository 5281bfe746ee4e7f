//! Parser vocabulary
//!
//! All word lists the parser matches against live here as immutable data
//! injected at construction, keyed by language so adding a language is a
//! data change, not a code change. The defaults cover the English/Tagalog
//! mix our customers actually write.
//!
//! Lists are scanned in `Language::ALL` order and, within a language, in
//! declaration order; for indicator lists that order decides which match
//! wins, so it is part of the behavior, not a cosmetic detail.

use snacktrack_core::{Language, PaymentMethod};
use std::collections::HashMap;

/// Phrases per language for one indicator category.
pub type Lexicon = HashMap<Language, Vec<String>>;

/// How close (in bytes) an address indicator may sit to a compound menu
/// phrase before it is rejected as a false hit. Heuristic carried over
/// from the production tuning; not semantically load-bearing.
pub const COMPOUND_COLLISION_SLACK: usize = 5;

/// Word lists driving segmentation, tokenization and extraction.
#[derive(Debug, Clone)]
pub struct ParserVocabulary {
    /// Connectives, politeness particles and other words that carry no
    /// order content and are dropped during tokenization
    pub filter_words: Lexicon,
    /// Line-level indicators introducing the customer's name
    pub name_indicators: Lexicon,
    /// Line-level indicators introducing the customer's phone number
    pub phone_indicators: Lexicon,
    /// Indicators that split the delivery address off the order text
    pub address_indicators: Lexicon,
    /// Phrases meaning the customer will pick the order up
    pub pickup_indicators: Lexicon,
    /// Words introducing a special instruction ("no onions", "extra rice")
    pub instruction_indicators: Lexicon,
    /// Words introducing a requested time ("at 6:30 pm", "alas 7")
    pub time_indicators: Lexicon,
    /// Words introducing a discount code
    pub discount_indicators: Lexicon,
    /// Payment methods and the phrases naming them, scanned in order —
    /// wallet brands sit before "cash" so "gcash" never reads as cash
    pub payment_indicators: Vec<(PaymentMethod, Lexicon)>,
    /// Quantity words and their values (literal digits 1–5 always work)
    pub quantity_words: HashMap<Language, Vec<(String, u32)>>,
    /// Multi-word menu terms that must never be split apart, lowercase
    pub compound_phrases: Vec<String>,
}

/// Iterate a lexicon's phrases in scan order (English first, then
/// Tagalog, declaration order within each).
pub fn phrases(lexicon: &Lexicon) -> impl Iterator<Item = &str> {
    Language::ALL
        .iter()
        .filter_map(|language| lexicon.get(language))
        .flatten()
        .map(String::as_str)
}

impl ParserVocabulary {
    pub fn is_filter_word(&self, token: &str) -> bool {
        phrases(&self.filter_words).any(|word| word == token)
    }

    /// Resolve a token to a quantity: a literal digit 1–5 or a quantity
    /// word in any language.
    pub fn quantity_value(&self, token: &str) -> Option<u32> {
        if let Ok(value) = token.parse::<u32>() {
            return (1..=5).contains(&value).then_some(value);
        }
        Language::ALL
            .iter()
            .filter_map(|language| self.quantity_words.get(language))
            .flatten()
            .find(|(word, _)| word.as_str() == token)
            .map(|(_, value)| *value)
    }

    /// Compound phrases sorted longest first so overlapping phrases are
    /// replaced outside-in during tokenization.
    pub fn compounds_longest_first(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.compound_phrases.iter().map(String::as_str).collect();
        sorted.sort_by_key(|phrase| std::cmp::Reverse(phrase.len()));
        sorted
    }
}

fn lexicon(english: &[&str], tagalog: &[&str]) -> Lexicon {
    let mut map = HashMap::new();
    map.insert(Language::English, to_strings(english));
    map.insert(Language::Tagalog, to_strings(tagalog));
    map
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for ParserVocabulary {
    fn default() -> Self {
        let quantity_words = {
            let mut map = HashMap::new();
            map.insert(
                Language::English,
                vec![
                    ("one".to_string(), 1),
                    ("two".to_string(), 2),
                    ("three".to_string(), 3),
                    ("four".to_string(), 4),
                    ("five".to_string(), 5),
                ],
            );
            // Both bare and -ng linker forms: "dalawa" and "dalawang burger"
            map.insert(
                Language::Tagalog,
                vec![
                    ("isa".to_string(), 1),
                    ("isang".to_string(), 1),
                    ("dalawa".to_string(), 2),
                    ("dalawang".to_string(), 2),
                    ("tatlo".to_string(), 3),
                    ("tatlong".to_string(), 3),
                    ("apat".to_string(), 4),
                    ("lima".to_string(), 5),
                    ("limang".to_string(), 5),
                ],
            );
            map
        };

        Self {
            filter_words: lexicon(
                &[
                    "i", "want", "to", "order", "please", "and", "with", "also", "get", "would",
                    "like", "a", "an", "the", "can", "me", "for",
                ],
                &[
                    "po", "nga", "sana", "ako", "gusto", "ko", "ng", "at", "pati", "rin", "din",
                    "mag", "order", "pa", "yung", "na", "lang", "akin", "para", "sa", "dito",
                ],
            ),
            name_indicators: lexicon(
                &["name:", "name is", "this is", "i am", "caller:", "from:"],
                &["pangalan:", "ako si", "ito si", "tawag:", "mula kay:"],
            ),
            phone_indicators: lexicon(
                &["phone:", "contact:", "number:", "cell:", "mobile:"],
                &["numero:", "telepono:", "cellphone:"],
            ),
            address_indicators: lexicon(
                &["deliver", "address", "location", "send", "to"],
                &[
                    "address", "lugar", "lokasyon", "dito", "sa", "padala", "deliver", "ipadala",
                    "punta", "doon", "diyan",
                ],
            ),
            pickup_indicators: lexicon(
                &["pick up", "pickup", "pick-up"],
                &["kunin", "susunduin", "babalikan"],
            ),
            // "with" stays in the filter list instead: "with extra cheese"
            // should read as instruction "extra cheese", not "with extra"
            instruction_indicators: lexicon(&["no", "extra", "without"], &["walang", "dagdagan"]),
            time_indicators: lexicon(&["at", "by", "around", "before", "after"], &["alas", "mga"]),
            discount_indicators: lexicon(&["discount", "promo", "voucher", "code"], &["kupon"]),
            payment_indicators: vec![
                (
                    PaymentMethod::Gcash,
                    lexicon(&["gcash", "g-cash", "g cash"], &[]),
                ),
                (
                    PaymentMethod::Paymaya,
                    lexicon(&["paymaya", "pay maya", "maya"], &[]),
                ),
                (
                    PaymentMethod::Card,
                    lexicon(&["credit card", "debit card", "card"], &["tarheta"]),
                ),
                (PaymentMethod::Cash, lexicon(&["cash"], &["bayad sa pera"])),
            ],
            quantity_words,
            compound_phrases: to_strings(&[
                "pritong manok",
                "pritong patatas",
                "pakpak ng manok",
                "ice cream",
                "soft drink",
                "french fries",
                "fried chicken",
            ]),
        }
    }
}
