//! Metadata extractors
//!
//! Independent extractors for pickup intent, special instructions,
//! requested time, payment method and discount codes. Each one scans the
//! working text and hands back the extracted value together with the text
//! with only its own matched span(s) removed; the orchestrator runs them
//! in a fixed order on the successively shrinking remainder.
//!
//! Regexes are compiled once per parser instance from the injected
//! vocabulary.

use crate::scan::{find_ignore_ascii_case, remove_range};
use crate::vocabulary::{phrases, ParserVocabulary};
use regex::Regex;
use snacktrack_core::PaymentMethod;

pub struct MetadataExtractors {
    pickup_phrases: Vec<String>,
    payment_phrases: Vec<(PaymentMethod, Vec<String>)>,
    instruction_re: Option<Regex>,
    time_re: Option<Regex>,
    discount_re: Option<Regex>,
}

impl MetadataExtractors {
    pub fn new(vocabulary: &ParserVocabulary) -> Self {
        Self {
            pickup_phrases: phrases(&vocabulary.pickup_indicators)
                .map(str::to_string)
                .collect(),
            payment_phrases: vocabulary
                .payment_indicators
                .iter()
                .map(|(method, lexicon)| {
                    (*method, phrases(lexicon).map(str::to_string).collect())
                })
                .collect(),
            instruction_re: alternation(&vocabulary.instruction_indicators).map(|alts| {
                Regex::new(&format!(r"(?i)\b(?:{alts})\s+(\w+)")).expect("static pattern")
            }),
            time_re: alternation(&vocabulary.time_indicators).map(|alts| {
                Regex::new(&format!(
                    r"(?i)\b(?:{alts})\s+(\d{{1,2}}[:.]\d{{2}}\s*(?:am|pm)?|\d{{1,2}}\s*(?:am|pm))\b"
                ))
                .expect("static pattern")
            }),
            discount_re: alternation(&vocabulary.discount_indicators).map(|alts| {
                Regex::new(&format!(
                    r"(?i)\b(?:{alts})(?:\s+code\b)?(?:\s*:\s*|\s+)([A-Za-z0-9]+)\b"
                ))
                .expect("static pattern")
            }),
        }
    }

    /// Substring search for a pickup phrase; a hit flips the order to
    /// pickup and removes the phrase.
    pub fn extract_pickup(&self, text: &str) -> (bool, String) {
        for phrase in &self.pickup_phrases {
            if let Some(index) = find_ignore_ascii_case(text, phrase) {
                return (true, remove_range(text, index, phrase.len()));
            }
        }
        (false, text.to_string())
    }

    /// Collect every instruction span ("no onions", "extra rice") in order
    /// of appearance, comma-joined, and strip them from the text.
    pub fn extract_instructions(&self, text: &str) -> (Option<String>, String) {
        let Some(re) = &self.instruction_re else {
            return (None, text.to_string());
        };

        let mut spans: Vec<String> = Vec::new();
        let mut remaining = String::with_capacity(text.len());
        let mut last_end = 0;
        for m in re.find_iter(text) {
            spans.push(m.as_str().trim().to_string());
            remaining.push_str(&text[last_end..m.start()]);
            last_end = m.end();
        }
        remaining.push_str(&text[last_end..]);

        if spans.is_empty() {
            (None, text.to_string())
        } else {
            (Some(spans.join(", ")), remaining)
        }
    }

    /// First time expression introduced by a time indicator; the captured
    /// value is kept raw and unnormalized.
    pub fn extract_time(&self, text: &str) -> (Option<String>, String) {
        let Some(re) = &self.time_re else {
            return (None, text.to_string());
        };
        match re.captures(text) {
            Some(caps) => {
                let value = caps[1].trim().to_string();
                let span = caps.get(0).expect("match exists");
                (
                    Some(value),
                    remove_range(text, span.start(), span.len()),
                )
            }
            None => (None, text.to_string()),
        }
    }

    /// First payment method phrase found, methods scanned in vocabulary
    /// order (wallet brands before "cash").
    pub fn extract_payment(&self, text: &str) -> (Option<PaymentMethod>, String) {
        for (method, method_phrases) in &self.payment_phrases {
            for phrase in method_phrases {
                if let Some(index) = find_ignore_ascii_case(text, phrase) {
                    return (Some(*method), remove_range(text, index, phrase.len()));
                }
            }
        }
        (None, text.to_string())
    }

    /// First discount code introduced by a discount indicator, upper-cased.
    pub fn extract_discount(&self, text: &str) -> (Option<String>, String) {
        let Some(re) = &self.discount_re else {
            return (None, text.to_string());
        };
        match re.captures(text) {
            Some(caps) => {
                let code = caps[1].to_uppercase();
                let span = caps.get(0).expect("match exists");
                (Some(code), remove_range(text, span.start(), span.len()))
            }
            None => (None, text.to_string()),
        }
    }
}

/// Escaped alternation of a lexicon's phrases, longest first so no phrase
/// is shadowed by a shorter prefix. None when the lexicon is empty.
fn alternation(lexicon: &crate::vocabulary::Lexicon) -> Option<String> {
    let mut alts: Vec<&str> = phrases(lexicon).collect();
    if alts.is_empty() {
        return None;
    }
    alts.sort_by_key(|phrase| std::cmp::Reverse(phrase.len()));
    Some(
        alts.iter()
            .map(|phrase| regex::escape(phrase))
            .collect::<Vec<_>>()
            .join("|"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractors() -> MetadataExtractors {
        MetadataExtractors::new(&ParserVocabulary::default())
    }

    #[test]
    fn test_pickup_in_both_languages() {
        let (pickup, remaining) = extractors().extract_pickup("2 burger for pick up please");
        assert!(pickup);
        assert!(!remaining.contains("pick up"));

        let (pickup, _) = extractors().extract_pickup("2 burger kunin ko na lang");
        assert!(pickup);

        let (pickup, remaining) = extractors().extract_pickup("2 burger");
        assert!(!pickup);
        assert_eq!(remaining, "2 burger");
    }

    #[test]
    fn test_instructions_collected_in_order() {
        let (instructions, remaining) = extractors()
            .extract_instructions("1 burger no onions extra cheese and 1 fries no salt");
        assert_eq!(
            instructions.as_deref(),
            Some("no onions, extra cheese, no salt")
        );
        assert_eq!(remaining.split_whitespace().collect::<Vec<_>>(), vec![
            "1", "burger", "and", "1", "fries"
        ]);
    }

    #[test]
    fn test_tagalog_instructions() {
        let (instructions, _) =
            extractors().extract_instructions("1 pritong manok walang sili po");
        assert_eq!(instructions.as_deref(), Some("walang sili"));
    }

    #[test]
    fn test_no_instructions() {
        let (instructions, remaining) = extractors().extract_instructions("2 burger");
        assert_eq!(instructions, None);
        assert_eq!(remaining, "2 burger");
    }

    #[test]
    fn test_time_formats() {
        let (time, remaining) = extractors().extract_time("2 burger at 6:30 pm");
        assert_eq!(time.as_deref(), Some("6:30 pm"));
        assert!(!remaining.contains("6:30"));

        let (time, _) = extractors().extract_time("1 fries by 7pm");
        assert_eq!(time.as_deref(), Some("7pm"));

        let (time, _) = extractors().extract_time("1 fries mga 11.45 am");
        assert_eq!(time.as_deref(), Some("11.45 am"));

        // A bare number after "at" is not a time expression
        let (time, _) = extractors().extract_time("burger at 123");
        assert_eq!(time, None);
    }

    #[test]
    fn test_payment_methods() {
        let (method, remaining) = extractors().extract_payment("2 burger pay via gcash");
        assert_eq!(method, Some(PaymentMethod::Gcash));
        assert!(!remaining.contains("gcash"));

        let (method, _) = extractors().extract_payment("1 fries cash on delivery");
        assert_eq!(method, Some(PaymentMethod::Cash));

        let (method, _) = extractors().extract_payment("paymaya po");
        assert_eq!(method, Some(PaymentMethod::Paymaya));

        let (method, _) = extractors().extract_payment("2 burger");
        assert_eq!(method, None);
    }

    #[test]
    fn test_gcash_never_reads_as_cash() {
        let (method, _) = extractors().extract_payment("bayad gcash");
        assert_eq!(method, Some(PaymentMethod::Gcash));
    }

    #[test]
    fn test_discount_codes() {
        let (code, remaining) = extractors().extract_discount("2 burger discount code SAVE10");
        assert_eq!(code.as_deref(), Some("SAVE10"));
        assert!(!remaining.contains("SAVE10"));

        let (code, _) = extractors().extract_discount("promo: b1t1");
        assert_eq!(code.as_deref(), Some("B1T1"));

        let (code, _) = extractors().extract_discount("may kupon: PISTA");
        assert_eq!(code.as_deref(), Some("PISTA"));

        let (code, _) = extractors().extract_discount("2 burger");
        assert_eq!(code, None);
    }
}
