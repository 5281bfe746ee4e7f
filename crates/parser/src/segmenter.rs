//! Message segmentation
//!
//! Splits a raw chat message into customer-info lines and order text, then
//! splits the order text into the order proper and the delivery address.

use crate::scan::{find_all_ignore_ascii_case, find_ignore_ascii_case};
use crate::vocabulary::{phrases, Lexicon, ParserVocabulary, COMPOUND_COLLISION_SLACK};

/// A phone line must sanitize to at least this many digits to be usable.
const MIN_PHONE_DIGITS: usize = 7;

/// Customer fields pulled out of a message, plus what is left of it.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerInfo {
    pub name: Option<String>,
    pub phone: Option<String>,
    /// A phone indicator line was present but did not sanitize to a
    /// usable number; surfaced as a validation diagnostic
    pub invalid_phone: bool,
    /// Non-info lines rejoined with newlines in original order
    pub remaining_text: String,
}

/// Scan the message line by line for name/phone indicator phrases.
///
/// The first matching indicator on a line wins for that field, and the
/// first line that yields a field wins overall — later lines never
/// overwrite. Lines that yielded a field are dropped from the remaining
/// text.
pub fn extract_customer_info(text: &str, vocabulary: &ParserVocabulary) -> CustomerInfo {
    let mut name: Option<String> = None;
    let mut phone: Option<String> = None;
    let mut phone_seen = false;
    let mut invalid_phone = false;
    let mut remaining_lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        let mut is_info_line = false;

        if name.is_none() {
            if let Some(value) = value_after_indicator(line, &vocabulary.name_indicators) {
                if !value.is_empty() {
                    name = Some(value.to_string());
                }
                is_info_line = true;
            }
        }

        if !phone_seen {
            if let Some(value) = value_after_indicator(line, &vocabulary.phone_indicators) {
                phone_seen = true;
                is_info_line = true;
                let sanitized = sanitize_phone(value);
                if sanitized.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS {
                    phone = Some(sanitized);
                } else {
                    invalid_phone = true;
                }
            }
        }

        if !is_info_line {
            remaining_lines.push(line);
        }
    }

    CustomerInfo {
        name,
        phone,
        invalid_phone,
        remaining_text: remaining_lines.join("\n"),
    }
}

/// Everything after the first matching indicator on the line, trimmed.
fn value_after_indicator<'a>(line: &'a str, indicators: &Lexicon) -> Option<&'a str> {
    for indicator in phrases(indicators) {
        if let Some(index) = find_ignore_ascii_case(line, indicator) {
            return Some(line[index + indicator.len()..].trim());
        }
    }
    None
}

/// Keep digits and a leading `+`; drop everything else.
fn sanitize_phone(raw: &str) -> String {
    let mut out = String::new();
    for c in raw.chars() {
        match c {
            '0'..='9' => out.push(c),
            '+' if out.is_empty() => out.push(c),
            _ => {}
        }
    }
    out
}

/// Order text / address split.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressSplit {
    pub order_text: String,
    /// The address portion, indicator included; None when no indicator
    /// was accepted
    pub address: Option<String>,
}

/// Split the order text at the first accepted address indicator.
///
/// An indicator occurrence is rejected when it sits within
/// `phrase.len() + COMPOUND_COLLISION_SLACK` bytes of a compound menu
/// phrase, so "pritong manok" never reads as an address starting at "to".
pub fn extract_address(text: &str, vocabulary: &ParserVocabulary) -> AddressSplit {
    let compound_hits: Vec<(usize, usize)> = vocabulary
        .compound_phrases
        .iter()
        .flat_map(|phrase| {
            find_all_ignore_ascii_case(text, phrase)
                .into_iter()
                .map(move |index| (index, phrase.len()))
        })
        .collect();

    for indicator in phrases(&vocabulary.address_indicators) {
        for index in find_all_ignore_ascii_case(text, indicator) {
            let collides = compound_hits.iter().any(|(phrase_index, phrase_len)| {
                index.abs_diff(*phrase_index) < phrase_len + COMPOUND_COLLISION_SLACK
            });
            if collides {
                continue;
            }

            let order_text = text[..index].trim().to_string();
            let address = text[index..].trim().to_string();
            return AddressSplit {
                order_text,
                address: (!address.is_empty()).then_some(address),
            };
        }
    }

    AddressSplit {
        order_text: text.to_string(),
        address: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> ParserVocabulary {
        ParserVocabulary::default()
    }

    #[test]
    fn test_extracts_name_and_phone_lines() {
        let info = extract_customer_info(
            "name: John Doe\nphone: +639123456789\n1 burger to 123 Main St",
            &vocab(),
        );
        assert_eq!(info.name.as_deref(), Some("John Doe"));
        assert_eq!(info.phone.as_deref(), Some("+639123456789"));
        assert!(!info.invalid_phone);
        assert_eq!(info.remaining_text, "1 burger to 123 Main St");
    }

    #[test]
    fn test_tagalog_indicators() {
        let info = extract_customer_info(
            "pangalan: Juan Dela Cruz\nnumero: 09123456789\npabili po ng burger",
            &vocab(),
        );
        assert_eq!(info.name.as_deref(), Some("Juan Dela Cruz"));
        assert_eq!(info.phone.as_deref(), Some("09123456789"));
    }

    #[test]
    fn test_phone_is_sanitized() {
        let info = extract_customer_info("phone: 0912-345-6789\n1 burger", &vocab());
        assert_eq!(info.phone.as_deref(), Some("09123456789"));

        // Interior plus signs are dropped, a leading one survives
        let info = extract_customer_info("phone: +63 (912) 345+6789\n1 burger", &vocab());
        assert_eq!(info.phone.as_deref(), Some("+639123456789"));
    }

    #[test]
    fn test_unusable_phone_is_flagged() {
        let info = extract_customer_info("phone: invalid\n1 burger", &vocab());
        assert_eq!(info.phone, None);
        assert!(info.invalid_phone);
        // The info line is still removed from the remaining text
        assert_eq!(info.remaining_text, "1 burger");
    }

    #[test]
    fn test_first_found_wins_across_lines() {
        let info = extract_customer_info(
            "name: First Name\nname: Second Name\nphone: 09123456789\nphone: 09998887777",
            &vocab(),
        );
        assert_eq!(info.name.as_deref(), Some("First Name"));
        assert_eq!(info.phone.as_deref(), Some("09123456789"));
        // Later duplicate indicator lines are not info lines, so they stay
        assert!(info.remaining_text.contains("Second Name"));
    }

    #[test]
    fn test_no_info_lines_leaves_text_untouched() {
        let info = extract_customer_info("2 burger and 1 fries", &vocab());
        assert_eq!(info.name, None);
        assert_eq!(info.phone, None);
        assert_eq!(info.remaining_text, "2 burger and 1 fries");
    }

    #[test]
    fn test_address_split_keeps_indicator_in_address() {
        let split = extract_address("1 burger and 1 fries deliver to 123 Main St", &vocab());
        assert_eq!(split.order_text, "1 burger and 1 fries");
        assert_eq!(split.address.as_deref(), Some("deliver to 123 Main St"));
    }

    #[test]
    fn test_no_indicator_means_no_address() {
        let split = extract_address("1 burger and 1 fries", &vocab());
        assert_eq!(split.order_text, "1 burger and 1 fries");
        assert_eq!(split.address, None);
    }

    #[test]
    fn test_indicator_inside_compound_phrase_is_rejected() {
        // "to" occurs inside "pritong" but must not split the order there;
        // the standalone "address" indicator farther along the text wins
        let split =
            extract_address("2 pritong manok at 1 softdrinks, address 123 Main St", &vocab());
        assert_eq!(split.order_text, "2 pritong manok at 1 softdrinks,");
        assert_eq!(split.address.as_deref(), Some("address 123 Main St"));
    }

    #[test]
    fn test_indicator_too_close_to_compound_is_rejected_entirely() {
        // Every indicator occurrence sits within the collision slack of
        // "pritong manok", so no address is extracted at all
        let split = extract_address("2 pritong manok to go", &vocab());
        assert_eq!(split.order_text, "2 pritong manok to go");
        assert_eq!(split.address, None);
    }
}
