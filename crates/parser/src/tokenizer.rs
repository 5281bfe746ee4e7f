//! Tokenization
//!
//! Produces the token stream the matcher walks. Compound menu phrases are
//! temporarily underscore-joined so whitespace splitting cannot break them
//! apart, then restored in the emitted tokens.

use crate::vocabulary::ParserVocabulary;

/// Lowercase, protect compound phrases, strip sentence punctuation, split
/// on whitespace and drop filter words.
pub fn clean_text(text: &str, vocabulary: &ParserVocabulary) -> Vec<String> {
    let mut processed = text.to_lowercase();

    // Longest first, so "pritong manok" wins over any shorter overlap
    for phrase in vocabulary.compounds_longest_first() {
        if processed.contains(phrase) {
            processed = processed.replace(phrase, &phrase.replace(' ', "_"));
        }
    }

    processed
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '!' | '?'))
        .collect::<String>()
        .split_whitespace()
        .map(|token| token.replace('_', " "))
        .filter(|token| !vocabulary.is_filter_word(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        clean_text(text, &ParserVocabulary::default())
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(tokens("2 Burger, 1 Soda!"), vec!["2", "burger", "1", "soda"]);
    }

    #[test]
    fn test_filter_words_are_dropped() {
        assert_eq!(
            tokens("I want to order a burger please"),
            vec!["burger"]
        );
        assert_eq!(
            tokens("gusto ko po ng burger at fries"),
            vec!["burger", "fries"]
        );
    }

    #[test]
    fn test_compound_phrases_stay_whole() {
        assert_eq!(
            tokens("1 pritong manok and 2 french fries"),
            vec!["1", "pritong manok", "2", "french fries"]
        );
    }

    #[test]
    fn test_compound_phrase_survives_punctuation() {
        assert_eq!(tokens("pritong manok, po"), vec!["pritong manok"]);
    }
}
