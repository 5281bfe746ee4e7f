//! Case-insensitive substring scanning
//!
//! Indicator phrases are ASCII, so ASCII-case-insensitive byte scanning is
//! enough and keeps every returned offset on a UTF-8 character boundary
//! even when the message itself contains non-ASCII text.

/// First occurrence of `needle` in `haystack`, ignoring ASCII case.
pub(crate) fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Every occurrence of `needle` in `haystack`, ignoring ASCII case.
/// Occurrences may overlap; each start offset is reported once.
pub(crate) fn find_all_ignore_ascii_case(haystack: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| window.eq_ignore_ascii_case(needle.as_bytes()))
        .map(|(index, _)| index)
        .collect()
}

/// `haystack` with the byte range `start..start + len` removed.
pub(crate) fn remove_range(haystack: &str, start: usize, len: usize) -> String {
    let mut out = String::with_capacity(haystack.len() - len);
    out.push_str(&haystack[..start]);
    out.push_str(&haystack[start + len..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find_ignore_ascii_case("Deliver to Makati", "deliver"), Some(0));
        assert_eq!(find_ignore_ascii_case("please DELIVER", "deliver"), Some(7));
        assert_eq!(find_ignore_ascii_case("pickup", "deliver"), None);
    }

    #[test]
    fn test_find_with_non_ascii_haystack() {
        // Multi-byte characters before the match must not skew the offset
        let text = "Café — deliver here";
        let idx = find_ignore_ascii_case(text, "deliver").unwrap();
        assert_eq!(&text[idx..idx + 7], "deliver");
    }

    #[test]
    fn test_find_all() {
        assert_eq!(find_all_ignore_ascii_case("to and To and TO", "to"), vec![0, 7, 14]);
        assert!(find_all_ignore_ascii_case("burger", "to").is_empty());
    }

    #[test]
    fn test_remove_range() {
        assert_eq!(remove_range("pay with gcash today", 9, 5), "pay with  today");
    }
}
