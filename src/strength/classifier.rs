//! Character-set classifier

use super::{DIGIT_SIZE, LOWER_SIZE, SYMBOL_SET, SYMBOL_SIZE, UPPER_SIZE};
use crate::types::CharsetProfile;

/// Classify a password into character classes and an effective alphabet size
///
/// Pure and total: the empty string yields an all-false profile with
/// `alphabet_size == 0`. Characters outside the four ASCII classes still
/// count toward `length` but enable no flag, so the alphabet size can be 0
/// for a non-empty password (see [`CharsetProfile`] for why that
/// approximation is deliberate).
pub fn classify(password: &str) -> CharsetProfile {
    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_digit = false;
    let mut has_symbol = false;
    let mut length: u32 = 0;

    for c in password.chars() {
        length += 1;
        if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if SYMBOL_SET.contains(c) {
            has_symbol = true;
        }
    }

    let mut alphabet_size = 0;
    if has_lower {
        alphabet_size += LOWER_SIZE;
    }
    if has_upper {
        alphabet_size += UPPER_SIZE;
    }
    if has_digit {
        alphabet_size += DIGIT_SIZE;
    }
    if has_symbol {
        alphabet_size += SYMBOL_SIZE;
    }

    CharsetProfile {
        has_lower,
        has_upper,
        has_digit,
        has_symbol,
        alphabet_size,
        length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password() {
        let profile = classify("");
        assert_eq!(profile.length, 0);
        assert_eq!(profile.alphabet_size, 0);
        assert_eq!(profile.class_count(), 0);
    }

    #[test]
    fn test_lowercase_only() {
        let profile = classify("password");
        assert!(profile.has_lower);
        assert!(!profile.has_upper);
        assert!(!profile.has_digit);
        assert!(!profile.has_symbol);
        assert_eq!(profile.alphabet_size, 26);
        assert_eq!(profile.length, 8);
    }

    #[test]
    fn test_all_four_classes() {
        let profile = classify("Pa55w0rd!");
        assert!(profile.has_lower);
        assert!(profile.has_upper);
        assert!(profile.has_digit);
        assert!(profile.has_symbol);
        assert_eq!(profile.alphabet_size, 26 + 26 + 10 + 32);
        assert_eq!(profile.length, 9);
    }

    #[test]
    fn test_mixed_pairs() {
        assert_eq!(classify("abcDEF").alphabet_size, 52);
        assert_eq!(classify("abc123").alphabet_size, 36);
        assert_eq!(classify("123!").alphabet_size, 42);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 'å' is two bytes in UTF-8 but one character
        let profile = classify("påss");
        assert_eq!(profile.length, 4);
    }

    #[test]
    fn test_non_ascii_enables_no_class() {
        let profile = classify("ÿÿÿ");
        assert_eq!(profile.length, 3);
        assert_eq!(profile.alphabet_size, 0);
        assert_eq!(profile.class_count(), 0);
    }

    #[test]
    fn test_alphabet_size_independent_of_distinct_chars() {
        // one lowercase letter flags the whole 26-letter class
        assert_eq!(classify("aaaa").alphabet_size, 26);
        assert_eq!(classify("abcdefgh").alphabet_size, 26);
    }

    #[test]
    fn test_space_is_not_a_symbol() {
        let profile = classify("a b");
        assert!(profile.has_lower);
        assert!(!profile.has_symbol);
        assert_eq!(profile.length, 3);
    }
}
