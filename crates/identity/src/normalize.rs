//! Text normalization for company matching.
//!
//! Two views of a string are used throughout the resolver:
//! - [`normalize`]: Unicode NFKD fold, non-breaking spaces to spaces, trimmed
//! - [`clean`]: `normalize` plus removal of everything except ASCII letters,
//!   digits, whitespace and `.`, `&`, `-`
//!
//! NFKD splits accented letters into a base letter and a combining mark, so
//! `clean` keeps the base letter ("Nestlé" becomes "Nestle").

use unicode_normalization::UnicodeNormalization;

const NBSP: char = '\u{a0}';

/// Normalize raw text: NFKD compatibility decomposition, NBSP replaced with a
/// regular space, surrounding whitespace trimmed.
///
/// # Examples
///
/// ```
/// use fintel_identity::normalize::normalize;
///
/// assert_eq!(normalize("  Apple\u{a0}Inc "), "Apple Inc");
/// assert_eq!(normalize("ﬁnance"), "finance");
/// ```
pub fn normalize(raw: &str) -> String {
    let folded: String = raw
        .nfkd()
        .map(|c| if c == NBSP { ' ' } else { c })
        .collect();
    folded.trim().to_string()
}

/// Normalize and strip every character outside letters, digits, whitespace,
/// `.`, `&` and `-`. Internal spacing is preserved.
///
/// # Examples
///
/// ```
/// use fintel_identity::normalize::clean;
///
/// assert_eq!(clean("What's up with AT&T?"), "Whats up with AT&T");
/// assert_eq!(clean("Tesla, Inc."), "Tesla Inc.");
/// ```
pub fn clean(raw: &str) -> String {
    normalize(raw)
        .chars()
        .filter(|c| is_kept(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Lower-cased [`clean`] form used as a comparison key.
pub fn fold(raw: &str) -> String {
    clean(raw).to_lowercase()
}

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '.' | '&' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_replaces_nbsp() {
        assert_eq!(normalize("\u{a0}Coca-Cola\u{a0}Co "), "Coca-Cola Co");
    }

    #[test]
    fn test_normalize_decomposes_ligatures() {
        assert_eq!(normalize("ﬀ"), "ff");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_clean_strips_accents_to_base_letter() {
        assert_eq!(clean("Nestlé"), "Nestle");
        assert_eq!(clean("L'Oréal"), "LOreal");
    }

    #[test]
    fn test_clean_keeps_allowed_punctuation() {
        assert_eq!(clean("Johnson & Johnson"), "Johnson & Johnson");
        assert_eq!(clean("Berkshire Hathaway Inc."), "Berkshire Hathaway Inc.");
        assert_eq!(clean("Coca-Cola!"), "Coca-Cola");
    }

    #[test]
    fn test_clean_preserves_internal_spacing() {
        assert_eq!(clean("Tell  me , about"), "Tell  me  about");
    }

    #[test]
    fn test_clean_drops_non_latin_scripts() {
        assert_eq!(clean("トヨタ Toyota"), "Toyota");
    }

    #[test]
    fn test_fold_lowercases() {
        assert_eq!(fold("Apple, Inc."), "apple inc.");
    }
}
