//! Maidenhead grid locator extraction

use lazy_static::lazy_static;
use regex::Regex;

/// Scan free text for a Maidenhead grid locator
///
/// Matches the 4- or 6-character form: two letters, two digits, and
/// optionally two more letters. Input matching is case-insensitive;
/// the returned locator is uppercase. Returns the first token found
/// together with `true`, or `(default, false)` when the text carries
/// no locator.
///
/// ```
/// use statrep::extract_grid;
///
/// assert_eq!(
///     ("EN82".to_owned(), true),
///     extract_grid("Some text EN82 more text", "")
/// );
/// assert_eq!(
///     ("EM15".to_owned(), false),
///     extract_grid("No grid here", "EM15")
/// );
///
/// // the 6-character form matches even mid-word
/// assert_eq!(
///     ("EM15AT".to_owned(), true),
///     extract_grid("EM15at is 6-char", "")
/// );
/// ```
///
/// A locator never begins mid-word, so the digit runs of the numeric
/// shorthand dialects cannot produce a false match.
pub fn extract_grid(text: &str, default: &str) -> (String, bool) {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"\b[A-Za-z]{2}[0-9]{2}(?:[A-Za-z]{2})?").expect("bad grid regexp");
    }

    match RE.find(text) {
        Some(mtc) => (mtc.as_str().to_ascii_uppercase(), true),
        None => (default.to_owned(), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_character() {
        assert_eq!(
            ("EN82".to_owned(), true),
            extract_grid("Some text EN82 more text", "")
        );
        assert_eq!(("FN42".to_owned(), true), extract_grid("F!304 11114444 FN42", ""));
    }

    #[test]
    fn test_six_character() {
        assert_eq!(("EM15AT".to_owned(), true), extract_grid("EM15at is 6-char", ""));
        assert_eq!(("CN87UQ".to_owned(), true), extract_grid("qth cn87uq", ""));
    }

    #[test]
    fn test_default_on_miss() {
        assert_eq!(("EM15".to_owned(), false), extract_grid("No grid here", "EM15"));
        assert_eq!((String::new(), false), extract_grid("11114444", ""));
        assert_eq!((String::new(), false), extract_grid("", ""));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(("EN82".to_owned(), true), extract_grid("EN82 then FN42", ""));
    }
}
