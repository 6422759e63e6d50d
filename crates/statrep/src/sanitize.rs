//! Text sanitization for relayed traffic

use std::borrow::Cow;

/// Strip everything outside printable ASCII
///
/// Radio relay paths deliver control characters and mis-decoded
/// non-ASCII bytes that would otherwise break marker matching.
/// Everything outside `0x20`–`0x7E` is removed; the surviving
/// characters keep their relative order and no substitution
/// characters are inserted.
///
/// ```
/// use statrep::sanitize_ascii;
///
/// assert_eq!("Hello World", sanitize_ascii("Hello World"));
/// assert_eq!("Test", sanitize_ascii("Test\u{0}\u{1}\u{2}"));
/// assert_eq!("Caf", sanitize_ascii("Café"));
/// ```
///
/// Clean input is returned borrowed and unchanged, so the function
/// is idempotent.
pub fn sanitize_ascii(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_printable_ascii) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| is_printable_ascii(c)).collect())
    }
}

#[inline]
fn is_printable_ascii(c: char) -> bool {
    ('\u{20}'..='\u{7e}').contains(&c)
}

/// Collapse a doubled callsign prefix
///
/// Some relay software emits the sender callsign twice at the start
/// of a line, as `"<CALL>: <CALL>: "`. If `line` starts with that
/// exact doubled prefix for `from_call`, the duplicate is removed.
/// Anything else, including a single prefix or an envelope callsign
/// that carries a portable suffix absent from the line text, is
/// returned unchanged.
///
/// ```
/// use statrep::strip_duplicate_callsign;
///
/// assert_eq!(
///     "W8APP: @AMRRON MSG Test",
///     strip_duplicate_callsign("W8APP: W8APP: @AMRRON MSG Test", "W8APP")
/// );
/// assert_eq!(
///     "W8APP: @AMRRON MSG Test",
///     strip_duplicate_callsign("W8APP: @AMRRON MSG Test", "W8APP")
/// );
/// ```
pub fn strip_duplicate_callsign<'l>(line: &'l str, from_call: &str) -> Cow<'l, str> {
    if from_call.is_empty() {
        return Cow::Borrowed(line);
    }

    let single = format!("{}: ", from_call);
    let doubled = format!("{0}: {0}: ", from_call);
    if let Some(rest) = line.strip_prefix(&doubled) {
        Cow::Owned(format!("{}{}", single, rest))
    } else {
        Cow::Borrowed(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_identity_on_clean_input() {
        const CLEAN: &str = "Normal ASCII 123!@#";
        assert_eq!(CLEAN, sanitize_ascii(CLEAN));
        assert!(matches!(sanitize_ascii(CLEAN), Cow::Borrowed(_)));
    }

    #[test]
    fn test_sanitize_strips_non_ascii() {
        assert_eq!("Test", sanitize_ascii("Test\x00\x01\x02"));
        assert_eq!("Caf", sanitize_ascii("Café"));
        assert_eq!("Test", sanitize_ascii("Test™®©"));
        assert_eq!("", sanitize_ascii(""));
    }

    #[test]
    fn test_sanitize_idempotent() {
        const DIRTY: &str = "A\x07B\u{2603}C";
        let once = sanitize_ascii(DIRTY).into_owned();
        assert_eq!(once, sanitize_ascii(&once));
    }

    #[test]
    fn test_strip_duplicate() {
        assert_eq!(
            "W8APP: @AMRRON MSG Test",
            strip_duplicate_callsign("W8APP: W8APP: @AMRRON MSG Test", "W8APP")
        );
        assert_eq!(
            "KB8UVN: @ALL MSG Hello",
            strip_duplicate_callsign("KB8UVN: KB8UVN: @ALL MSG Hello", "KB8UVN")
        );
    }

    #[test]
    fn test_strip_duplicate_no_change() {
        // no duplicate present
        assert_eq!(
            "W8APP: @AMRRON MSG Test",
            strip_duplicate_callsign("W8APP: @AMRRON MSG Test", "W8APP")
        );

        // envelope callsign carries a suffix the line text does not;
        // the match is exact, so the line passes through untouched
        assert_eq!(
            "N0DDK: N0DDK: @AMRRON MSG",
            strip_duplicate_callsign("N0DDK: N0DDK: @AMRRON MSG", "N0DDK/P")
        );

        // different station entirely
        assert_eq!(
            "W1AW: W1AW: @AMRRON MSG",
            strip_duplicate_callsign("W1AW: W1AW: @AMRRON MSG", "W8APP")
        );
    }
}
