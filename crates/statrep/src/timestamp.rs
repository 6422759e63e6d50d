//! Envelope timestamp handling

use chrono::{NaiveDate, NaiveTime, Timelike};
use thiserror::Error;

// Hour-to-letter alphabet: 24 letters for 24 hours, skipping the
// visually ambiguous `O`.
const HOUR_LETTERS: &[u8; 24] = b"ABCDEFGHIJKLMNPQRSTUVWXY";

/// Error resolving an envelope timestamp
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimestampError {
    /// Timestamp is missing its date or time portion
    #[error("invalid timestamp: expected \"<date> <time>\"")]
    MissingField,

    /// Date or time portion does not parse
    #[error("invalid timestamp: unparseable date or time")]
    Malformed,
}

/// Resolve a loosely-spaced UTC timestamp
///
/// Relay software separates the date and time with an inconsistent
/// number of spaces. Returns the calendar date portion plus a compact
/// per-message id derived from the time of day: a letter selecting
/// the hour (from a 24-symbol alphabet that skips `O`) followed by
/// the two-digit minute.
///
/// ```
/// use statrep::resolve_timestamp;
///
/// let (date, id) = resolve_timestamp("2026-02-08   10:30:00").unwrap();
/// assert_eq!("2026-02-08", date);
/// assert_eq!("K30", id);
///
/// // single space resolves identically
/// assert_eq!(
///     (date, id),
///     resolve_timestamp("2026-02-08 10:30:00").unwrap()
/// );
/// ```
///
/// Two messages in the same minute receive the same id. That is
/// deliberate: the id provides coarse temporal bucketing for
/// deduplication and display, not uniqueness.
pub fn resolve_timestamp(utc: &str) -> Result<(String, String), TimestampError> {
    let mut parts = utc.split_whitespace();
    let date_str = parts.next().ok_or(TimestampError::MissingField)?;
    let time_str = parts.next().ok_or(TimestampError::MissingField)?;

    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| TimestampError::Malformed)?;
    let time = NaiveTime::parse_from_str(time_str, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time_str, "%H:%M"))
        .map_err(|_| TimestampError::Malformed)?;

    Ok((
        date.format("%Y-%m-%d").to_string(),
        message_id(time.hour(), time.minute()),
    ))
}

/// Coarse time-of-day message id
///
/// One hour letter (`A` for hour 0 through `Y` for hour 23, with `O`
/// skipped) followed by the zero-padded minute. Out-of-range inputs
/// are clamped.
pub fn message_id(hour: u32, minute: u32) -> String {
    let letter = HOUR_LETTERS[hour.min(23) as usize] as char;
    format!("{}{:02}", letter, minute.min(59))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_variable_spacing() {
        for utc in ["2026-02-08   10:30:00", "2026-02-08 10:30:00"] {
            let (date, id) = resolve_timestamp(utc).expect("bad timestamp");
            assert_eq!("2026-02-08", date);
            assert_eq!("K30", id);
        }
    }

    #[test]
    fn test_resolve_rejects_garbage() {
        assert_eq!(
            Err(TimestampError::MissingField),
            resolve_timestamp("2026-02-08")
        );
        assert_eq!(Err(TimestampError::MissingField), resolve_timestamp(""));
        assert_eq!(
            Err(TimestampError::Malformed),
            resolve_timestamp("not-a-date 10:30:00")
        );
        assert_eq!(
            Err(TimestampError::Malformed),
            resolve_timestamp("2026-02-08 late-morning")
        );
    }

    #[test]
    fn test_message_id_alphabet() {
        // hour 0 is the first letter, hour 23 the last, and the
        // letter O never appears
        assert_eq!("A00", message_id(0, 0));
        assert_eq!("Y59", message_id(23, 59));
        assert_eq!("N07", message_id(13, 7));
        assert_eq!("P15", message_id(14, 15));
        for hour in 0..24 {
            assert!(!message_id(hour, 0).starts_with('O'));
        }
    }
}
