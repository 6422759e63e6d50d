//! Per-field status severity

use std::fmt;

use strum::EnumMessage;

/// Severity of one reported status field
///
/// Usually constructed while decoding a digit code; see
/// [`map_status304`](crate::map_status304) and friends. STATREP
/// traffic encodes each condition as a single digit:
///
/// | Digit | Status                                    |
/// |-------|-------------------------------------------|
/// | `1`   | [green](FieldStatus::Green), normal       |
/// | `2`   | [yellow](FieldStatus::Yellow), degraded   |
/// | `3`   | [red](FieldStatus::Red), critical         |
/// | `4`   | [unknown](FieldStatus::Unknown), no report|
///
/// Statuses convert directly from and to their digit form.
///
/// ```
/// use statrep::FieldStatus;
///
/// assert_eq!(FieldStatus::Yellow, FieldStatus::from_digit('2'));
/// assert_eq!('2', FieldStatus::Yellow.as_digit());
/// assert_eq!("2", FieldStatus::Yellow.as_code_str());
/// assert_eq!("YELLOW", FieldStatus::Yellow.as_display_str());
/// assert_eq!("YELLOW", format!("{}", FieldStatus::Yellow));
/// ```
///
/// Any digit outside `1`–`4` decodes as
/// [`FieldStatus::Unknown`]. `Unknown` is *not* a severity: it means
/// the sender reported nothing for the field. When computing a
/// "worst of" result, combine with [`worst()`](FieldStatus::worst),
/// which never treats `Unknown` as more or less severe than a real
/// report.
///
/// ```
/// # use statrep::FieldStatus;
/// assert_eq!(
///     FieldStatus::Red,
///     FieldStatus::Red.worst(FieldStatus::Unknown)
/// );
/// assert_eq!(
///     FieldStatus::Unknown,
///     FieldStatus::Unknown.worst(FieldStatus::Unknown)
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumMessage)]
#[repr(u8)]
pub enum FieldStatus {
    /// Normal conditions
    #[strum(serialize = "1", detailed_message = "GREEN")]
    Green,

    /// Degraded conditions
    #[strum(serialize = "2", detailed_message = "YELLOW")]
    Yellow,

    /// Critical conditions
    #[strum(serialize = "3", detailed_message = "RED")]
    Red,

    /// Not reported or undeterminable
    ///
    /// The sender either typed `4` for the field or the field could
    /// not be decoded at all. Not comparable to the real severities.
    #[strum(serialize = "4", detailed_message = "UNKNOWN")]
    Unknown,
}

impl FieldStatus {
    /// Decode a single status digit
    ///
    /// Digits outside `1`–`4` yield [`FieldStatus::Unknown`].
    pub fn from_digit(digit: char) -> Self {
        match digit {
            '1' => FieldStatus::Green,
            '2' => FieldStatus::Yellow,
            '3' => FieldStatus::Red,
            _ => FieldStatus::Unknown,
        }
    }

    /// Status digit for this value
    pub fn as_digit(&self) -> char {
        match self {
            FieldStatus::Green => '1',
            FieldStatus::Yellow => '2',
            FieldStatus::Red => '3',
            FieldStatus::Unknown => '4',
        }
    }

    /// One-character digit string representation
    pub fn as_code_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Human-readable severity word, like "`RED`"
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// Worst of two statuses
    ///
    /// [`FieldStatus::Unknown`] never wins against a real report;
    /// the result is `Unknown` only when both sides are `Unknown`.
    pub fn worst(self, other: FieldStatus) -> FieldStatus {
        match (self, other) {
            (FieldStatus::Unknown, rhs) => rhs,
            (lhs, FieldStatus::Unknown) => lhs,
            (lhs, rhs) => {
                if lhs.severity_rank() >= rhs.severity_rank() {
                    lhs
                } else {
                    rhs
                }
            }
        }
    }

    // Green < Yellow < Red; callers must exclude Unknown
    fn severity_rank(self) -> u8 {
        match self {
            FieldStatus::Green => 1,
            FieldStatus::Yellow => 2,
            FieldStatus::Red => 3,
            FieldStatus::Unknown => 0,
        }
    }
}

impl std::default::Default for FieldStatus {
    fn default() -> Self {
        FieldStatus::Unknown
    }
}

impl From<char> for FieldStatus {
    fn from(digit: char) -> FieldStatus {
        FieldStatus::from_digit(digit)
    }
}

impl AsRef<str> for FieldStatus {
    fn as_ref(&self) -> &'static str {
        self.as_code_str()
    }
}

impl fmt::Display for FieldStatus {
    /// Printable string
    ///
    /// * The normal form is a severity word like "`YELLOW`"
    /// * The alternate form is the digit, like "`2`"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_code_str().fmt(f)
        } else {
            self.as_display_str().fmt(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_round_trip() {
        for digit in ['1', '2', '3', '4'] {
            assert_eq!(digit, FieldStatus::from_digit(digit).as_digit());
        }
        assert_eq!(FieldStatus::Unknown, FieldStatus::from_digit('9'));
        assert_eq!(FieldStatus::Unknown, FieldStatus::from_digit('x'));
    }

    #[test]
    fn test_worst() {
        use FieldStatus::*;

        assert_eq!(Red, Green.worst(Red));
        assert_eq!(Red, Red.worst(Yellow));
        assert_eq!(Yellow, Yellow.worst(Green));
        assert_eq!(Green, Green.worst(Green));

        // Unknown never outranks a real report
        assert_eq!(Green, Green.worst(Unknown));
        assert_eq!(Green, Unknown.worst(Green));
        assert_eq!(Unknown, Unknown.worst(Unknown));
    }
}
