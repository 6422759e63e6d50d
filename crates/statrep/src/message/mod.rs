//! Decoded record types produced by the classifier

mod fields;
mod scope;
mod status;

use std::fmt;

use strum::EnumMessage;

pub use fields::{FieldReport, ReportField};
pub use scope::Scope;
pub use status::FieldStatus;

pub(crate) use fields::ALL_FIELDS;

/// Which wire encoding a status report arrived in
///
/// ```
/// use statrep::SourceDialect;
///
/// assert_eq!("f304", SourceDialect::Numeric304.as_code_str());
/// assert_eq!("F!304 QuickSTATREP", format!("{}", SourceDialect::Numeric304));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumMessage)]
pub enum SourceDialect {
    /// Full-text STATREP, sent by the reporting station itself (`{&%}`)
    #[strum(serialize = "statrep", detailed_message = "Full-text STATREP")]
    FullText,

    /// Full-text STATREP relayed on behalf of another station (`{F%}`)
    #[strum(serialize = "statrep_fwd", detailed_message = "Forwarded STATREP")]
    Forwarded,

    /// Eight-digit numeric shorthand (`F!304`)
    #[strum(serialize = "f304", detailed_message = "F!304 QuickSTATREP")]
    Numeric304,

    /// Nine-digit numeric shorthand with scope digit (`F!301`)
    #[strum(serialize = "f301", detailed_message = "F!301 QuickSTATREP")]
    Numeric301,
}

impl SourceDialect {
    /// Short machine-friendly tag, like "`f304`"
    pub fn as_code_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Human-readable dialect name
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

impl fmt::Display for SourceDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_code_str().fmt(f)
        } else {
            self.as_display_str().fmt(f)
        }
    }
}

/// A fully-decoded status report
///
/// One record per received STATREP, regardless of which dialect
/// carried it. Fields the sender did not (or could not) report are
/// [`FieldStatus::Unknown`]; string fields the dialect does not carry
/// are empty. The envelope fields (`from_call`, `target`, `date`,
/// `message_id`, `frequency_hz`, `snr`) are copied from the received
/// frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusReport {
    /// Wire encoding this report arrived in
    pub dialect: SourceDialect,

    /// Sending station callsign
    pub from_call: String,

    /// Recipient callsign or group (e.g. `@AMRRON`)
    pub target: String,

    /// Calendar date of receipt, `YYYY-MM-DD`
    pub date: String,

    /// Coarse per-message id (hour letter + minute)
    pub message_id: String,

    /// Maidenhead locator, uppercase, or empty if none was found
    pub grid: String,

    /// Operator-assigned precedence tag, or empty
    pub precedence: String,

    /// Operator-assigned report id (full-text dialects), or empty
    pub report_id: String,

    /// Geographic breadth of the report, where the dialect carries it
    pub scope: Option<Scope>,

    /// Original reporting station, for forwarded reports
    pub origin_call: Option<String>,

    /// Overall severity; see [`crate::aggregate_status`]
    pub overall: FieldStatus,

    /// Status of the eight reportable conditions
    pub fields: FieldReport,

    /// Display comment: non-green fragments plus free-text remainder
    pub comment: String,

    /// Dial frequency in Hz
    pub frequency_hz: u64,

    /// Signal report (dB SNR)
    pub snr: i32,
}

/// A decoded alert line (`{%%}`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertRecord {
    /// Recipient callsign or group
    pub target: String,

    /// Operator-assigned alert color code
    pub color_code: u32,

    /// Alert title
    pub title: String,

    /// Alert body text
    pub body: String,
}

/// A plain or bulletin-framed text message
///
/// Bulletin framing (the `,NNN,` id field and the `{^%}` marker) is
/// stripped from `body` before the record is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageRecord {
    /// Sending station callsign
    pub from_call: String,

    /// Recipient callsign or group
    pub target: String,

    /// Message text
    pub body: String,
}

/// Outcome of classifying one received frame
///
/// Every frame produces exactly one outcome. Traffic that matches no
/// known dialect is preserved verbatim (after ASCII sanitization) as
/// [`ParsedOutcome::Unrecognized`] so that operators can audit
/// mis-parsed lines; the classifier never discards input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedOutcome {
    /// A status report in any STATREP dialect
    StatusReport(StatusReport),

    /// An alert line
    Alert(AlertRecord),

    /// A plain or bulletin message
    Message(MessageRecord),

    /// Traffic that matched no known dialect
    Unrecognized(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_strings() {
        assert_eq!("statrep", SourceDialect::FullText.as_code_str());
        assert_eq!("statrep_fwd", SourceDialect::Forwarded.as_code_str());
        assert_eq!("f301", format!("{:#}", SourceDialect::Numeric301));
        assert_eq!("Forwarded STATREP", SourceDialect::Forwarded.as_display_str());
    }
}
