//! STATREP digit code expansion, mapping, and scoring

use thiserror::Error;

use crate::message::{FieldReport, FieldStatus, ReportField, Scope, ALL_FIELDS};
use crate::sanitize::sanitize_ascii;

/// Required digit count for the F!304 dialect
pub const LEN_304: usize = 8;

/// Required digit count for the F!301 dialect (scope digit + 8 fields)
pub const LEN_301: usize = 9;

/// Required digit count for the full-text STATREP status code
pub const LEN_FULLTEXT: usize = 12;

/// Error expanding a hand-typed digit code
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShorthandError {
    /// A `+` appeared with no digit before it
    #[error("invalid status code: '+' with no preceding digit")]
    DanglingPlus,

    /// The code contains something other than digits and `+`
    #[error("invalid status code: unexpected character {0:?}")]
    InvalidCharacter(char),

    /// The expanded code is not the dialect's required length
    #[error("invalid status code: expected {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// Expand `+` repeat-shorthand into a fixed-length digit string
///
/// Operators compress repeated digits by typing `+` for "same digit
/// again": `"1+"` expands to `"11"`, and `"1+++"` to `"1111"`. The
/// expanded code must come out at exactly `required_len` digits;
/// anything else is an error, and the caller is expected to degrade
/// the affected fields to [`FieldStatus::Unknown`] rather than guess.
///
/// ```
/// use statrep::expand_shorthand;
///
/// assert_eq!("11114444", expand_shorthand("1+++4+++", 8).unwrap());
/// assert_eq!("12344321", expand_shorthand("12344321", 8).unwrap());
/// assert!(expand_shorthand("+1111111", 8).is_err());
/// assert!(expand_shorthand("111", 8).is_err());
/// ```
pub fn expand_shorthand(code: &str, required_len: usize) -> Result<String, ShorthandError> {
    let mut out = String::with_capacity(required_len);
    for c in code.chars() {
        match c {
            '0'..='9' => out.push(c),
            '+' => {
                let last = out.chars().last().ok_or(ShorthandError::DanglingPlus)?;
                out.push(last);
            }
            other => return Err(ShorthandError::InvalidCharacter(other)),
        }
    }

    if out.len() != required_len {
        return Err(ShorthandError::WrongLength {
            expected: required_len,
            actual: out.len(),
        });
    }
    Ok(out)
}

/// Field statuses decoded from one digit code
///
/// Output of the per-dialect digit mappers. `comment_parts` holds one
/// short display fragment per non-green field, in the dialect's field
/// order, like `"POWER RED"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedFields {
    /// Status of the eight reportable conditions
    pub fields: FieldReport,

    /// Report scope, for dialects that carry a scope digit
    pub scope: Option<Scope>,

    /// Display fragments for the non-green fields, in field order
    pub comment_parts: Vec<String>,
}

// Positional digit-to-field order shared by the two numeric
// shorthand dialects (after the F!301 scope digit is removed).
const NUMERIC_FIELD_ORDER: [ReportField; 8] = [
    ReportField::Comms,
    ReportField::Medical,
    ReportField::Travel,
    ReportField::Food,
    ReportField::Power,
    ReportField::Water,
    ReportField::Internet,
    ReportField::Crime,
];

// F!301 stations habitually leave trailing fields unreported, so a
// long tail of `4` digits carries no information. Fragments for
// unknown fields are capped for that dialect; F!304 reports them all.
const UNKNOWN_FRAGMENT_CAP_304: usize = LEN_304;
const UNKNOWN_FRAGMENT_CAP_301: usize = 3;

/// Map an expanded F!304 code to field statuses
///
/// Each of the eight digits maps 1:1 onto one field in the dialect's
/// positional order. The digit↔status mapping per position is a
/// bijection, so the original code can always be re-derived from the
/// resulting report.
///
/// ```
/// use statrep::{map_status304, FieldStatus};
///
/// let decoded = map_status304("11114444");
/// assert_eq!(FieldStatus::Unknown, decoded.fields.power);
/// assert_eq!(FieldStatus::Unknown, decoded.fields.water);
/// assert_eq!(FieldStatus::Green, decoded.fields.comms);
/// assert_eq!(4, decoded.comment_parts.len());
/// ```
pub fn map_status304(digits: &str) -> DecodedFields {
    let (fields, comment_parts) = map_positional(
        digits,
        &NUMERIC_FIELD_ORDER,
        UNKNOWN_FRAGMENT_CAP_304,
    );
    DecodedFields {
        fields,
        scope: None,
        comment_parts,
    }
}

/// Map an expanded F!301 code to field statuses
///
/// The leading digit is the report [`Scope`]; the remaining eight
/// digits map positionally like [`map_status304`].
///
/// ```
/// use statrep::{map_status301, FieldStatus, Scope};
///
/// let decoded = map_status301("111114444");
/// assert_eq!(Some(Scope::MyLocation), decoded.scope);
/// assert_eq!(FieldStatus::Unknown, decoded.fields.power);
/// assert_eq!(3, decoded.comment_parts.len());
/// ```
pub fn map_status301(digits: &str) -> DecodedFields {
    let mut chars = digits.chars();
    let scope = chars.next().map(Scope::from_digit);
    let (fields, comment_parts) = map_positional(
        chars.as_str(),
        &NUMERIC_FIELD_ORDER,
        UNKNOWN_FRAGMENT_CAP_301,
    );
    DecodedFields {
        fields,
        scope,
        comment_parts,
    }
}

/// Map an expanded 12-digit full-text STATREP code to field statuses
///
/// The full-text dialects carry twelve digits in column order:
/// reported overall, power, water, medical, comms, travel, net,
/// fuel, food, crime, civil, political. `net` aliases internet,
/// `fuel` aliases food, and `civil`/`political` alias crime; an alias
/// digit is consulted only when its primary field is unknown. The
/// reported-overall digit is ignored in favor of recomputing the
/// worst field status.
pub fn map_fulltext(digits: &str) -> DecodedFields {
    let digit_at = |idx: usize| {
        digits
            .chars()
            .nth(idx)
            .map(FieldStatus::from_digit)
            .unwrap_or_default()
    };

    let mut fields = FieldReport {
        power: digit_at(1),
        water: digit_at(2),
        medical: digit_at(3),
        comms: digit_at(4),
        travel: digit_at(5),
        internet: digit_at(6),
        food: digit_at(8),
        crime: digit_at(9),
    };

    // alias columns fill in for unreported primaries
    if fields.food == FieldStatus::Unknown {
        fields.food = digit_at(7); // fuel
    }
    if fields.crime == FieldStatus::Unknown {
        fields.crime = digit_at(10); // civil
    }
    if fields.crime == FieldStatus::Unknown {
        fields.crime = digit_at(11); // political
    }

    let comment_parts = fragments(&ALL_FIELDS, |f| fields.get(f), ALL_FIELDS.len());
    DecodedFields {
        fields,
        scope: None,
        comment_parts,
    }
}

// Positional mapper for the numeric dialects. Missing trailing
// digits decode as Unknown so a short code still yields a complete
// (if mostly-unknown) report.
fn map_positional(
    digits: &str,
    order: &[ReportField; 8],
    unknown_cap: usize,
) -> (FieldReport, Vec<String>) {
    let mut fields = FieldReport::default();
    for (field, digit) in order.iter().zip(digits.chars()) {
        fields.set(*field, FieldStatus::from_digit(digit));
    }

    let parts = fragments(order, |f| fields.get(f), unknown_cap);
    (fields, parts)
}

// Build "FIELD SEVERITY" fragments for every non-green field, in the
// given order, emitting at most `unknown_cap` fragments for unknown
// fields.
fn fragments<F>(order: &[ReportField], status_of: F, unknown_cap: usize) -> Vec<String>
where
    F: Fn(ReportField) -> FieldStatus,
{
    let mut parts = Vec::new();
    let mut unknowns = 0usize;
    for &field in order {
        match status_of(field) {
            FieldStatus::Green => {}
            FieldStatus::Unknown => {
                if unknowns < unknown_cap {
                    unknowns += 1;
                    parts.push(format!(
                        "{} {}",
                        field.as_display_str(),
                        FieldStatus::Unknown.as_display_str()
                    ));
                }
            }
            status => {
                parts.push(format!("{} {}", field.as_display_str(), status.as_display_str()))
            }
        }
    }
    parts
}

/// Compute the overall severity of a status report
///
/// A report without a locatable grid reference is not actionable, so
/// `grid_found == false` is unconditionally
/// [`FieldStatus::Unknown`] regardless of digit content. Otherwise
/// each of the eight digits contributes a weight (green 1, yellow 2,
/// red 3, unknown 1 — an unreported field is mildly elevated, not
/// ignored and not maximally severe) and the total maps through fixed
/// thresholds.
///
/// The F!301 caller must pass the eight field digits only, with the
/// scope digit already removed.
///
/// ```
/// use statrep::{aggregate_status, FieldStatus};
///
/// assert_eq!(FieldStatus::Green, aggregate_status("11111111", true));
/// assert_eq!(FieldStatus::Yellow, aggregate_status("22224444", true));
/// assert_eq!(FieldStatus::Red, aggregate_status("33334444", true));
/// assert_eq!(FieldStatus::Unknown, aggregate_status("11111111", false));
/// ```
pub fn aggregate_status(digits: &str, grid_found: bool) -> FieldStatus {
    if !grid_found {
        return FieldStatus::Unknown;
    }

    let score: u32 = digits
        .chars()
        .map(|c| match c {
            '2' => 2,
            '3' => 3,
            _ => 1,
        })
        .sum();

    // empirically fixed contract thresholds, identical for all dialects
    if score <= 10 {
        FieldStatus::Green
    } else if score <= 12 {
        FieldStatus::Yellow
    } else {
        FieldStatus::Red
    }
}

/// Render the final display comment
///
/// Joins the non-green fragments with `", "` and appends any
/// free-text remainder captured after the status code, sanitized to
/// printable ASCII. Nothing to say yields an empty string, never a
/// placeholder.
pub fn format_comment(parts: &[String], remainder: &str) -> String {
    let remainder = sanitize_ascii(remainder.trim());
    let joined = parts.join(", ");

    if joined.is_empty() {
        remainder.into_owned()
    } else if remainder.is_empty() {
        joined
    } else {
        format!("{} {}", joined, remainder)
    }
}
