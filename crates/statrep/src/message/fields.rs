//! The fixed set of reportable status fields

use std::fmt;

use strum::EnumMessage;

use super::status::FieldStatus;

/// One of the eight reportable conditions
///
/// Every STATREP dialect reports against the same fixed set of eight
/// conditions, though the dialects disagree about position order and
/// some use alias names on the wire (`NET` for internet, `FUEL` for
/// food supply, `CIVIL`/`POLITICAL` for crime/unrest).
///
/// ```
/// use statrep::ReportField;
///
/// assert_eq!("POWER", ReportField::Power.as_display_str());
/// assert_eq!("POWER", format!("{}", ReportField::Power));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumMessage)]
pub enum ReportField {
    /// Commercial power
    #[strum(detailed_message = "POWER")]
    Power,

    /// Public water supply
    #[strum(detailed_message = "WATER")]
    Water,

    /// Medical services
    #[strum(detailed_message = "MEDICAL")]
    Medical,

    /// Road and travel conditions
    #[strum(detailed_message = "TRAVEL")]
    Travel,

    /// Over-the-air communications
    #[strum(detailed_message = "COMMS")]
    Comms,

    /// Food supply
    #[strum(detailed_message = "FOOD")]
    Food,

    /// Crime and civil unrest
    #[strum(detailed_message = "CRIME")]
    Crime,

    /// Internet availability
    #[strum(detailed_message = "INTERNET")]
    Internet,
}

impl ReportField {
    /// Field name as it appears in display comments, like "`POWER`"
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

impl fmt::Display for ReportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

/// Status of all eight reportable conditions
///
/// A closed, fixed-shape record: every field is always present, with
/// [`FieldStatus::Unknown`] standing in for anything the sender did
/// not report. Construct with [`Default`] (all fields unknown) and
/// fill in with [`set()`](FieldReport::set), or read fields directly.
///
/// ```
/// use statrep::{FieldReport, FieldStatus, ReportField};
///
/// let mut report = FieldReport::default();
/// report.set(ReportField::Power, FieldStatus::Red);
///
/// assert_eq!(FieldStatus::Red, report.power);
/// assert_eq!(FieldStatus::Red, report.get(ReportField::Power));
/// assert_eq!(FieldStatus::Red, report.worst());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldReport {
    pub power: FieldStatus,
    pub water: FieldStatus,
    pub medical: FieldStatus,
    pub travel: FieldStatus,
    pub comms: FieldStatus,
    pub food: FieldStatus,
    pub crime: FieldStatus,
    pub internet: FieldStatus,
}

impl FieldReport {
    /// Status of the given field
    pub fn get(&self, field: ReportField) -> FieldStatus {
        match field {
            ReportField::Power => self.power,
            ReportField::Water => self.water,
            ReportField::Medical => self.medical,
            ReportField::Travel => self.travel,
            ReportField::Comms => self.comms,
            ReportField::Food => self.food,
            ReportField::Crime => self.crime,
            ReportField::Internet => self.internet,
        }
    }

    /// Assign the status of the given field
    pub fn set(&mut self, field: ReportField, status: FieldStatus) {
        match field {
            ReportField::Power => self.power = status,
            ReportField::Water => self.water = status,
            ReportField::Medical => self.medical = status,
            ReportField::Travel => self.travel = status,
            ReportField::Comms => self.comms = status,
            ReportField::Food => self.food = status,
            ReportField::Crime => self.crime = status,
            ReportField::Internet => self.internet = status,
        }
    }

    /// Worst status across all reported fields
    ///
    /// Unknown fields do not participate; the result is
    /// [`FieldStatus::Unknown`] only when *every* field is unknown.
    pub fn worst(&self) -> FieldStatus {
        let mut out = FieldStatus::Unknown;
        for field in ALL_FIELDS {
            out = out.worst(self.get(field));
        }
        out
    }
}

/// All eight fields, in canonical (full-text wire) order
pub(crate) const ALL_FIELDS: [ReportField; 8] = [
    ReportField::Power,
    ReportField::Water,
    ReportField::Medical,
    ReportField::Comms,
    ReportField::Travel,
    ReportField::Internet,
    ReportField::Food,
    ReportField::Crime,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_round_trip() {
        let mut report = FieldReport::default();
        for field in ALL_FIELDS {
            assert_eq!(FieldStatus::Unknown, report.get(field));
            report.set(field, FieldStatus::Yellow);
            assert_eq!(FieldStatus::Yellow, report.get(field));
        }
    }

    #[test]
    fn test_worst() {
        let mut report = FieldReport::default();
        assert_eq!(FieldStatus::Unknown, report.worst());

        report.set(ReportField::Food, FieldStatus::Green);
        assert_eq!(FieldStatus::Green, report.worst());

        report.set(ReportField::Travel, FieldStatus::Yellow);
        assert_eq!(FieldStatus::Yellow, report.worst());

        report.set(ReportField::Power, FieldStatus::Red);
        assert_eq!(FieldStatus::Red, report.worst());
    }
}
