//! Report scope for the F!301 dialect

use std::fmt;

use strum::EnumMessage;

/// Geographic breadth of a status report
///
/// The F!301 dialect carries one extra leading digit ahead of the
/// eight status fields which states how wide an area the report
/// covers. Full-text STATREPs carry the same digit inside their
/// status code.
///
/// ```
/// use statrep::Scope;
///
/// assert_eq!(Scope::MyLocation, Scope::from_digit('1'));
/// assert_eq!(Scope::Community, Scope::from_digit('2'));
/// assert_eq!("My Location", Scope::MyLocation.as_display_str());
/// assert_eq!("My Location", format!("{}", Scope::MyLocation));
/// ```
///
/// Unrecognized scope digits decode as [`Scope::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumMessage)]
pub enum Scope {
    /// The sender's own location only
    #[strum(detailed_message = "My Location")]
    MyLocation,

    /// The sender's immediate community
    #[strum(detailed_message = "Community")]
    Community,

    /// County-wide conditions
    #[strum(detailed_message = "County")]
    County,

    /// Regional conditions
    #[strum(detailed_message = "Region")]
    Region,

    /// Scope digit missing or unrecognized
    #[strum(detailed_message = "Unknown Scope")]
    Unknown,
}

impl Scope {
    /// Decode a scope digit
    ///
    /// Digits outside `1`–`4` yield [`Scope::Unknown`].
    pub fn from_digit(digit: char) -> Self {
        match digit {
            '1' => Scope::MyLocation,
            '2' => Scope::Community,
            '3' => Scope::County,
            '4' => Scope::Region,
            _ => Scope::Unknown,
        }
    }

    /// Human-readable string, like "`My Location`"
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

impl std::default::Default for Scope {
    fn default() -> Self {
        Scope::Unknown
    }
}

impl From<char> for Scope {
    fn from(digit: char) -> Scope {
        Scope::from_digit(digit)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}
