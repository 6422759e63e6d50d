//! # statrep: JS8Call STATREP Decoding
//!
//! This crate classifies and decodes free-text status traffic relayed
//! over JS8Call during disaster-communication exercises. It turns one
//! raw relayed line plus its envelope metadata into a typed record:
//! a status report, an alert, a bulletin or plain message, or a
//! preserved unrecognized line.
//!
//! Radio relay paths are lossy and pass through several human and
//! software relays, so the wire format is a loose, multi-dialect
//! grammar rather than a well-formed protocol. Several independent
//! encodings share one transport:
//!
//! * full-text STATREP (`{&%}`) and forwarded STATREP (`{F%}`)
//! * two numeric shorthand encodings, `F!304` and `F!301`
//! * alerts (`{%%}`), bulletins (`{^%}`), and plain `MSG` text
//!
//! Known relay-software artifacts, such as a doubled sender callsign
//! at the start of the line, are corrected before parsing. Decoding
//! degrades gracefully: a field that cannot be determined becomes
//! [`FieldStatus::Unknown`], and a line that matches no dialect is
//! preserved verbatim rather than discarded.
//!
//! ## Example
//!
//! ```
//! use statrep::{classify, FieldStatus, ParsedOutcome, RawFrame};
//!
//! let frame = RawFrame::new(
//!     "KB8UVN: @AMRRON MSG F!304 11114444 EN82",
//!     "KB8UVN",
//!     "@AMRRON",
//!     "2026-02-08 10:32:00",
//!     14118000,
//!     10,
//! );
//!
//! match classify(&frame) {
//!     ParsedOutcome::StatusReport(rep) => {
//!         assert_eq!("EN82", rep.grid);
//!         assert_eq!(FieldStatus::Green, rep.overall);
//!         assert_eq!(FieldStatus::Unknown, rep.fields.power);
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! The engine is a pure, synchronous transformation: one
//! [`RawFrame`] in, one [`ParsedOutcome`] out, with no I/O and no
//! state between frames beyond static lookup tables. Concurrent
//! callers need no locking.
//!
//! For a complete line-oriented decoder binary, see the companion
//! crate `statdec`.

mod classify;
mod frame;
mod grid;
mod message;
mod sanitize;
mod statcodes;
mod timestamp;

pub use classify::{classify, MARKER_ALERT, MARKER_BULLETIN, MARKER_FORWARD, MARKER_STATREP};
pub use frame::RawFrame;
pub use grid::extract_grid;
pub use message::{
    AlertRecord, FieldReport, FieldStatus, MessageRecord, ParsedOutcome, ReportField, Scope,
    SourceDialect, StatusReport,
};
pub use sanitize::{sanitize_ascii, strip_duplicate_callsign};
pub use statcodes::{
    aggregate_status, expand_shorthand, format_comment, map_fulltext, map_status301,
    map_status304, DecodedFields, ShorthandError, LEN_301, LEN_304, LEN_FULLTEXT,
};
pub use timestamp::{message_id, resolve_timestamp, TimestampError};
