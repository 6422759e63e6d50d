//! Dialect classification and dispatch

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::frame::RawFrame;
use crate::grid::extract_grid;
use crate::message::{
    AlertRecord, FieldReport, FieldStatus, MessageRecord, ParsedOutcome, SourceDialect,
    StatusReport,
};
use crate::sanitize::{sanitize_ascii, strip_duplicate_callsign};
use crate::statcodes::{
    aggregate_status, expand_shorthand, format_comment, map_fulltext, map_status301,
    map_status304, DecodedFields, LEN_301, LEN_304, LEN_FULLTEXT,
};
use crate::timestamp::resolve_timestamp;

/// Own-report full-text STATREP marker
pub const MARKER_STATREP: &str = "{&%}";
/// Forwarded full-text STATREP marker
pub const MARKER_FORWARD: &str = "{F%}";
/// Alert marker
pub const MARKER_ALERT: &str = "{%%}";
/// Bulletin marker
pub const MARKER_BULLETIN: &str = "{^%}";

/// Classify one received frame
///
/// Sanitizes the line, corrects the doubled-callsign relay artifact,
/// then dispatches on the first dialect marker found, in fixed
/// precedence order: alert, bulletin, full-text STATREP (own or
/// forwarded), `F!304`/`F!301` numeric shorthand, generic `MSG`. The
/// markers are mutually exclusive in valid traffic, but the order
/// still decides what a malformed line becomes.
///
/// Every frame produces exactly one outcome; lines that match
/// nothing are preserved as [`ParsedOutcome::Unrecognized`]. This
/// function never panics on any input.
///
/// ```
/// use statrep::{classify, FieldStatus, ParsedOutcome, RawFrame};
///
/// let frame = RawFrame::new(
///     "KB8UVN: @AMRRON MSG F!304 11114444 EN82",
///     "KB8UVN",
///     "@AMRRON",
///     "2026-02-08 10:32:00",
///     14118000,
///     10,
/// );
///
/// match classify(&frame) {
///     ParsedOutcome::StatusReport(rep) => {
///         assert_eq!("EN82", rep.grid);
///         assert_eq!(FieldStatus::Green, rep.overall);
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn classify(frame: &RawFrame) -> ParsedOutcome {
    let sanitized = sanitize_ascii(&frame.text);
    let line = strip_duplicate_callsign(&sanitized, &frame.from_call);

    let (date, message_id) = match resolve_timestamp(&frame.utc) {
        Ok(pair) => pair,
        Err(err) => {
            warn!("frame from {}: {}", frame.from_call, err);
            (frame.utc.trim().to_owned(), String::new())
        }
    };

    // first match wins
    if line.contains(MARKER_ALERT) {
        debug!("alert marker from {}", frame.from_call);
        return match parse_alert(&line) {
            Some(alert) => ParsedOutcome::Alert(alert),
            None => unrecognized(&line),
        };
    }

    if line.contains(MARKER_BULLETIN) {
        debug!("bulletin marker from {}", frame.from_call);
        return match parse_message(&line) {
            Some(msg) => ParsedOutcome::Message(msg),
            None => unrecognized(&line),
        };
    }

    if line.contains(MARKER_STATREP) || line.contains(MARKER_FORWARD) {
        debug!("full-text STATREP marker from {}", frame.from_call);
        return match parse_fulltext(frame, &line, &date, &message_id) {
            Some(rep) => ParsedOutcome::StatusReport(rep),
            None => unrecognized(&line),
        };
    }

    if let Some(rep) = parse_numeric(frame, &line, &date, &message_id) {
        return ParsedOutcome::StatusReport(rep);
    }

    if let Some(msg) = parse_message(&line) {
        return ParsedOutcome::Message(msg);
    }

    debug!("no marker matched for line from {}", frame.from_call);
    unrecognized(&line)
}

fn unrecognized(line: &str) -> ParsedOutcome {
    ParsedOutcome::Unrecognized(line.to_owned())
}

// Alert lines carry the target, then a comma-delimited color code,
// title, and body, then the marker:
//
//   W1ABC: @ALL ,1,Test Alert,This is a test alert message,{%%}
fn parse_alert(line: &str) -> Option<AlertRecord> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"(@\w+)\s*,(.+?),?\{%%\}").expect("bad alert regexp");
    }

    let caps = RE.captures(line)?;
    let target = caps.get(1)?.as_str().trim().to_owned();
    let fields: Vec<&str> = caps.get(2)?.as_str().trim().splitn(3, ',').collect();
    if fields.len() < 3 {
        warn!("alert line has too few fields");
        return None;
    }

    let color_code = match fields[0].trim().parse() {
        Ok(code) => code,
        Err(_) => {
            warn!("alert color code {:?} is not numeric", fields[0]);
            return None;
        }
    };

    Some(AlertRecord {
        target,
        color_code,
        title: sanitize_ascii(fields[1].trim()).into_owned(),
        body: sanitize_ascii(fields[2].trim()).into_owned(),
    })
}

// Full-text STATREPs carry a comma-delimited field list before the
// marker: grid, precedence, report id, 12-digit status code, free
// comment, and (for forwarded reports) the original sender:
//
//   W8APP: @AMRRON ,EN82,1,174,111111111111,SUNNY MORNING,{&%}
fn parse_fulltext(
    frame: &RawFrame,
    line: &str,
    date: &str,
    message_id: &str,
) -> Option<StatusReport> {
    lazy_static! {
        static ref RE_OWN: Regex = Regex::new(r",(.+?),?\{&%\}").expect("bad statrep regexp");
        static ref RE_FWD: Regex = Regex::new(r",(.+?),?\{F%\}").expect("bad forward regexp");
    }

    let (dialect, caps) = if line.contains(MARKER_FORWARD) {
        (SourceDialect::Forwarded, RE_FWD.captures(line)?)
    } else {
        (SourceDialect::FullText, RE_OWN.captures(line)?)
    };

    let fields: Vec<&str> = caps.get(1)?.as_str().split(',').collect();
    if fields.len() < 4 {
        warn!(
            "{} from {} has {} fields, need 4",
            dialect,
            frame.from_call,
            fields.len()
        );
        return None;
    }

    let grid = fields[0].trim().to_ascii_uppercase();
    let precedence = fields[1].trim().to_owned();
    let report_id = fields[2].trim().to_owned();
    let code = fields[3].trim();
    let remainder = fields.get(4).map(|f| f.trim()).unwrap_or("");
    let origin_call = match dialect {
        SourceDialect::Forwarded => fields.get(5).map(|f| f.trim().to_owned()),
        _ => None,
    };

    let decoded = match expand_shorthand(code, LEN_FULLTEXT) {
        Ok(digits) => map_fulltext(&digits),
        Err(err) => {
            warn!("{} from {}: {}", dialect, frame.from_call, err);
            DecodedFields {
                fields: FieldReport::default(),
                scope: None,
                comment_parts: Vec::new(),
            }
        }
    };

    // the reported overall digit is untrusted; recompute
    let overall = decoded.fields.worst();
    let comment = format_comment(&decoded.comment_parts, remainder);

    Some(StatusReport {
        dialect,
        from_call: frame.from_call.clone(),
        target: frame.target.clone(),
        date: date.to_owned(),
        message_id: message_id.to_owned(),
        grid,
        precedence,
        report_id,
        scope: decoded.scope,
        origin_call,
        overall,
        fields: decoded.fields,
        comment,
        frequency_hz: frame.frequency_hz,
        snr: frame.snr,
    })
}

// Numeric shorthand: a fixed prefix, the digit code (possibly with
// `+` shorthand), and optional trailing free text. Some relay
// software appends a stray ">]", which is dropped:
//
//   KB8UVN: @AMRRON MSG F!304 11114444 EN82
fn parse_numeric(
    frame: &RawFrame,
    line: &str,
    date: &str,
    message_id: &str,
) -> Option<StatusReport> {
    lazy_static! {
        static ref RE_304: Regex =
            Regex::new(r"(?i)F!304\s+([0-9+]+)\s*(.*?)(?:>\])?$").expect("bad F!304 regexp");
        static ref RE_301: Regex =
            Regex::new(r"(?i)F!301\s+([0-9+]+)\s*(.*?)(?:>\])?$").expect("bad F!301 regexp");
    }

    let (dialect, caps, want) = if let Some(caps) = RE_304.captures(line) {
        (SourceDialect::Numeric304, caps, LEN_304)
    } else if let Some(caps) = RE_301.captures(line) {
        (SourceDialect::Numeric301, caps, LEN_301)
    } else {
        return None;
    };

    let code = caps.get(1)?.as_str();
    let remainder = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    let (grid, grid_found) = extract_grid(remainder, "");

    let (decoded, overall) = match expand_shorthand(code, want) {
        Ok(digits) => {
            let decoded = match dialect {
                SourceDialect::Numeric301 => map_status301(&digits),
                _ => map_status304(&digits),
            };
            // the scope digit does not participate in scoring
            let window = match dialect {
                SourceDialect::Numeric301 => &digits[1..],
                _ => &digits[..],
            };
            let overall = aggregate_status(window, grid_found);
            (decoded, overall)
        }
        Err(err) => {
            warn!("{} from {}: {}", dialect, frame.from_call, err);
            let decoded = DecodedFields {
                fields: FieldReport::default(),
                scope: None,
                comment_parts: Vec::new(),
            };
            (decoded, FieldStatus::Unknown)
        }
    };

    let comment = format_comment(&decoded.comment_parts, remainder);

    Some(StatusReport {
        dialect,
        from_call: frame.from_call.clone(),
        target: frame.target.clone(),
        date: date.to_owned(),
        message_id: message_id.to_owned(),
        grid,
        precedence: String::new(),
        report_id: String::new(),
        scope: decoded.scope,
        origin_call: None,
        overall,
        fields: decoded.fields,
        comment,
        frequency_hz: frame.frequency_hz,
        snr: frame.snr,
    })
}

// Plain and bulletin messages: "<call>: <target> MSG <text>". For
// bulletins, the ",NNN," id field and the marker are stripped from
// the text before storage.
fn parse_message(line: &str) -> Option<MessageRecord> {
    lazy_static! {
        static ref RE_MSG: Regex =
            Regex::new(r"(?i)^(\w+):\s+(@?\w+)\s+MSG\s+(.+)$").expect("bad message regexp");
        static ref RE_BULLETIN_ID: Regex =
            Regex::new(r"^\s*,\d{3},\s*").expect("bad bulletin regexp");
    }

    let caps = RE_MSG.captures(line)?;
    let from_call = caps.get(1)?.as_str().trim().to_owned();
    let target = caps.get(2)?.as_str().trim().to_owned();
    let mut body = caps.get(3)?.as_str().to_owned();

    if body.contains(MARKER_BULLETIN) {
        body = RE_BULLETIN_ID.replace(&body, "").into_owned();
        body = body.replace(",{^%}", "");
        body = body.replace(MARKER_BULLETIN, "");
    }

    Some(MessageRecord {
        from_call,
        target,
        body: sanitize_ascii(body.trim()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Scope;

    fn frame(text: &str, from_call: &str) -> RawFrame {
        RawFrame::new(
            text,
            from_call,
            "@AMRRON",
            "2026-02-08   10:30:00",
            14118000,
            -3,
        )
    }

    fn expect_statrep(outcome: ParsedOutcome) -> StatusReport {
        match outcome {
            ParsedOutcome::StatusReport(rep) => rep,
            other => panic!("expected status report, got {:?}", other),
        }
    }

    #[test]
    fn test_fulltext_statrep() {
        let f = frame(
            "W8APP: @AMRRON ,EN82,1,174,111111111111,MI BEAUTIFUL SUNNY MORNING,{&%}",
            "W8APP",
        );
        let rep = expect_statrep(classify(&f));

        assert_eq!(SourceDialect::FullText, rep.dialect);
        assert_eq!("EN82", rep.grid);
        assert_eq!("1", rep.precedence);
        assert_eq!("174", rep.report_id);
        assert_eq!(FieldStatus::Green, rep.overall);
        assert_eq!(FieldStatus::Green, rep.fields.power);
        assert_eq!("MI BEAUTIFUL SUNNY MORNING", rep.comment);
        assert_eq!("2026-02-08", rep.date);
        assert_eq!("K30", rep.message_id);
        assert_eq!(None, rep.origin_call);
    }

    #[test]
    fn test_forwarded_statrep() {
        let f = frame(
            "W1FWD: @AMRRON ,FN42,2,175,222222222222,RELAYED MESSAGE,W8APP,{F%}",
            "W1FWD",
        );
        let rep = expect_statrep(classify(&f));

        assert_eq!(SourceDialect::Forwarded, rep.dialect);
        assert_eq!("FN42", rep.grid);
        assert_eq!(FieldStatus::Yellow, rep.overall);
        assert_eq!(FieldStatus::Yellow, rep.fields.water);
        assert_eq!(Some("W8APP".to_owned()), rep.origin_call);
    }

    #[test]
    fn test_fulltext_too_few_fields() {
        let f = frame("W8APP: @AMRRON ,EN82,1,{&%}", "W8APP");
        assert!(matches!(classify(&f), ParsedOutcome::Unrecognized(_)));
    }

    #[test]
    fn test_f304() {
        let f = frame("KB8UVN: @AMRRON MSG F!304 11114444 EN82", "KB8UVN");
        let rep = expect_statrep(classify(&f));

        assert_eq!(SourceDialect::Numeric304, rep.dialect);
        assert_eq!("EN82", rep.grid);
        assert_eq!(FieldStatus::Green, rep.overall);
        assert_eq!(FieldStatus::Unknown, rep.fields.power);
        assert_eq!(FieldStatus::Green, rep.fields.comms);
        assert_eq!(None, rep.scope);
        // four unknown fields yield four fragments
        assert!(rep.comment.starts_with("POWER UNKNOWN, WATER UNKNOWN"));
    }

    #[test]
    fn test_f304_without_grid() {
        let f = frame("KB8UVN: @AMRRON MSG F!304 11111111", "KB8UVN");
        let rep = expect_statrep(classify(&f));

        assert_eq!("", rep.grid);
        assert_eq!(FieldStatus::Unknown, rep.overall);
        assert_eq!(FieldStatus::Green, rep.fields.power);
    }

    #[test]
    fn test_f304_shorthand_and_artifact() {
        let f = frame("KB8UVN: @AMRRON MSG F!304 1+++4+++ EN82>]", "KB8UVN");
        let rep = expect_statrep(classify(&f));

        assert_eq!("EN82", rep.grid);
        assert_eq!(FieldStatus::Unknown, rep.fields.power);
        assert_eq!(FieldStatus::Green, rep.fields.comms);
    }

    #[test]
    fn test_f304_malformed_shorthand() {
        // dangling plus: fields degrade to Unknown, frame still decodes
        let f = frame("KB8UVN: @AMRRON MSG F!304 +1114444 EN82", "KB8UVN");
        let rep = expect_statrep(classify(&f));

        assert_eq!("EN82", rep.grid);
        assert_eq!(FieldStatus::Unknown, rep.overall);
        assert_eq!(FieldReport::default(), rep.fields);
    }

    #[test]
    fn test_f301() {
        let f = frame("KB8UVN: @AMRRON MSG F!301 111114444 FN42", "KB8UVN");
        let rep = expect_statrep(classify(&f));

        assert_eq!(SourceDialect::Numeric301, rep.dialect);
        assert_eq!("FN42", rep.grid);
        assert_eq!(Some(Scope::MyLocation), rep.scope);
        assert_eq!(FieldStatus::Unknown, rep.fields.power);
        // scoring excludes the scope digit: 11114444 scores green
        assert_eq!(FieldStatus::Green, rep.overall);
    }

    #[test]
    fn test_alert() {
        let f = frame(
            "W1ABC: @ALL ,1,Test Alert,This is a test alert message,{%%}",
            "W1ABC",
        );
        match classify(&f) {
            ParsedOutcome::Alert(alert) => {
                assert_eq!("@ALL", alert.target);
                assert_eq!(1, alert.color_code);
                assert_eq!("Test Alert", alert.title);
                assert_eq!("This is a test alert message", alert.body);
            }
            other => panic!("expected alert, got {:?}", other),
        }
    }

    #[test]
    fn test_alert_too_few_fields() {
        let f = frame("W1ABC: @ALL ,1,Missing body,{%%}", "W1ABC");
        assert!(matches!(classify(&f), ParsedOutcome::Unrecognized(_)));
    }

    #[test]
    fn test_plain_message() {
        let f = frame(
            "W8APP: @AMRRON MSG Hello everyone this is a test message",
            "W8APP",
        );
        match classify(&f) {
            ParsedOutcome::Message(msg) => {
                assert_eq!("W8APP", msg.from_call);
                assert_eq!("@AMRRON", msg.target);
                assert_eq!("Hello everyone this is a test message", msg.body);
            }
            other => panic!("expected message, got {:?}", other),
        }
    }

    #[test]
    fn test_bulletin_message() {
        let f = frame("KD9DSS: @AMRRON MSG ,223,Test bulletin content,{^%}", "KD9DSS");
        match classify(&f) {
            ParsedOutcome::Message(msg) => {
                assert_eq!("KD9DSS", msg.from_call);
                assert_eq!("Test bulletin content", msg.body);
            }
            other => panic!("expected message, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_callsign_stripped() {
        let f = frame(
            "W8APP: W8APP: @AMRRON MSG Testing duplicate callsign handling",
            "W8APP",
        );
        match classify(&f) {
            ParsedOutcome::Message(msg) => {
                assert_eq!("W8APP", msg.from_call);
                assert_eq!("Testing duplicate callsign handling", msg.body);
            }
            other => panic!("expected message, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_preserved() {
        let f = frame("CQ CQ CQ DE KB8UVN KB8UVN K", "KB8UVN");
        match classify(&f) {
            ParsedOutcome::Unrecognized(text) => {
                assert_eq!("CQ CQ CQ DE KB8UVN KB8UVN K", text);
            }
            other => panic!("expected unrecognized, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_is_sanitized() {
        let f = frame("garbled \u{7}\u{fffd} noise", "KB8UVN");
        match classify(&f) {
            ParsedOutcome::Unrecognized(text) => assert_eq!("garbled  noise", text),
            other => panic!("expected unrecognized, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_timestamp_degrades() {
        let f = RawFrame::new(
            "W8APP: @AMRRON MSG F!304 11111111 EN82",
            "W8APP",
            "@AMRRON",
            "whenever",
            14118000,
            0,
        );
        let rep = expect_statrep(classify(&f));
        assert_eq!("whenever", rep.date);
        assert_eq!("", rep.message_id);
    }
}
