//! Frame reading and record printing
//!
//! The input is one tab-separated frame per line:
//!
//! ```txt
//! FROM <TAB> TARGET <TAB> UTC <TAB> FREQ <TAB> SNR <TAB> TEXT
//! ```
//!
//! Each well-formed frame is classified and printed as exactly one
//! output line. Malformed frames are logged and skipped; decoding
//! itself never fails, so every accepted frame produces output.

use std::io::BufRead;

use log::{debug, warn};

use statrep::{classify, ParsedOutcome, RawFrame};

/// Counters for one decoding run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames accepted and classified
    pub frames: usize,

    /// Input lines skipped as malformed
    pub skipped: usize,

    /// Frames that classified as `Unrecognized`
    pub unrecognized: usize,
}

/// Run the decoder over every line of `input`
///
/// Reads until EOF. Returns counters for the run; I/O errors on the
/// input stream end the run early with a warning rather than
/// aborting.
pub fn run<R>(input: R) -> RunStats
where
    R: BufRead,
{
    let mut stats = RunStats::default();

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("input read error, ending run: {}", err);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let frame = match parse_frame(&line) {
            Some(frame) => frame,
            None => {
                stats.skipped += 1;
                continue;
            }
        };

        stats.frames += 1;
        let outcome = classify(&frame);
        if matches!(outcome, ParsedOutcome::Unrecognized(_)) {
            stats.unrecognized += 1;
        }
        println!("{}", render(&outcome));
    }

    debug!(
        "run complete: {} frames, {} skipped, {} unrecognized",
        stats.frames, stats.skipped, stats.unrecognized
    );
    stats
}

// Split one tab-separated input line into a frame
fn parse_frame(line: &str) -> Option<RawFrame> {
    let mut fields = line.splitn(6, '\t');
    let from_call = fields.next()?;
    let target = fields.next()?;
    let utc = fields.next()?;
    let freq_str = fields.next()?;
    let snr_str = fields.next()?;
    let text = match fields.next() {
        Some(text) => text,
        None => {
            warn!("skipping frame with too few fields: {:?}", line);
            return None;
        }
    };

    let frequency_hz = match freq_str.trim().parse() {
        Ok(freq) => freq,
        Err(_) => {
            warn!("skipping frame with bad frequency {:?}", freq_str);
            return None;
        }
    };
    let snr = match snr_str.trim().parse() {
        Ok(snr) => snr,
        Err(_) => {
            warn!("skipping frame with bad snr {:?}", snr_str);
            return None;
        }
    };

    Some(RawFrame::new(text, from_call, target, utc, frequency_hz, snr))
}

// One printable line per decoded record
fn render(outcome: &ParsedOutcome) -> String {
    match outcome {
        ParsedOutcome::StatusReport(rep) => {
            let scope = rep
                .scope
                .map(|s| format!(" scope=\"{}\"", s))
                .unwrap_or_default();
            let origin = rep
                .origin_call
                .as_deref()
                .map(|c| format!(" origin={}", c))
                .unwrap_or_default();
            format!(
                "STATREP {} {} {:#} {} grid={} status={:#}{}{} \"{}\"",
                rep.date,
                rep.message_id,
                rep.dialect,
                rep.from_call,
                rep.grid,
                rep.overall,
                scope,
                origin,
                rep.comment
            )
        }
        ParsedOutcome::Alert(alert) => format!(
            "ALERT {} {} \"{}\" \"{}\"",
            alert.target, alert.color_code, alert.title, alert.body
        ),
        ParsedOutcome::Message(msg) => {
            format!("MSG {} {} \"{}\"", msg.from_call, msg.target, msg.body)
        }
        ParsedOutcome::Unrecognized(text) => format!("UNREC \"{}\"", text),
    }
}
