//! Received frame envelope

/// One relayed line of traffic plus its envelope metadata
///
/// Built by the transport collaborator, one per received datagram,
/// and consumed whole by [`classify`](crate::classify). The engine
/// never mutates a frame and holds nothing between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFrame {
    /// The relayed line, exactly as received
    pub text: String,

    /// Sender callsign from the envelope (may carry a `/P`-style suffix)
    pub from_call: String,

    /// Recipient callsign or group marker (e.g. `@AMRRON`)
    pub target: String,

    /// Loosely formatted UTC timestamp, `"<date> <time>"`
    pub utc: String,

    /// Dial frequency in Hz
    pub frequency_hz: u64,

    /// Signal report (dB SNR)
    pub snr: i32,
}

impl RawFrame {
    /// Assemble a frame from envelope fields
    pub fn new<S>(text: S, from_call: S, target: S, utc: S, frequency_hz: u64, snr: i32) -> Self
    where
        S: Into<String>,
    {
        RawFrame {
            text: text.into(),
            from_call: from_call.into(),
            target: target.into(),
            utc: utc.into(),
            frequency_hz,
            snr,
        }
    }
}
