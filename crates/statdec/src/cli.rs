use std::fmt::Display;

use clap::{error::ErrorKind, CommandFactory, Parser};

/// Standard input filename
const STDIN_FILE: &str = "-";

const USAGE_SHORT: &str = r#"
This program accepts received JS8Call traffic as tab-separated frames, one per line, and decodes any STATREP dialects that are present. Decoded records are printed one per line.

See --help for more details.
"#;

const USAGE_LONG: &str = r#"
This program accepts received JS8Call traffic as tab-separated frames, one per line:

    FROM <TAB> TARGET <TAB> UTC <TAB> FREQ <TAB> SNR <TAB> TEXT

where FROM is the sender callsign, TARGET the recipient callsign or group, UTC a "<date> <time>" timestamp, FREQ the dial frequency in Hz, SNR the signal report in dB, and TEXT the relayed line exactly as received.

Every frame decodes to exactly one record, printed as a single line:

    STATREP 2026-02-08 K32 f304 KB8UVN grid=EN82 status=1 ...
    ALERT   @ALL 1 "Test Alert" ...
    MSG     W8APP @AMRRON ...
    UNREC   CQ CQ CQ DE KB8UVN ...

Unrecognized traffic is printed verbatim (after ASCII sanitization), never dropped, so mis-parsed lines can be audited.

Malformed input frames (wrong field count, non-numeric FREQ or SNR) are logged and skipped; they never abort the run.
"#;

/// Top-level program arguments
#[derive(Parser, Clone, Debug)]
#[command(version)]
#[command(about, long_about = None)]
#[command(after_help = USAGE_SHORT, after_long_help = USAGE_LONG)]
#[command(max_term_width = 100)]
pub struct Args {
    /// Verbosity level (-vvv for more)
    #[arg(short, long, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print decoded records only, without any logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Input file (or "-" for stdin)
    ///
    /// One tab-separated frame per line; see --help for the field
    /// layout.
    #[arg(long, default_value_t = STDIN_FILE.to_string())]
    pub file: String,
}

impl Args {
    /// Return true if the user requests input from stdin
    pub fn input_is_stdin(&self) -> bool {
        self.file == STDIN_FILE
    }
}

/// A program-level error with exit code
#[derive(Debug)]
pub struct CliError {
    error: anyhow::Error,
    exit_code: i32,
}

impl CliError {
    /// Create new error with a custom exit code
    pub fn new(error: anyhow::Error, code: i32) -> CliError {
        CliError {
            error,
            exit_code: code,
        }
    }

    /// Print this error to the terminal
    ///
    /// Errors from clap are printed verbatim. Other types of errors
    /// are printed indirectly via clap's fancy formatter.
    pub fn print(&self) -> std::io::Result<()> {
        if let Some(e) = self.error.downcast_ref::<clap::Error>() {
            e.print()
        } else {
            Args::command()
                .error(ErrorKind::Format, self.to_string())
                .print()
        }
    }

    /// Print this error to the terminal and exit
    pub fn exit(&self) -> ! {
        drop(self.print());
        std::process::exit(self.exit_code);
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.error)
    }
}

impl std::error::Error for CliError {}

impl From<clap::Error> for CliError {
    fn from(error: clap::Error) -> Self {
        let code = error.exit_code();
        CliError::new(error.into(), code)
    }
}

impl From<anyhow::Error> for CliError {
    fn from(error: anyhow::Error) -> Self {
        CliError::new(error, 1)
    }
}
