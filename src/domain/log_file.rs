//! The pit log file and the rotation modes applied to it.

use chrono::{DateTime, TimeZone};

/// Directory under `$HOME` where pit keeps its state.
pub const PIT_DIR: &str = ".pit";

/// Log file name inside [`PIT_DIR`].
pub const LOG_FILE_NAME: &str = "log.txt";

/// Marker written after the timestamp when a fresh log is created.
pub const HEADER_MARKER: &str = "New log file created";

const HEADER_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// What `log` does before (or instead of) streaming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Delete the log and exit.
    Stop,
    /// Recreate the log with a header line, then stream it.
    Truncate,
    /// Stream the log as it grows.
    Follow,
}

impl LogMode {
    /// Select a mode from raw arguments.
    ///
    /// Only a single argument spelled `-s`/`-stop` or `-t`/`-truncate` selects
    /// a mode. No arguments, several arguments, or anything else streams.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        match args {
            [only] => match only.as_ref() {
                "-s" | "-stop" => LogMode::Stop,
                "-t" | "-truncate" => LogMode::Truncate,
                _ => LogMode::Follow,
            },
            _ => LogMode::Follow,
        }
    }

    pub fn streams(self) -> bool {
        !matches!(self, LogMode::Stop)
    }
}

/// First line of a freshly created log, without the newline.
pub fn header_line<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{} {}", now.format(HEADER_TIME_FORMAT), HEADER_MARKER)
}
