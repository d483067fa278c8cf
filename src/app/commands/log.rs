//! Stop, truncate, or follow the pit log.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local};

use crate::adapters::{FollowOptions, follow};
use crate::domain::{AppError, LogMode, header_line};

/// Delete the log if it exists. Failures are ignored.
pub fn remove_log(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "removed log"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::debug!(path = %path.display(), error = %e, "could not remove log"),
    }
}

/// Create a new log holding only the timestamp header line.
pub fn create_log(path: &Path, now: &DateTime<Local>) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{}\n", header_line(now)))?;
    Ok(())
}

/// Apply `mode` to the log at `path`, then stream it while `keep_going` holds.
pub fn execute<W, F>(
    mode: LogMode,
    path: &Path,
    out: &mut W,
    options: &FollowOptions,
    keep_going: F,
) -> Result<(), AppError>
where
    W: Write,
    F: FnMut() -> bool,
{
    tracing::debug!(?mode, path = %path.display(), "log command");

    match mode {
        LogMode::Stop => remove_log(path),
        LogMode::Truncate => {
            remove_log(path);
            if let Err(e) = create_log(path, &Local::now()) {
                tracing::debug!(error = %e, "log creation failed");
                writeln!(out, "An error occurred while creating the file '{}'.", path.display())?;
            }
        }
        LogMode::Follow => {}
    }

    if !mode.streams() {
        return Ok(());
    }
    follow(path, out, options, keep_going)
}
