//! Sync command implementation.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_sync(manifest: Option<PathBuf>, dir: PathBuf) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    if stdout.is_terminal() {
        write!(stdout, "\x1B[2J\x1B[1;1H")?;
    }

    let report = crate::sync(manifest.as_deref(), &dir, &mut stdout)?;

    let failed = report.failures().count();
    if failed > 0 {
        tracing::warn!(failed, total = report.outcomes.len(), "some repositories did not sync");
    }
    Ok(())
}
