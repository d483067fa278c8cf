//! Bump command implementation.

use std::io;
use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_bump(file: PathBuf, dry_run: bool) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    crate::bump(&file, dry_run, &mut stdout)?;
    Ok(())
}
