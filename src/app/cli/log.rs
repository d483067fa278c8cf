//! Log command implementation.

use std::io;
use std::path::PathBuf;

use crate::domain::{AppError, LogMode};

pub fn run_log(file: Option<PathBuf>, args: &[String]) -> Result<(), AppError> {
    let mode = LogMode::from_args(args);
    let path = crate::app::config::resolve_log_path(file.as_deref())?;

    let mut stdout = io::stdout().lock();
    crate::log(mode, &path, &mut stdout)
}
