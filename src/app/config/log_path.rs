use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, LOG_FILE_NAME, PIT_DIR};

/// `<home>/.pit/log.txt`, the file pit writes its log to.
pub fn default_log_path(home: &Path) -> PathBuf {
    home.join(PIT_DIR).join(LOG_FILE_NAME)
}

/// Pick the log path: an explicit override, else the default under `$HOME`.
pub fn resolve_log_path(override_path: Option<&Path>) -> Result<PathBuf, AppError> {
    resolve_with_home(override_path, env::var_os("HOME"))
}

fn resolve_with_home(
    override_path: Option<&Path>,
    home: Option<OsString>,
) -> Result<PathBuf, AppError> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }

    match home {
        Some(home) if !home.is_empty() => Ok(default_log_path(Path::new(&home))),
        _ => Err(AppError::config_error(
            "HOME is not set; pass --file to choose the log file",
        )),
    }
}
