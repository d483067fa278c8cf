//! Increment the build number in a version file.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::{AppError, BuildBump, bump_contents};

/// Read `path`, bump its build number, print the transition, and write it back
/// unless `dry_run` is set. Nothing is written when the last line is malformed.
pub fn execute<W: Write>(path: &Path, dry_run: bool, out: &mut W) -> Result<BuildBump, AppError> {
    if !path.is_file() {
        return Err(AppError::VersionFileMissing(path.display().to_string()));
    }

    let text = fs::read_to_string(path)?;
    let bump = bump_contents(&text)
        .map_err(|source| AppError::BuildNumber { path: path.display().to_string(), source })?;

    writeln!(out, "update build number: {} ⇒ {}", bump.previous, bump.current)?;

    if dry_run {
        tracing::debug!(path = %path.display(), "dry run; version file left untouched");
    } else {
        fs::write(path, &bump.contents)?;
    }

    Ok(bump)
}
