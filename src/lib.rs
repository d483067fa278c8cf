//! pit-maint: maintenance utilities for the pit course tooling.
//!
//! Three independent operations: sync the student and team repositories,
//! stop/truncate/follow the pit log, and bump the build number in `version.go`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::io::Write;
use std::path::Path;

use adapters::{FollowOptions, GitCommandAdapter};
use app::commands::{bump as bump_cmd, log as log_cmd, sync as sync_cmd};

pub use app::commands::sync::{SyncAction, SyncOutcome, SyncReport};
pub use domain::{AppError, BuildBump, BuildNumberError, LogMode, RepositoryManifest};

// =============================================================================
// Repository Syncer
// =============================================================================

/// Clone or pull every repository into `dir`.
///
/// Uses the manifest at `manifest` when given, otherwise the built-in course
/// lists. Individual git failures end up in the report, not in the `Result`.
pub fn sync<W: Write>(
    manifest: Option<&Path>,
    dir: &Path,
    out: &mut W,
) -> Result<SyncReport, AppError> {
    let manifest = app::config::resolve_manifest(manifest)?;
    let git = GitCommandAdapter::new();
    sync_cmd::sync_manifest(&git, dir, &manifest, out)
}

// =============================================================================
// Log Tailer/Rotator
// =============================================================================

/// Apply `mode` to the log at `path`.
///
/// `Stop` returns right away. The other modes follow the log until the process
/// is killed.
pub fn log<W: Write>(mode: LogMode, path: &Path, out: &mut W) -> Result<(), AppError> {
    log_cmd::execute(mode, path, out, &FollowOptions::default(), || true)
}

// =============================================================================
// Build Number Incrementer
// =============================================================================

/// Increment the build number on the last line of the version file at `path`.
pub fn bump<W: Write>(path: &Path, dry_run: bool, out: &mut W) -> Result<BuildBump, AppError> {
    bump_cmd::execute(path, dry_run, out)
}
