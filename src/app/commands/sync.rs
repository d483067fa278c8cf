//! Clone-or-update for every repository in a manifest.

use std::io::Write;
use std::path::Path;

use crate::domain::{AppError, RepositoryManifest, RepositoryRef};
use crate::ports::GitPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Clone,
    Update,
}

/// What happened to one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub repository: String,
    pub directory: String,
    pub action: SyncAction,
    /// `false` when git exited non-zero or could not be started.
    pub succeeded: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub outcomes: Vec<SyncOutcome>,
}

impl SyncReport {
    pub fn failures(&self) -> impl Iterator<Item = &SyncOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.succeeded)
    }
}

/// Clone `repository` into `root`, or pull it if its directory already exists.
///
/// Git failures are logged and recorded in the outcome, never returned.
pub fn sync_repository<G, W>(
    git: &G,
    root: &Path,
    repository: &RepositoryRef,
    out: &mut W,
) -> Result<SyncOutcome, AppError>
where
    G: GitPort,
    W: Write,
{
    let directory = repository.directory_name();
    let local = root.join(directory);
    // An empty, `.` or `..` name resolves to the sync root or above it.
    let working_copy = !matches!(directory, "" | "." | "..") && local.is_dir();

    let (action, result) = if working_copy {
        writeln!(out, "Update {}", repository)?;
        writeln!(out, "Executing: git pull")?;
        out.flush()?;
        (SyncAction::Update, git.pull(&local))
    } else {
        writeln!(out, "Clone {}", repository)?;
        writeln!(out, "Executing: git clone {}", repository)?;
        out.flush()?;
        (SyncAction::Clone, git.clone_into(repository, root))
    };

    let succeeded = match result {
        Ok(status) if status.success => true,
        Ok(status) => {
            tracing::warn!(
                repository = %repository,
                code = ?status.code,
                "git exited with failure"
            );
            false
        }
        Err(err) => {
            tracing::warn!(repository = %repository, error = %err, "git could not be run");
            false
        }
    };

    writeln!(out)?;

    Ok(SyncOutcome {
        repository: repository.to_string(),
        directory: directory.to_string(),
        action,
        succeeded,
    })
}

/// Sync every group of `manifest` in order, printing a header per group.
pub fn sync_manifest<G, W>(
    git: &G,
    root: &Path,
    manifest: &RepositoryManifest,
    out: &mut W,
) -> Result<SyncReport, AppError>
where
    G: GitPort,
    W: Write,
{
    let mut report = SyncReport::default();

    for group in &manifest.groups {
        writeln!(out, "Cloning or Updating {}:", group.name)?;
        writeln!(out)?;
        for repository in &group.repositories {
            report.outcomes.push(sync_repository(git, root, repository, out)?);
        }
    }

    Ok(report)
}
