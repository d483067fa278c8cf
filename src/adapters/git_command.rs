use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::{AppError, RepositoryRef};
use crate::ports::{GitPort, GitStatus};

/// Runs the `git` client found on `PATH`, with the terminal attached so its
/// progress output reaches the user.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    program: PathBuf,
}

impl Default for GitCommandAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCommandAdapter {
    pub fn new() -> Self {
        Self { program: PathBuf::from("git") }
    }

    /// Use a specific git executable instead of the one on `PATH`.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    fn run(&self, args: &[&str], cwd: &Path) -> Result<GitStatus, AppError> {
        let status = Command::new(&self.program).args(args).current_dir(cwd).status().map_err(
            |e| AppError::GitError {
                command: format!("git {}", args.join(" ")),
                details: e.to_string(),
            },
        )?;

        tracing::debug!(
            command = %format!("git {}", args.join(" ")),
            cwd = %cwd.display(),
            code = ?status.code(),
            "git finished"
        );

        Ok(GitStatus { success: status.success(), code: status.code() })
    }
}

impl GitPort for GitCommandAdapter {
    fn clone_into(
        &self,
        repository: &RepositoryRef,
        parent: &Path,
    ) -> Result<GitStatus, AppError> {
        self.run(&["clone", repository.as_str()], parent)
    }

    fn pull(&self, directory: &Path) -> Result<GitStatus, AppError> {
        self.run(&["pull"], directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_program_is_a_git_error() {
        let dir = TempDir::new().unwrap();
        let git = GitCommandAdapter::with_program(dir.path().join("no-such-git"));

        let err = git.pull(dir.path()).unwrap_err();
        match err {
            AppError::GitError { command, .. } => assert_eq!(command, "git pull"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn pull_outside_a_repository_reports_failure() {
        let dir = TempDir::new().unwrap();
        let status = GitCommandAdapter::new().pull(dir.path()).unwrap();
        assert!(!status.success);
    }
}
