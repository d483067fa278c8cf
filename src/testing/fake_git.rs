use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, RepositoryRef};
use crate::ports::{GitPort, GitStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Clone { url: String, parent: PathBuf },
    Pull { directory: PathBuf },
}

/// Records git calls. A successful clone creates the target directory, the
/// way a real clone would.
#[derive(Default)]
pub struct FakeGit {
    pub calls: Mutex<Vec<GitCall>>,
    pub failing: Mutex<HashSet<String>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make clones of `url` exit with a failure status.
    pub fn fail_for(&self, url: &str) {
        self.failing.lock().unwrap().insert(url.to_string());
    }

    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl GitPort for FakeGit {
    fn clone_into(
        &self,
        repository: &RepositoryRef,
        parent: &Path,
    ) -> Result<GitStatus, AppError> {
        self.calls.lock().unwrap().push(GitCall::Clone {
            url: repository.as_str().to_string(),
            parent: parent.to_path_buf(),
        });

        if self.failing.lock().unwrap().contains(repository.as_str()) {
            return Ok(GitStatus { success: false, code: Some(128) });
        }
        fs::create_dir_all(parent.join(repository.directory_name()))?;
        Ok(GitStatus::ok())
    }

    fn pull(&self, directory: &Path) -> Result<GitStatus, AppError> {
        self.calls.lock().unwrap().push(GitCall::Pull { directory: directory.to_path_buf() });
        Ok(GitStatus::ok())
    }
}
