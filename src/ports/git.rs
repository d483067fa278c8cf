use std::path::Path;

use crate::domain::{AppError, RepositoryRef};

/// Exit information of a finished git command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GitStatus {
    pub success: bool,
    pub code: Option<i32>,
}

impl GitStatus {
    pub fn ok() -> Self {
        Self { success: true, code: Some(0) }
    }
}

pub trait GitPort {
    /// Clone `repository` into a new directory under `parent`.
    fn clone_into(&self, repository: &RepositoryRef, parent: &Path)
    -> Result<GitStatus, AppError>;

    /// Pull the latest changes in the working copy at `directory`.
    fn pull(&self, directory: &Path) -> Result<GitStatus, AppError>;
}
