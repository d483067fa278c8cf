use std::fs;
use std::path::Path;

use crate::domain::{AppError, RepositoryManifest};

/// Load a repository manifest from a TOML file.
pub fn load_manifest(path: &Path) -> Result<RepositoryManifest, AppError> {
    if !path.is_file() {
        return Err(AppError::ManifestMissing(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let manifest = RepositoryManifest::parse(&content)?;
    tracing::debug!(
        path = %path.display(),
        groups = manifest.groups.len(),
        repositories = manifest.repository_count(),
        "loaded repository manifest"
    );
    Ok(manifest)
}

/// The manifest at `path` when given, otherwise the built-in course lists.
pub fn resolve_manifest(path: Option<&Path>) -> Result<RepositoryManifest, AppError> {
    match path {
        Some(path) => load_manifest(path),
        None => RepositoryManifest::builtin(),
    }
}
