pub mod build_number;
pub mod error;
pub mod log_file;
pub mod repository;

pub use build_number::{BuildBump, BuildLine, BuildNumberError, bump_contents};
pub use error::AppError;
pub use log_file::{HEADER_MARKER, LOG_FILE_NAME, LogMode, PIT_DIR, header_line};
pub use repository::{RepositoryGroup, RepositoryManifest, RepositoryRef};

/// Default version file, relative to the working directory.
pub const VERSION_FILE: &str = "version.go";
