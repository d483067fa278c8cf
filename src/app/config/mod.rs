//! Where each command finds its inputs: built-in defaults, environment, flags.

mod load_manifest;
mod log_path;

pub use load_manifest::{load_manifest, resolve_manifest};
pub use log_path::{default_log_path, resolve_log_path};
