//! ---
//! ccpy_section: "01-platform"
//! ccpy_subsection: "module"
//! ccpy_type: "source"
//! ccpy_scope: "code"
//! ccpy_description: "Platform detection and bundled binary lookup."
//! ccpy_version: "v0.1.0"
//! ccpy_owner: "tbd"
//! ---
//! Resolution of the host platform onto one of the bundled cc-check
//! binaries shipped inside the Python package.

pub mod locate;
pub mod target;

use std::path::PathBuf;

use thiserror::Error;

pub use locate::{resolve_binary_path, BinaryLocator, BINARIES_DIR};
pub use target::{host_system_name, ArchBucket, OsBucket, Target, BINARY_PREFIX};

pub type Result<T> = std::result::Result<T, PlatformError>;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Unsupported platform: {system}")]
    UnsupportedPlatform { system: String },
    #[error("Binary not found: {}", path.display())]
    BinaryNotFound { path: PathBuf },
}
