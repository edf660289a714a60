//! ---
//! ccpy_section: "01-platform"
//! ccpy_subsection: "module"
//! ccpy_type: "source"
//! ccpy_scope: "code"
//! ccpy_description: "Platform detection and bundled binary lookup."
//! ccpy_version: "v0.1.0"
//! ccpy_owner: "tbd"
//! ---
use std::path::{Path, PathBuf};

use crate::{PlatformError, Result, Target};

/// Directory under the package root holding the bundled binaries.
pub const BINARIES_DIR: &str = "binaries";

/// Locates bundled binaries beneath a package directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryLocator {
    package_dir: PathBuf,
}

impl BinaryLocator {
    pub fn new<P: AsRef<Path>>(package_dir: P) -> Self {
        Self {
            package_dir: package_dir.as_ref().to_path_buf(),
        }
    }

    pub fn package_dir(&self) -> &Path {
        &self.package_dir
    }

    pub fn binaries_dir(&self) -> PathBuf {
        self.package_dir.join(BINARIES_DIR)
    }

    /// Expected location of the binary for `target`, whether or not it exists.
    pub fn path_for(&self, target: Target) -> PathBuf {
        self.binaries_dir().join(target.binary_name())
    }

    /// Return the binary path for `target`, failing when the file is absent.
    pub fn resolve(&self, target: Target) -> Result<PathBuf> {
        let path = self.path_for(target);
        if !path.exists() {
            return Err(PlatformError::BinaryNotFound { path });
        }
        tracing::debug!(resolved = %target, path = %path.display(), "resolved bundled binary");
        Ok(path)
    }

    /// Supported targets whose binary is missing from the package.
    pub fn missing(&self) -> Vec<Target> {
        Target::ALL
            .into_iter()
            .filter(|target| !self.path_for(*target).exists())
            .collect()
    }
}

/// Resolve the bundled binary for the host platform under `package_dir`.
pub fn resolve_binary_path<P: AsRef<Path>>(package_dir: P) -> Result<PathBuf> {
    let target = Target::host()?;
    BinaryLocator::new(package_dir).resolve(target)
}
