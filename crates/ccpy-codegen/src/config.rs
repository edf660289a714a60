//! ---
//! ccpy_section: "03-codegen"
//! ccpy_subsection: "module"
//! ccpy_type: "source"
//! ccpy_scope: "code"
//! ccpy_description: "Generator configuration."
//! ccpy_version: "v0.1.0"
//! ccpy_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Package directory written when nothing else is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "cc_check";
pub const INIT_FILE: &str = "__init__.py";
pub const MAIN_FILE: &str = "__main__.py";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_init_file() -> String {
    INIT_FILE.to_owned()
}

fn default_main_file() -> String {
    MAIN_FILE.to_owned()
}

/// Where the generator writes its artifacts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_init_file")]
    pub init_file: String,
    #[serde(default = "default_main_file")]
    pub main_file: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            init_file: default_init_file(),
            main_file: default_main_file(),
        }
    }
}

impl GeneratorConfig {
    /// Load and validate a TOML configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read generator config {}", path.display()))?;
        let config: GeneratorConfig = toml::from_str(&raw)
            .with_context(|| format!("failed to parse generator config {}", path.display()))?;
        config.validate()?;
        debug!(source = %path.display(), ?config, "loaded generator config");
        Ok(config)
    }

    /// Artifact names must be plain, distinct file names inside the output directory.
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(anyhow!("output_dir cannot be empty"));
        }
        for (key, name) in [("init_file", &self.init_file), ("main_file", &self.main_file)] {
            if name.trim().is_empty() {
                return Err(anyhow!("{key} cannot be empty"));
            }
            if name.contains(['/', '\\']) || name == "." || name == ".." {
                return Err(anyhow!("{key} must be a plain file name, got {name:?}"));
            }
        }
        if self.init_file == self.main_file {
            return Err(anyhow!(
                "init_file and main_file must differ (both {:?})",
                self.init_file
            ));
        }
        Ok(())
    }

    pub fn init_path(&self) -> PathBuf {
        self.output_dir.join(&self.init_file)
    }

    pub fn main_path(&self) -> PathBuf {
        self.output_dir.join(&self.main_file)
    }
}
