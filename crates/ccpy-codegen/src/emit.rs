//! ---
//! ccpy_section: "03-codegen"
//! ccpy_subsection: "module"
//! ccpy_type: "source"
//! ccpy_scope: "code"
//! ccpy_description: "Writes rendered artifacts to disk."
//! ccpy_version: "v0.1.0"
//! ccpy_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{GeneratorConfig, INIT_FILE, MAIN_FILE};
use crate::template::RenderedPackage;

/// Paths written by one emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedPackage {
    pub output_dir: PathBuf,
    pub init_path: PathBuf,
    pub main_path: PathBuf,
}

impl EmittedPackage {
    /// Human-readable completion line naming the output directory.
    pub fn status_message(&self) -> String {
        format!(
            "Generated Python package files in {}/",
            self.output_dir.display()
        )
    }
}

/// Write `__init__.py` and `__main__.py` into `output_dir`, creating it if needed.
pub fn emit<P: AsRef<Path>>(output_dir: P, init_text: &str, main_text: &str) -> Result<EmittedPackage> {
    let output_dir = output_dir.as_ref();
    write_artifacts(
        output_dir,
        output_dir.join(INIT_FILE),
        init_text,
        output_dir.join(MAIN_FILE),
        main_text,
    )
}

/// Write a rendered package to the locations named by `config`.
pub fn emit_package(config: &GeneratorConfig, package: &RenderedPackage) -> Result<EmittedPackage> {
    write_artifacts(
        &config.output_dir,
        config.init_path(),
        &package.init,
        config.main_path(),
        &package.main,
    )
}

fn write_artifacts(
    output_dir: &Path,
    init_path: PathBuf,
    init_text: &str,
    main_path: PathBuf,
    main_text: &str,
) -> Result<EmittedPackage> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("unable to create output directory {}", output_dir.display()))?;
    for (path, text) in [(&init_path, init_text), (&main_path, main_text)] {
        fs::write(path, text.as_bytes())
            .with_context(|| format!("unable to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "wrote artifact");
    }
    Ok(EmittedPackage {
        output_dir: output_dir.to_path_buf(),
        init_path,
        main_path,
    })
}
