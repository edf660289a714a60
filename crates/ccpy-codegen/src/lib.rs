//! ---
//! ccpy_section: "03-codegen"
//! ccpy_subsection: "module"
//! ccpy_type: "source"
//! ccpy_scope: "code"
//! ccpy_description: "Python wrapper templates and rendering."
//! ccpy_version: "v0.1.0"
//! ccpy_owner: "tbd"
//! ---
//! Renders the `cc_check` Python package wrapper and writes it to disk.
//! Template rendering is pure; only [`emit`] touches the filesystem.

pub mod config;
pub mod emit;
pub mod template;

use anyhow::Result;
use ccpy_logging::{gen_info, gen_warn, log_system_event, LogContext, SystemEventOutcome};

pub use config::{GeneratorConfig, DEFAULT_OUTPUT_DIR, INIT_FILE, MAIN_FILE};
pub use emit::{emit, emit_package, EmittedPackage};
pub use template::{render, render_init, render_main, RenderedPackage, TemplateContext};

/// Explain why `version` is not semver, if it isn't. Never blocks generation.
pub fn version_advisory(version: &str) -> Option<String> {
    semver::Version::parse(version)
        .err()
        .map(|err| format!("version {version:?} is not valid semver ({err}); embedding it verbatim"))
}

/// Render both artifacts for `version` and write them as `config` describes.
pub fn generate(version: &str, config: &GeneratorConfig) -> Result<EmittedPackage> {
    config.validate()?;
    let output_dir = config.output_dir.display().to_string();
    let ctx = LogContext::new()
        .with_version(version)
        .with_output_dir(&output_dir);

    if let Some(advisory) = version_advisory(version) {
        gen_warn!(context = ctx.clone().with_stage("render"), "{advisory}");
    }
    let package = RenderedPackage::render(&TemplateContext::new(version));
    gen_info!(
        context = ctx.clone().with_stage("render"),
        "rendered {} and {}",
        config.init_file,
        config.main_file
    );

    let emit_ctx = ctx.with_stage("emit");
    match emit_package(config, &package) {
        Ok(emitted) => {
            log_system_event(
                Some(&emit_ctx),
                "generator.emit",
                "python package written",
                SystemEventOutcome::Success,
            );
            Ok(emitted)
        }
        Err(err) => {
            log_system_event(
                Some(&emit_ctx),
                "generator.emit",
                &format!("{err:#}"),
                SystemEventOutcome::Fault,
            );
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn semver_versions_need_no_advisory() {
        assert_eq!(version_advisory("1.4.0"), None);
        assert_eq!(version_advisory("0.2.0-beta.1"), None);
    }

    #[test]
    fn non_semver_versions_get_an_advisory() {
        for version in ["", "v1.0.0", "1.0", "nightly"] {
            let advisory = version_advisory(version).expect("advisory");
            assert!(advisory.contains("verbatim"));
        }
    }

    #[test]
    fn generate_writes_rendered_package() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            output_dir: dir.path().join("cc_check"),
            ..GeneratorConfig::default()
        };
        let emitted = generate("1.2.3", &config).unwrap();
        let init = fs::read_to_string(&emitted.init_path).unwrap();
        assert!(init.contains("__version__ = \"1.2.3\""));
        assert_eq!(fs::read_to_string(&emitted.main_path).unwrap(), render_main());
    }

    #[test]
    fn generate_embeds_non_semver_version_anyway() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            output_dir: dir.path().to_path_buf(),
            ..GeneratorConfig::default()
        };
        let emitted = generate("not-a-version", &config).unwrap();
        let init = fs::read_to_string(emitted.init_path).unwrap();
        assert!(init.contains("__version__ = \"not-a-version\""));
    }

    #[test]
    fn generate_rejects_invalid_config_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            output_dir: dir.path().join("out"),
            init_file: "a/b.py".into(),
            ..GeneratorConfig::default()
        };
        assert!(generate("1.0.0", &config).is_err());
        assert!(!dir.path().join("out").exists());
    }
}
