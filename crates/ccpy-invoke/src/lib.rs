//! ---
//! ccpy_section: "02-invocation"
//! ccpy_subsection: "module"
//! ccpy_type: "source"
//! ccpy_scope: "code"
//! ccpy_description: "Keyword flag model and cc-check invocation."
//! ccpy_version: "v0.1.0"
//! ccpy_owner: "tbd"
//! ---
//! Native model of the generated package's `check()` wrapper: build the
//! command line, run the bundled binary once, hand back both streams.

pub mod entry;
pub mod flags;

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use ccpy_platform::{resolve_binary_path, PlatformError};
use thiserror::Error;

pub use entry::run_entry;
pub use flags::{flag_name, FlagValue, Flags};

/// Subcommand passed to the bundled binary.
pub const CHECK_SUBCOMMAND: &str = "check";

pub type Result<T> = std::result::Result<T, InvokeError>;

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error("failed to launch {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to forward output: {0}")]
    Output(#[from] io::Error),
}

/// Captured result of one binary run. A non-zero exit is a result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// A fully built command line for the bundled binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInvocation {
    program: PathBuf,
    args: Vec<String>,
}

impl CheckInvocation {
    /// `<program> check [commit_msg_file] [--flag [value]]...`
    ///
    /// An empty commit message path is treated as absent.
    pub fn new(
        program: impl Into<PathBuf>,
        commit_msg_file: Option<&str>,
        flags: &Flags,
    ) -> Self {
        let mut args = vec![CHECK_SUBCOMMAND.to_owned()];
        if let Some(file) = commit_msg_file.filter(|file| !file.is_empty()) {
            args.push(file.to_owned());
        }
        args.extend(flags.to_args());
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments after the program path.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Full argument vector including the program path.
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone().into_os_string())
            .chain(self.args.iter().map(OsString::from))
            .collect()
    }

    /// Run the binary to completion and capture its output as text.
    pub fn run(&self) -> Result<CheckOutcome> {
        tracing::debug!(program = %self.program.display(), args = ?self.args, "running cc-check");
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|source| InvokeError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        let outcome = CheckOutcome {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!(success = outcome.success, status = ?output.status.code(), "cc-check finished");
        Ok(outcome)
    }
}

/// Resolve the host binary under `package_dir` and run `check` with it.
pub fn check<P: AsRef<Path>>(
    package_dir: P,
    commit_msg_file: Option<&str>,
    flags: &Flags,
) -> Result<CheckOutcome> {
    let binary = resolve_binary_path(package_dir)?;
    CheckInvocation::new(binary, commit_msg_file, flags).run()
}
