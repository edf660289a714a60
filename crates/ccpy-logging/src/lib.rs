//! ---
//! ccpy_section: "04-logging"
//! ccpy_subsection: "module"
//! ccpy_type: "source"
//! ccpy_scope: "code"
//! ccpy_description: "Structured logging adapters for the generator and shim."
//! ccpy_version: "v0.1.0"
//! ccpy_owner: "tbd"
//! ---
#![warn(missing_docs)]

use tracing::Level;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

pub mod macros;

#[doc(hidden)]
pub use tracing as __tracing;

/// Initialize a tracing subscriber that writes to stderr.
///
/// `RUST_LOG` refines the filter; `default_level` applies when it is unset.
/// Stdout is left alone because both binaries own it for their primary output.
pub fn init(default_level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    let _ = Registry::default()
        .with(filter)
        .with(
            subscriber_fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

/// Structured logging context propagated by the convenience macros.
#[derive(Debug, Default, Clone)]
pub struct LogContext<'a> {
    /// Package version being generated.
    pub version: Option<&'a str>,
    /// Output directory receiving the generated files.
    pub output_dir: Option<&'a str>,
    /// Platform target (for example `linux-x86_64`).
    pub target: Option<&'a str>,
    /// Pipeline stage (render, emit, invoke).
    pub stage: Option<&'a str>,
}

impl<'a> LogContext<'a> {
    /// Create an empty logging context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a package version.
    pub fn with_version(mut self, version: &'a str) -> Self {
        self.version = Some(version);
        self
    }

    /// Attach an output directory.
    pub fn with_output_dir(mut self, output_dir: &'a str) -> Self {
        self.output_dir = Some(output_dir);
        self
    }

    /// Attach a platform target label.
    pub fn with_target(mut self, target: &'a str) -> Self {
        self.target = Some(target);
        self
    }

    /// Attach a pipeline stage.
    pub fn with_stage(mut self, stage: &'a str) -> Self {
        self.stage = Some(stage);
        self
    }
}

/// High-level outcome used when emitting lifecycle log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEventOutcome {
    /// The operation completed successfully.
    Success,
    /// The operation failed or was aborted.
    Fault,
}

impl SystemEventOutcome {
    /// Stable label recorded in the `outcome` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemEventOutcome::Success => "success",
            SystemEventOutcome::Fault => "fault",
        }
    }
}

/// Emit a standardized lifecycle event with a success/fault outcome.
pub fn log_system_event(
    context: Option<&LogContext>,
    event: &str,
    message: &str,
    outcome: SystemEventOutcome,
) {
    let ctx = context.cloned().unwrap_or_default();
    match outcome {
        SystemEventOutcome::Success => tracing::event!(
            Level::INFO,
            event,
            outcome = outcome.as_str(),
            version = ctx.version.unwrap_or(""),
            output_dir = ctx.output_dir.unwrap_or(""),
            target = ctx.target.unwrap_or(""),
            stage = ctx.stage.unwrap_or(""),
            message = %message
        ),
        SystemEventOutcome::Fault => tracing::event!(
            Level::ERROR,
            event,
            outcome = outcome.as_str(),
            version = ctx.version.unwrap_or(""),
            output_dir = ctx.output_dir.unwrap_or(""),
            target = ctx.target.unwrap_or(""),
            stage = ctx.stage.unwrap_or(""),
            message = %message
        ),
    }
}
