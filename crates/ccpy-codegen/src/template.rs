//! ---
//! ccpy_section: "03-codegen"
//! ccpy_subsection: "module"
//! ccpy_type: "source"
//! ccpy_scope: "code"
//! ccpy_description: "Python wrapper templates and rendering."
//! ccpy_version: "v0.1.0"
//! ccpy_owner: "tbd"
//! ---
//! Python sources for the generated `cc_check` package.
//!
//! `__init__.py` carries the runtime resolver and the `check()` wrapper;
//! `__main__.py` is the `python -m cc_check` entry point. The resolver mirrors
//! `ccpy_platform::Target::from_names` and the argument building mirrors
//! `ccpy_invoke::CheckInvocation::new`.

/// Placeholder replaced by the package version.
pub const VERSION_MARKER: &str = "@VERSION@";

/// Template for `__init__.py`.
pub const INIT_TEMPLATE: &str = r##""""cc-check: Cross-platform conventional commit checker."""
import platform
import subprocess
from pathlib import Path

__version__ = "@VERSION@"

_SYSTEMS = {
    "darwin": "darwin",
    "linux": "linux",
    "windows": "win32",
}
_ARM_MACHINES = ("arm64", "aarch64")


def _get_binary_path():
    """Get the path to the platform-specific binary."""
    system = platform.system().lower()
    machine = platform.machine().lower()

    if system not in _SYSTEMS:
        raise OSError(f"Unsupported platform: {system}")
    os_name = _SYSTEMS[system]

    if os_name == "darwin":
        arch = "arm64" if machine in _ARM_MACHINES else "x86_64"
    elif os_name == "linux":
        arch = "aarch64" if machine in _ARM_MACHINES else "x86_64"
    else:
        arch = "x86_64"

    binary_name = f"cc-check-{os_name}-{arch}"
    if os_name == "win32":
        binary_name += ".exe"

    binary_path = Path(__file__).parent / "binaries" / binary_name
    if not binary_path.exists():
        raise FileNotFoundError(f"Binary not found: {binary_path}")

    return binary_path


def check(commit_msg_file=None, **kwargs):
    """Run cc-check on a commit message file.

    Returns a ``(success, stdout, stderr)`` tuple. A non-zero exit status is
    reported through ``success`` rather than raised.
    """
    cmd = [str(_get_binary_path()), "check"]

    if commit_msg_file:
        cmd.append(commit_msg_file)

    for key, value in kwargs.items():
        flag_name = "--" + key.replace("_", "-")
        if value is True:
            cmd.append(flag_name)
        elif value is not None:
            cmd.append(flag_name)
            cmd.append(str(value))

    result = subprocess.run(cmd, capture_output=True, text=True)
    return result.returncode == 0, result.stdout, result.stderr
"##;

/// Contents of `__main__.py`. Constant, no substitution.
pub const MAIN_TEMPLATE: &str = r##""""Entry point for python -m cc_check."""
import sys

from cc_check import check


def main():
    commit_file = sys.argv[1] if len(sys.argv) > 1 else None
    success, stdout, stderr = check(commit_file)
    if stdout:
        print(stdout)
    if stderr:
        print(stderr, file=sys.stderr)
    sys.exit(0 if success else 1)


if __name__ == "__main__":
    main()
"##;

/// Inputs to the `__init__.py` template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateContext<'a> {
    /// Embedded verbatim; never escaped or validated.
    pub version: &'a str,
}

impl<'a> TemplateContext<'a> {
    pub fn new(version: &'a str) -> Self {
        Self { version }
    }
}

/// Substitute the context into a template. Only the first marker is replaced.
pub fn render(template: &str, context: &TemplateContext<'_>) -> String {
    template.replacen(VERSION_MARKER, context.version, 1)
}

pub fn render_init(version: &str) -> String {
    render(INIT_TEMPLATE, &TemplateContext::new(version))
}

pub fn render_main() -> String {
    MAIN_TEMPLATE.to_owned()
}

/// Both rendered artifacts for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPackage {
    pub init: String,
    pub main: String,
}

impl RenderedPackage {
    pub fn render(context: &TemplateContext<'_>) -> Self {
        Self {
            init: render(INIT_TEMPLATE, context),
            main: render_main(),
        }
    }
}
