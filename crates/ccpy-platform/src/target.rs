//! ---
//! ccpy_section: "01-platform"
//! ccpy_subsection: "module"
//! ccpy_type: "source"
//! ccpy_scope: "code"
//! ccpy_description: "Platform detection and bundled binary lookup."
//! ccpy_version: "v0.1.0"
//! ccpy_owner: "tbd"
//! ---
use std::fmt;

use crate::{PlatformError, Result};

/// Filename prefix shared by every bundled binary.
pub const BINARY_PREFIX: &str = "cc-check";

/// Machine names treated as the arm family. Anything else is x86_64.
const ARM_MACHINES: [&str; 2] = ["arm64", "aarch64"];

/// Normalized operating system bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsBucket {
    Darwin,
    Linux,
    Win32,
}

impl OsBucket {
    /// Map a host system name (`platform.system()` style) onto a bucket.
    pub fn from_system(system: &str) -> Result<Self> {
        match system.to_lowercase().as_str() {
            "darwin" => Ok(Self::Darwin),
            "linux" => Ok(Self::Linux),
            "windows" => Ok(Self::Win32),
            other => Err(PlatformError::UnsupportedPlatform {
                system: other.to_owned(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Darwin => "darwin",
            Self::Linux => "linux",
            Self::Win32 => "win32",
        }
    }
}

/// Normalized architecture bucket. Darwin and Linux name the arm variant differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchBucket {
    Arm64,
    Aarch64,
    X86_64,
}

impl ArchBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arm64 => "arm64",
            Self::Aarch64 => "aarch64",
            Self::X86_64 => "x86_64",
        }
    }
}

/// Every platform a cc-check binary is bundled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    DarwinArm64,
    DarwinX86_64,
    LinuxAarch64,
    LinuxX86_64,
    Win32X86_64,
}

impl Target {
    pub const ALL: [Target; 5] = [
        Target::DarwinArm64,
        Target::DarwinX86_64,
        Target::LinuxAarch64,
        Target::LinuxX86_64,
        Target::Win32X86_64,
    ];

    /// Resolve raw system and machine names into a supported target.
    ///
    /// Unknown systems are rejected. Unknown machines fall back to x86_64, and
    /// Windows is x86_64 whatever the machine reports.
    pub fn from_names(system: &str, machine: &str) -> Result<Self> {
        let os = OsBucket::from_system(system)?;
        let machine = machine.to_lowercase();
        let is_arm = ARM_MACHINES.contains(&machine.as_str());
        let target = match (os, is_arm) {
            (OsBucket::Darwin, true) => Target::DarwinArm64,
            (OsBucket::Darwin, false) => Target::DarwinX86_64,
            (OsBucket::Linux, true) => Target::LinuxAarch64,
            (OsBucket::Linux, false) => Target::LinuxX86_64,
            (OsBucket::Win32, _) => Target::Win32X86_64,
        };
        if !is_arm && os != OsBucket::Win32 && machine != "x86_64" {
            tracing::debug!(%machine, resolved = %target, "unrecognized machine, assuming x86_64");
        }
        Ok(target)
    }

    /// Resolve the platform this process is running on.
    pub fn host() -> Result<Self> {
        Self::from_names(host_system_name(), std::env::consts::ARCH)
    }

    pub fn os(self) -> OsBucket {
        match self {
            Target::DarwinArm64 | Target::DarwinX86_64 => OsBucket::Darwin,
            Target::LinuxAarch64 | Target::LinuxX86_64 => OsBucket::Linux,
            Target::Win32X86_64 => OsBucket::Win32,
        }
    }

    pub fn arch(self) -> ArchBucket {
        match self {
            Target::DarwinArm64 => ArchBucket::Arm64,
            Target::LinuxAarch64 => ArchBucket::Aarch64,
            Target::DarwinX86_64 | Target::LinuxX86_64 | Target::Win32X86_64 => {
                ArchBucket::X86_64
            }
        }
    }

    /// Filename of the bundled binary, `cc-check-<os>-<arch>[.exe]`.
    pub fn binary_name(self) -> String {
        let suffix = if self.os() == OsBucket::Win32 {
            ".exe"
        } else {
            ""
        };
        format!(
            "{BINARY_PREFIX}-{}-{}{suffix}",
            self.os().as_str(),
            self.arch().as_str()
        )
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os().as_str(), self.arch().as_str())
    }
}

/// Host system name as Python's `platform.system()` would report it.
pub fn host_system_name() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    }
}
