//! ---
//! ccpy_section: "05-cli"
//! ccpy_subsection: "binary"
//! ccpy_type: "source"
//! ccpy_scope: "code"
//! ccpy_description: "Native entry shim for the bundled cc-check binaries."
//! ccpy_version: "v0.1.0"
//! ccpy_owner: "tbd"
//! ---
//! Treats the directory holding this executable as the package root and
//! forwards the first argument to `<root>/binaries/cc-check-<os>-<arch> check`.
use std::env;
use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use ccpy_invoke::run_entry;
use ccpy_logging as logging;
use tracing::Level;

fn main() -> Result<()> {
    logging::init(Level::WARN);
    let exe = env::current_exe().context("failed to determine current executable path")?;
    let package_dir = exe
        .parent()
        .ok_or_else(|| anyhow!("could not determine package directory"))?;
    let args: Vec<String> = env::args().skip(1).collect();

    let code = run_entry(
        package_dir,
        &args,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    io::stdout().flush()?;
    std::process::exit(code);
}
