//! ---
//! ccpy_section: "05-cli"
//! ccpy_subsection: "binary"
//! ccpy_type: "source"
//! ccpy_scope: "code"
//! ccpy_description: "Build-time generator for the cc_check Python package."
//! ccpy_version: "v0.1.0"
//! ccpy_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::Result;
use ccpy_codegen::{generate, GeneratorConfig};
use ccpy_logging as logging;
use ccpy_platform::Target;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use tracing::Level;

const USAGE: &str = "Usage: generate-python-package <version>";

#[derive(Debug, Parser)]
#[command(
    name = "generate-python-package",
    author,
    disable_version_flag = true,
    about = "Generate the cc_check Python package wrapper files",
    long_about = None
)]
struct Cli {
    /// Package version embedded verbatim as __version__
    #[arg(value_name = "VERSION")]
    package_version: Option<String>,

    /// Directory receiving __init__.py and __main__.py (overrides --config)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Optional TOML file with output_dir, init_file and main_file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the expected bundled binary file names and exit
    #[arg(long, action = ArgAction::SetTrue)]
    list_binaries: bool,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => exit_with_usage(err),
    };
    logging::init(Level::WARN);

    if cli.list_binaries {
        for name in binary_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let Some(version) = cli.package_version.as_deref() else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    let config = resolve_config(&cli)?;
    let emitted = generate(version, &config)?;
    println!("{}", emitted.status_message());
    Ok(())
}

fn exit_with_usage(err: clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
        _ => eprint!("{err}"),
    }
    eprintln!("{USAGE}");
    std::process::exit(1);
}

fn resolve_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_path(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    config.validate()?;
    Ok(config)
}

fn binary_names() -> Vec<String> {
    Target::ALL.iter().map(|target| target.binary_name()).collect()
}
