//! typn CLI (made by FontLab https://www.fontlab.com/)

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};

use typn_core::dispatch::run_all;
use typn_core::output::write_json_pretty;
use typn_core::scan::{scan_collection, system_font_roots, ScanOptions};

/// CLI entrypoint for typn.
#[derive(Debug, Parser)]
#[command(
    name = "typn",
    version,
    about = "Installed-font identity enumeration (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    /// Paths to scan (directories or font files); system font directories
    /// are used when none are given
    #[arg(value_hint = ValueHint::DirPath)]
    paths: Vec<PathBuf>,

    /// Include common system font directories
    #[arg(long = "system-fonts", action = ArgAction::SetTrue)]
    system_fonts: bool,

    /// Follow symlinks while walking paths
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue)]
    follow_symlinks: bool,

    /// Write the JSON report to this file instead of stdout
    #[arg(short = 'o', long = "output_file", value_hint = ValueHint::FilePath)]
    output_file: Option<PathBuf>,

    /// Extraction worker threads (0 behaves like 1)
    #[arg(short = 'j', long = "jobs", default_value_t = 1)]
    jobs: usize,
}

/// Parse CLI args and run the enumeration.
pub fn run() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    run_with(cli)
}

fn run_with(cli: Cli) -> Result<()> {
    let roots = gather_roots(&cli)?;
    log::debug!("scanning {} root(s) with {} worker(s)", roots.len(), cli.jobs.max(1));

    let opts = ScanOptions {
        follow_symlinks: cli.follow_symlinks,
    };
    let collection =
        scan_collection(&roots, &opts).context("acquiring the font collection")?;

    let report = run_all(&collection, cli.jobs)?;

    match &cli.output_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("opening output file {}", path.display()))?;
            write_json_pretty(&report, file)?;
        }
        None => {
            let stdout = io::stdout();
            write_json_pretty(&report, stdout.lock())?;
        }
    }

    Ok(())
}

fn gather_roots(cli: &Cli) -> Result<Vec<PathBuf>> {
    let mut roots = cli.paths.clone();

    if cli.system_fonts || roots.is_empty() {
        roots.extend(system_font_roots()?);
    }

    roots.sort();
    roots.dedup();
    Ok(roots)
}
