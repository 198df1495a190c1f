use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Python documentation scraper.
#[derive(Debug, Parser)]
#[command(name = "docscan", version, about)]
pub struct Cli {
    /// Scraper mode to run.
    #[arg(value_enum)]
    pub mode: Mode,

    /// Clear the response cache before running.
    #[arg(short = 'c', long)]
    pub clear_cache: bool,

    /// Output rendering; rows are dumped plainly when absent.
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputMode>,

    /// RON file with the expected-status map; built-in vocabulary when absent.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    WhatsNew,
    LatestVersions,
    Download,
    Pep,
}

impl Mode {
    /// Kebab-case name, used in output filenames.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::WhatsNew => "whats-new",
            Mode::LatestVersions => "latest-versions",
            Mode::Download => "download",
            Mode::Pep => "pep",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Aligned console table.
    Pretty,
    /// CSV file under `results/`.
    File,
}
