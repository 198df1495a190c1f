mod cli;
mod config;
mod logging;
mod output;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use docscan_core::{ExpectedStatusMap, StatusTally};
use docscan_engine::{
    clear_cache, download_archive, latest_versions, reconcile, whats_new, CachedFetcher,
    FetchSettings, ReqwestFetcher, CACHE_DIR, DOWNLOADS_DIR,
};
use scan_logging::scan_info;
use url::Url;

use crate::cli::{Cli, Mode};
use crate::output::Report;

const MAIN_DOC_URL: &str = "https://docs.python.org/3/";
const MAIN_PEP_URL: &str = "https://peps.python.org/";

fn main() -> anyhow::Result<()> {
    logging::initialize();
    scan_info!("Scanner started");

    let cli = Cli::parse();
    scan_info!("Command line arguments: {:?}", cli);

    let expected = config::load_expected_status(cli.config.as_deref())?;

    let cache_dir = PathBuf::from(CACHE_DIR);
    if cli.clear_cache {
        clear_cache(&cache_dir).context("failed to clear the response cache")?;
        scan_info!("Response cache cleared");
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build the runtime")?;
    let report = runtime.block_on(run_mode(&cli, &expected, &cache_dir))?;

    if let Some(report) = report {
        output::render(&report, cli.mode, cli.output)?;
    }

    scan_info!("Scanner finished");
    Ok(())
}

/// Run one mode to completion, sequentially: every fetch is awaited before
/// the next starts. Modes without tabular output (download) return `None`, as
/// do modes whose entry page was unfetchable.
async fn run_mode(
    cli: &Cli,
    expected: &ExpectedStatusMap,
    cache_dir: &Path,
) -> anyhow::Result<Option<Report>> {
    let fetcher = CachedFetcher::new(
        ReqwestFetcher::new(FetchSettings::default()),
        cache_dir.to_path_buf(),
    );
    let doc_url = Url::parse(MAIN_DOC_URL)?;

    match cli.mode {
        Mode::WhatsNew => {
            let rows = whats_new(&fetcher, &doc_url).await?;
            Ok(rows.map(article_report))
        }
        Mode::LatestVersions => {
            let rows = latest_versions(&fetcher, &doc_url).await?;
            Ok(rows.map(version_report))
        }
        Mode::Download => {
            let archive_fetcher = CachedFetcher::new(
                ReqwestFetcher::new(FetchSettings::any_content_type()),
                cache_dir.to_path_buf(),
            );
            download_archive(&fetcher, &archive_fetcher, &doc_url, Path::new(DOWNLOADS_DIR))
                .await?;
            Ok(None)
        }
        Mode::Pep => {
            let pep_url = Url::parse(MAIN_PEP_URL)?;
            let tally = reconcile(&fetcher, &pep_url, expected).await?;
            Ok(tally.map(tally_report))
        }
    }
}

fn article_report(rows: Vec<docscan_core::ArticleRow>) -> Report {
    Report {
        headers: vec!["Article link", "Title", "Editor, Author"],
        rows: rows
            .into_iter()
            .map(|row| vec![row.link, row.title, row.authors])
            .collect(),
    }
}

fn version_report(rows: Vec<docscan_core::VersionRow>) -> Report {
    Report {
        headers: vec!["Documentation link", "Version", "Status"],
        rows: rows
            .into_iter()
            .map(|row| vec![row.link, row.version, row.status])
            .collect(),
    }
}

fn tally_report(tally: StatusTally) -> Report {
    Report {
        headers: vec!["Status", "Count"],
        rows: tally
            .rows()
            .into_iter()
            .map(|(status, count)| vec![status, count.to_string()])
            .collect(),
    }
}
