use std::path::{Path, PathBuf};

use scan_logging::scan_info;
use scraper::Html;
use url::Url;

use crate::fetch::Fetcher;
use crate::locate::{find_tag, select_all};
use crate::page::fetch_page;
use crate::persist::AtomicFileWriter;
use crate::types::ScanError;

/// Path of the download page, relative to the documentation root.
pub const DOWNLOAD_PATH: &str = "download.html";

/// Directory the archive is written under, relative to the working directory.
pub const DOWNLOADS_DIR: &str = "downloads";

const ARCHIVE_SUFFIX: &str = "pdf-a4.zip";

/// Locate the pdf-a4 zip archive on the download page, fetch it and write it
/// under `target_dir`, named from the URL's final path segment.
///
/// `page_fetcher` retrieves the HTML download page; `archive_fetcher` pulls
/// the archive itself and must accept non-HTML content types. Returns the
/// written path, or `None` when the download page was unfetchable.
pub async fn download_archive(
    page_fetcher: &dyn Fetcher,
    archive_fetcher: &dyn Fetcher,
    doc_url: &Url,
    target_dir: &Path,
) -> Result<Option<PathBuf>, ScanError> {
    let downloads_url = doc_url.join(DOWNLOAD_PATH)?;
    let Some(html) = fetch_page(page_fetcher, downloads_url.as_str()).await else {
        return Ok(None);
    };

    let archive_url = find_archive_url(&html, &downloads_url)?;
    let filename = archive_filename(&archive_url)?;

    let output = archive_fetcher
        .fetch(archive_url.as_str())
        .await
        .map_err(|source| ScanError::Download {
            url: archive_url.to_string(),
            source,
        })?;

    let writer = AtomicFileWriter::new(target_dir.to_path_buf());
    let path = writer.write_bytes(&filename, &output.bytes)?;
    scan_info!("Archive saved to {:?}", path);
    Ok(Some(path))
}

/// Resolve the pdf-a4 archive link out of the download page's docutils table.
pub fn find_archive_url(html: &str, downloads_url: &Url) -> Result<Url, ScanError> {
    let doc = Html::parse_document(html);
    let table = find_tag(doc.root_element(), "table.docutils")?;

    let href = select_all(table, "a")?
        .into_iter()
        .filter_map(|anchor| anchor.value().attr("href"))
        .find(|href| href.ends_with(ARCHIVE_SUFFIX))
        .ok_or_else(|| ScanError::Structure(format!("link ending in `{ARCHIVE_SUFFIX}`")))?;

    Ok(downloads_url.join(href)?)
}

fn archive_filename(archive_url: &Url) -> Result<String, ScanError> {
    archive_url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
        .ok_or_else(|| ScanError::Structure("archive url without a filename".to_string()))
}
