use std::sync::OnceLock;

use docscan_core::VersionRow;
use regex::Regex;
use scraper::Html;
use url::Url;

use crate::fetch::Fetcher;
use crate::locate::{find_tag, select_all, text_of};
use crate::page::fetch_page;
use crate::types::ScanError;

const VERSION_PATTERN: &str = r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern"))
}

/// Split an "All versions" anchor label into (version, status).
///
/// Labels look like `Python 3.13 (stable)`. Anything that does not match the
/// pattern is carried through whole as the version, with an empty status.
pub fn split_version_label(label: &str) -> (String, String) {
    match version_regex().captures(label) {
        Some(caps) => (caps["version"].to_string(), caps["status"].to_string()),
        None => (label.to_string(), String::new()),
    }
}

/// Collect the sidebar "All versions" listing from the documentation root.
pub async fn latest_versions(
    fetcher: &dyn Fetcher,
    doc_url: &Url,
) -> Result<Option<Vec<VersionRow>>, ScanError> {
    let Some(html) = fetch_page(fetcher, doc_url.as_str()).await else {
        return Ok(None);
    };

    let doc = Html::parse_document(&html);
    let sidebar = find_tag(doc.root_element(), "div.sphinxsidebarwrapper")?;

    // The sidebar holds several lists; only the one labelled "All versions"
    // carries the release listing. Its absence means the page layout changed.
    let list = select_all(sidebar, "ul")?
        .into_iter()
        .find(|ul| text_of(*ul).contains("All versions"))
        .ok_or_else(|| {
            ScanError::Structure("sidebar list containing `All versions`".to_string())
        })?;

    let mut rows = Vec::new();
    for anchor in select_all(list, "a")? {
        let link = anchor.value().attr("href").unwrap_or_default().to_string();
        let (version, status) = split_version_label(text_of(anchor).trim());
        rows.push(VersionRow {
            link,
            version,
            status,
        });
    }

    Ok(Some(rows))
}
