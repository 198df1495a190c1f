use scan_logging::scan_warn;

use crate::decode::decode_html;
use crate::fetch::Fetcher;

/// Fetch a page and decode it to text.
///
/// Transport failures and undecodable bodies are not errors for the caller:
/// they are logged here and collapse to `None`, which means "skip". Structural
/// problems with the page content are the caller's business.
pub async fn fetch_page(fetcher: &dyn Fetcher, url: &str) -> Option<String> {
    let output = match fetcher.fetch(url).await {
        Ok(output) => output,
        Err(err) => {
            scan_warn!("Failed to fetch {url}: {err}");
            return None;
        }
    };

    match decode_html(&output.bytes, output.metadata.content_type.as_deref()) {
        Ok(decoded) => Some(decoded.html),
        Err(err) => {
            scan_warn!("Failed to decode {url}: {err}");
            None
        }
    }
}
