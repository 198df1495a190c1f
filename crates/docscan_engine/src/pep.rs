use docscan_core::{ExpectedStatusMap, StatusTally};
use scan_logging::{scan_error, scan_info, scan_warn};
use scraper::Html;
use url::Url;

use crate::fetch::Fetcher;
use crate::locate::{find_tag, select_all, text_of};
use crate::page::fetch_page;
use crate::types::ScanError;

/// Class signature of the PEP index tables.
pub const PEP_TABLE_SELECTOR: &str = "table.pep-zero-table.docutils.align-default";

/// One index table row: the abbreviated status code and the resolved detail
/// link. Transient — consumed by the reconciler and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PepRow {
    pub code: String,
    pub link: Url,
}

/// Reconcile the PEP index against each PEP's own detail page.
///
/// For every index row whose detail page declares a status inside the
/// expected set for the row's abbreviated code, one count goes to that status
/// and one to the total. Rows with a malformed status glyph, an unfetchable
/// detail page, an unknown code or a mismatched status contribute nothing and
/// are logged; only a missing structural anchor aborts the run. The tally is
/// built fresh here and returned by value.
pub async fn reconcile(
    fetcher: &dyn Fetcher,
    index_url: &Url,
    expected: &ExpectedStatusMap,
) -> Result<Option<StatusTally>, ScanError> {
    let Some(html) = fetch_page(fetcher, index_url.as_str()).await else {
        return Ok(None);
    };

    let rows = collect_index_rows(&html, index_url)?;
    let mut tally = StatusTally::new(expected.vocabulary());

    for row in rows {
        // Transport failure: the fetcher already logged it, the row is out.
        let Some(detail_html) = fetch_page(fetcher, row.link.as_str()).await else {
            continue;
        };
        let actual = extract_detail_status(&detail_html)?;

        let Some(accepted) = expected.expected_for(&row.code) else {
            scan_warn!(
                "Unknown abbreviated status code `{}` for {}",
                row.code,
                row.link
            );
            continue;
        };
        if !accepted.iter().any(|status| status == &actual) {
            scan_info!(
                "Mismatched statuses: {} card says `{}`, index code `{}` expects {:?}",
                row.link,
                actual,
                row.code,
                accepted
            );
            continue;
        }

        tally.record(&actual);
    }

    Ok(Some(tally))
}

/// Walk every PEP index table and gather (code, detail link) pairs.
///
/// Rows missing their status glyph or PEP anchor are logged and dropped;
/// a missing table body is fatal. An index without any matching table yields
/// an empty row set, which reconciles to the all-zero tally.
pub fn collect_index_rows(html: &str, index_url: &Url) -> Result<Vec<PepRow>, ScanError> {
    let doc = Html::parse_document(html);
    let mut rows = Vec::new();

    for table in select_all(doc.root_element(), PEP_TABLE_SELECTOR)? {
        let body = find_tag(table, "tbody")?;

        for tr in select_all(body, "tr")? {
            // The glyph is "<type><status>"; the status half may be empty
            // (draft-class rows carry no status character).
            let code = match select_all(tr, "abbr")?.first() {
                Some(abbr) => text_of(*abbr).chars().skip(1).collect::<String>(),
                None => {
                    scan_error!("Row without a status glyph: {}", tr.html());
                    continue;
                }
            };

            let Some(anchor) = select_all(tr, "a.pep.reference.internal")?
                .into_iter()
                .next()
            else {
                scan_error!("Row without a PEP link: {}", tr.html());
                continue;
            };
            let Some(href) = anchor.value().attr("href") else {
                scan_error!("PEP anchor without an href: {}", tr.html());
                continue;
            };
            let link = match index_url.join(href) {
                Ok(link) => link,
                Err(err) => {
                    scan_error!("Unresolvable PEP link `{href}`: {err}");
                    continue;
                }
            };

            rows.push(PepRow { code, link });
        }
    }

    Ok(rows)
}

/// Read the declared status from a PEP detail page's metadata list.
///
/// The metadata list and its `Status` entry are structurally required.
pub fn extract_detail_status(html: &str) -> Result<String, ScanError> {
    let doc = Html::parse_document(html);
    let metadata = find_tag(doc.root_element(), "dl.rfc2822.field-list.simple")?;

    // Label dts carry trailing punctuation spans, so match the bare `Status`
    // text node rather than the element's whole text.
    for dt in select_all(metadata, "dt")? {
        if !dt.text().any(|fragment| fragment == "Status") {
            continue;
        }
        let value = dt
            .next_siblings()
            .filter_map(scraper::ElementRef::wrap)
            .next()
            .ok_or_else(|| ScanError::Structure("Status entry without a value".to_string()))?;
        return Ok(text_of(value).trim().to_string());
    }

    Err(ScanError::Structure(
        "Status entry in the PEP metadata list".to_string(),
    ))
}
