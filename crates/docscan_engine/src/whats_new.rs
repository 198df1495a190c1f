use docscan_core::ArticleRow;
use scan_logging::scan_debug;
use scraper::Html;
use url::Url;

use crate::fetch::Fetcher;
use crate::locate::{find_tag, select_all, text_of};
use crate::page::fetch_page;
use crate::types::ScanError;

/// Path of the "What's New" index, relative to the documentation root.
pub const WHATS_NEW_PATH: &str = "whatsnew/";

/// Collect the "What's New in Python" article listing.
///
/// Follows every per-version article link in the index toctree and records
/// (link, title, editor/author line). An unfetchable article is skipped; an
/// unfetchable index yields `None`; a missing structural anchor is fatal.
pub async fn whats_new(
    fetcher: &dyn Fetcher,
    doc_url: &Url,
) -> Result<Option<Vec<ArticleRow>>, ScanError> {
    let whats_new_url = doc_url.join(WHATS_NEW_PATH)?;
    let Some(html) = fetch_page(fetcher, whats_new_url.as_str()).await else {
        return Ok(None);
    };

    let article_links = collect_article_links(&html, &whats_new_url)?;
    scan_debug!("Found {} what's-new articles", article_links.len());

    let mut rows = Vec::new();
    for link in article_links {
        let Some(article_html) = fetch_page(fetcher, link.as_str()).await else {
            continue;
        };
        rows.push(parse_article(&article_html, &link)?);
    }

    Ok(Some(rows))
}

fn collect_article_links(html: &str, whats_new_url: &Url) -> Result<Vec<Url>, ScanError> {
    let doc = Html::parse_document(html);
    let section = find_tag(doc.root_element(), "section#what-s-new-in-python")?;
    let wrapper = find_tag(section, "div.toctree-wrapper")?;

    let mut links = Vec::new();
    for item in select_all(wrapper, "li.toctree-l1")? {
        let anchor = find_tag(item, "a")?;
        let href = anchor.value().attr("href").ok_or_else(|| {
            ScanError::Structure("toctree entry without an href".to_string())
        })?;
        links.push(whats_new_url.join(href)?);
    }
    Ok(links)
}

fn parse_article(html: &str, link: &Url) -> Result<ArticleRow, ScanError> {
    let doc = Html::parse_document(html);
    let title = text_of(find_tag(doc.root_element(), "h1")?);
    // The first definition list is the editor/author block; flatten it to one
    // line for tabular output.
    let authors = text_of(find_tag(doc.root_element(), "dl")?).replace('\n', " ");

    Ok(ArticleRow {
        link: link.to_string(),
        title,
        authors,
    })
}
