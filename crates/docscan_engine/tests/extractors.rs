use docscan_engine::{
    download_archive, find_archive_url, latest_versions, split_version_label, whats_new,
    FetchSettings, ReqwestFetcher,
};
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> ReqwestFetcher {
    ReqwestFetcher::new(FetchSettings::default())
}

async fn serve_html(server: &MockServer, at: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "text/html"))
        .mount(server)
        .await;
}

#[test]
fn version_labels_split_into_version_and_status() {
    assert_eq!(
        split_version_label("Python 3.13 (stable)"),
        ("3.13".to_string(), "stable".to_string())
    );
    assert_eq!(
        split_version_label("Python 3.15 (in development)"),
        ("3.15".to_string(), "in development".to_string())
    );
    // Labels outside the pattern pass through whole.
    assert_eq!(
        split_version_label("All versions"),
        ("All versions".to_string(), String::new())
    );
}

#[tokio::test]
async fn latest_versions_reads_the_all_versions_sidebar_list() {
    let server = MockServer::start().await;
    serve_html(
        &server,
        "/3/",
        r#"<html><body>
          <div class="sphinxsidebarwrapper">
            <ul><li><a href="https://www.python.org/doc/">Docs home</a></li></ul>
            <h3>All versions</h3>
            <ul>
              <li>All versions</li>
              <li><a href="https://docs.python.org/3.13/">Python 3.13 (stable)</a></li>
              <li><a href="https://docs.python.org/3.15/">Python 3.15 (in development)</a></li>
            </ul>
          </div>
        </body></html>"#,
    )
    .await;

    let doc_url = Url::parse(&format!("{}/3/", server.uri())).unwrap();
    let rows = latest_versions(&fetcher(), &doc_url)
        .await
        .expect("no structural failure")
        .expect("page fetched");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].link, "https://docs.python.org/3.13/");
    assert_eq!(rows[0].version, "3.13");
    assert_eq!(rows[0].status, "stable");
    assert_eq!(rows[1].status, "in development");
}

#[tokio::test]
async fn latest_versions_without_the_list_is_fatal() {
    let server = MockServer::start().await;
    serve_html(
        &server,
        "/3/",
        r#"<div class="sphinxsidebarwrapper"><ul><li>no versions here</li></ul></div>"#,
    )
    .await;

    let doc_url = Url::parse(&format!("{}/3/", server.uri())).unwrap();
    let err = latest_versions(&fetcher(), &doc_url).await.unwrap_err();
    assert!(err.to_string().contains("All versions"));
}

#[tokio::test]
async fn whats_new_skips_unfetchable_articles() {
    let server = MockServer::start().await;
    serve_html(
        &server,
        "/3/whatsnew/",
        r#"<section id="what-s-new-in-python">
            <div class="toctree-wrapper"><ul>
              <li class="toctree-l1"><a href="3.13.html">3.13</a></li>
              <li class="toctree-l1"><a href="missing.html">gone</a></li>
            </ul></div>
          </section>"#,
    )
    .await;
    serve_html(
        &server,
        "/3/whatsnew/3.13.html",
        r#"<h1>What's New In Python 3.13</h1>
           <dl><dt>Editor</dt><dd>Adam Turner</dd></dl>"#,
    )
    .await;
    // missing.html is not mounted and 404s.

    let doc_url = Url::parse(&format!("{}/3/", server.uri())).unwrap();
    let rows = whats_new(&fetcher(), &doc_url)
        .await
        .expect("no structural failure")
        .expect("index fetched");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "What's New In Python 3.13");
    assert_eq!(
        rows[0].link,
        format!("{}/3/whatsnew/3.13.html", server.uri())
    );
}

#[test]
fn archive_link_resolves_against_the_download_page() {
    let downloads_url = Url::parse("https://docs.python.org/3/download.html").unwrap();
    let html = r#"
        <table class="docutils">
          <tr><td><a href="archives/python-3.13-docs-pdf-letter.zip">letter</a></td></tr>
          <tr><td><a href="archives/python-3.13-docs-pdf-a4.zip">a4</a></td></tr>
        </table>"#;

    let archive_url = find_archive_url(html, &downloads_url).unwrap();
    assert_eq!(
        archive_url.as_str(),
        "https://docs.python.org/3/archives/python-3.13-docs-pdf-a4.zip"
    );
}

#[tokio::test]
async fn download_writes_the_archive_under_the_target_dir() {
    let server = MockServer::start().await;
    serve_html(
        &server,
        "/3/download.html",
        r#"<table class="docutils">
            <tr><td><a href="archives/docs-pdf-a4.zip">a4</a></td></tr>
          </table>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/3/archives/docs-pdf-a4.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"PK\x03\x04".as_slice(), "application/zip"))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let doc_url = Url::parse(&format!("{}/3/", server.uri())).unwrap();
    let archive_fetcher = ReqwestFetcher::new(FetchSettings::any_content_type());

    let written = download_archive(&fetcher(), &archive_fetcher, &doc_url, temp.path())
        .await
        .expect("download ok")
        .expect("page fetched");

    assert_eq!(written.file_name().unwrap(), "docs-pdf-a4.zip");
    assert_eq!(std::fs::read(&written).unwrap(), b"PK\x03\x04");
}
