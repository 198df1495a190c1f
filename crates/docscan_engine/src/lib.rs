//! Docscan engine: page fetching, HTML extraction and the PEP reconciler.
mod cache;
mod decode;
mod download;
mod fetch;
mod locate;
mod page;
mod pep;
mod persist;
mod types;
mod versions;
mod whats_new;

pub use cache::{clear_cache, CachedFetcher, CACHE_DIR};
pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use download::{download_archive, find_archive_url, DOWNLOADS_DIR, DOWNLOAD_PATH};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use locate::{find_tag, select_all, LocateError};
pub use page::fetch_page;
pub use pep::{collect_index_rows, extract_detail_status, reconcile, PepRow, PEP_TABLE_SELECTOR};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, ScanError};
pub use versions::{latest_versions, split_version_label};
pub use whats_new::{whats_new, WHATS_NEW_PATH};
