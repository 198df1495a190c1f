use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use scan_logging::{scan_debug, scan_warn};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::fetch::Fetcher;
use crate::persist::AtomicFileWriter;
use crate::{FetchError, FetchMetadata, FetchOutput};

/// Default cache directory, relative to the working directory.
pub const CACHE_DIR: &str = ".docscan_cache";

/// Metadata sidecar stored next to each cached body.
#[derive(Debug, Serialize, Deserialize)]
struct CachedMeta {
    original_url: String,
    final_url: String,
    redirect_count: usize,
    content_type: Option<String>,
}

/// On-disk response cache wrapping any [`Fetcher`].
///
/// Successful responses are keyed by the SHA-256 of the URL and persist across
/// runs; failed fetches are never cached. The cache is a transparent
/// optimization: a hit reproduces the original `FetchOutput`.
pub struct CachedFetcher<F> {
    inner: F,
    dir: PathBuf,
}

impl<F: Fetcher> CachedFetcher<F> {
    pub fn new(inner: F, dir: PathBuf) -> Self {
        Self { inner, dir }
    }

    fn cache_key(url: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        let digest = hasher.finalize();
        let mut hex = String::with_capacity(64);
        for byte in digest.iter() {
            use std::fmt::Write;
            let _ = write!(&mut hex, "{byte:02x}");
        }
        hex
    }

    fn body_filename(key: &str) -> String {
        format!("{key}.body")
    }

    fn meta_filename(key: &str) -> String {
        format!("{key}.meta.json")
    }

    fn load(&self, url: &str, key: &str) -> Option<FetchOutput> {
        let bytes = fs::read(self.dir.join(Self::body_filename(key))).ok()?;
        let meta_text = fs::read_to_string(self.dir.join(Self::meta_filename(key))).ok()?;
        let meta: CachedMeta = match serde_json::from_str(&meta_text) {
            Ok(meta) => meta,
            Err(err) => {
                scan_warn!("Discarding unreadable cache entry for {url}: {err}");
                return None;
            }
        };

        let byte_len = bytes.len() as u64;
        Some(FetchOutput {
            bytes,
            metadata: FetchMetadata {
                original_url: meta.original_url,
                final_url: meta.final_url,
                redirect_count: meta.redirect_count,
                content_type: meta.content_type,
                byte_len,
            },
        })
    }

    fn store(&self, url: &str, key: &str, output: &FetchOutput) {
        let meta = CachedMeta {
            original_url: output.metadata.original_url.clone(),
            final_url: output.metadata.final_url.clone(),
            redirect_count: output.metadata.redirect_count,
            content_type: output.metadata.content_type.clone(),
        };
        let meta_text = match serde_json::to_string(&meta) {
            Ok(text) => text,
            Err(err) => {
                scan_warn!("Failed to serialize cache metadata for {url}: {err}");
                return;
            }
        };

        // A write failure only costs a refetch next run.
        let writer = AtomicFileWriter::new(self.dir.clone());
        if let Err(err) = writer.write_bytes(&Self::body_filename(key), &output.bytes) {
            scan_warn!("Failed to cache body for {url}: {err}");
            return;
        }
        if let Err(err) = writer.write(&Self::meta_filename(key), &meta_text) {
            scan_warn!("Failed to cache metadata for {url}: {err}");
        }
    }
}

#[async_trait::async_trait]
impl<F: Fetcher> Fetcher for CachedFetcher<F> {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        let key = Self::cache_key(url);
        if let Some(output) = self.load(url, &key) {
            scan_debug!("Cache hit for {url}");
            return Ok(output);
        }

        let output = self.inner.fetch(url).await?;
        self.store(url, &key, &output);
        Ok(output)
    }
}

/// Remove the whole cache directory. Missing directory is not an error.
pub fn clear_cache(dir: &Path) -> io::Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}
