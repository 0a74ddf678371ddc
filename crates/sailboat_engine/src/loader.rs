use std::io;
use std::path::{Path, PathBuf};

use sailboat_logging::{sail_info, sail_warn};

use crate::query::has_html_extension;
use crate::{
    classify_query, decode_html, DecodeError, FetchError, FetchSettings, Fetcher, PageContent,
    Query, ReqwestFetcher,
};

#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    #[error("'{query}' is not a valid path to an HTML file.")]
    InvalidHtmlPath { query: String },
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Resolves search queries to document content, blocking the caller until done.
pub struct PageLoader {
    fetcher: Box<dyn Fetcher>,
    runtime: tokio::runtime::Runtime,
}

impl PageLoader {
    pub fn new(settings: FetchSettings) -> io::Result<Self> {
        Self::with_fetcher(Box::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Box<dyn Fetcher>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { fetcher, runtime })
    }

    /// Acquires the document named by `query`. Failures never escape: they
    /// become a failed [`PageContent`] carrying the message to display.
    pub fn search(&self, query: &str) -> PageContent {
        match self.acquire(query) {
            Ok(html) => PageContent::loaded(html),
            Err(err) => {
                sail_warn!("search for {:?} failed: {}", query, err);
                PageContent::failed(err.to_string())
            }
        }
    }

    fn acquire(&self, query: &str) -> Result<String, AcquireError> {
        match classify_query(query) {
            Query::File(path) => read_html_file(query, &path),
            Query::Url(url) => {
                let output = self.runtime.block_on(self.fetcher.fetch(&url))?;
                sail_info!(
                    "fetched {} ({} bytes, {} redirects)",
                    output.metadata.final_url,
                    output.metadata.byte_len,
                    output.metadata.redirect_count
                );
                let decoded = decode_html(&output.bytes, output.metadata.content_type.as_deref())?;
                Ok(decoded.html)
            }
        }
    }
}

fn read_html_file(query: &str, path: &Path) -> Result<String, AcquireError> {
    if !path.is_file() || !has_html_extension(path) {
        return Err(AcquireError::InvalidHtmlPath {
            query: query.to_string(),
        });
    }
    let bytes = std::fs::read(path).map_err(|source| AcquireError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    sail_info!("read {} bytes from {}", bytes.len(), path.display());
    Ok(decode_html(&bytes, None)?.html)
}
