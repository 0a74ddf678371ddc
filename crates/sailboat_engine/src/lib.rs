//! Sailboat engine: document acquisition and markup extraction.
mod decode;
mod extract;
mod fetch;
mod loader;
mod markup;
mod query;
mod types;

pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use extract::{extract, extract_tree};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_USER_AGENT};
pub use loader::{AcquireError, PageLoader};
pub use markup::{MarkupNode, NodeKind};
pub use query::{classify_query, Query};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, PageContent};
