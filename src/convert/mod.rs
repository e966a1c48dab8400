//! Conversion pipeline: options, fetch collaborators, and the graph crawler.
//!
//! One call to [`convert_schema`] seeds the crawler with a root document URI
//! and drives it until the whole reference graph is resolved. The reference
//! set is not known up front: every built model may report further URIs,
//! which the crawler memoizes and schedules until the queue runs dry.

mod crawler;
mod fetch;
mod model;

#[cfg(feature = "http")]
pub use fetch::HttpFetch;
pub use fetch::{Fetch, MemoryFetch};
pub use model::Model;

use url::Url;

use crate::error::Result;

/// Fixed prelude emitted ahead of the model declarations.
const PRELUDE: [&str; 2] = [
    "import * as customScalars from \"@pkpass/schema-runtime\";",
    "import * as z from \"zod\";",
];

/// Default number of documents fetched concurrently.
const DEFAULT_FETCH_CONCURRENCY: usize = 2;

/// Options for a schema conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Base URL documents are fetched relative to.
    pub base_url: Url,

    /// URI prefix stripped from internal cross-reference URIs to obtain
    /// resolver-relative document paths.
    pub base_uri: String,

    /// How many fetches may be in flight at once. Resolution tasks
    /// themselves are unbounded; only the fetch layer is throttled.
    pub fetch_concurrency: usize,
}

impl ConvertOptions {
    /// Create options from the fetch base URL and the internal URI prefix.
    pub fn new(base_url: &str, base_uri: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            base_uri: base_uri.into(),
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        })
    }

    /// Override the fetch concurrency bound.
    pub fn with_fetch_concurrency(mut self, limit: usize) -> Self {
        self.fetch_concurrency = limit.max(1);
        self
    }
}

/// Convert the document graph rooted at `root` into one schema source text.
///
/// The output is the fixed prelude followed by one declaration per distinct
/// resolved document, in completion order. The first fault anywhere in the
/// graph aborts the run with no output.
pub async fn convert_schema<F>(root: &str, options: &ConvertOptions, fetcher: F) -> Result<String>
where
    F: Fetch + 'static,
{
    crawler::run(root, options.clone(), fetcher).await
}
