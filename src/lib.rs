//! # undoc
//!
//! Convert cross-referenced symbol documentation into flat schema
//! declarations.
//!
//! The input is a graph of JSON "symbol" pages, each describing one
//! dictionary-shaped data type and cross-referencing the types of its
//! properties. The output is a single source text declaring one model per
//! distinct page, in the target type-description language (Zod-flavoured
//! TypeScript).
//!
//! The core is an asynchronous document-graph resolver: the set of pages is
//! not known up front, so the crawler discovers references while it builds
//! models, fetches and validates each page exactly once, and keeps cyclic
//! references from recursing by memoizing resolutions before they run.
//!
//! ## Quick Start
//!
//! ```no_run
//! use undoc::{convert_schema, ConvertOptions, MemoryFetch};
//!
//! # async fn example() -> undoc::Result<()> {
//! let options = ConvertOptions::new(
//!     "https://docs.example.com/tutorials/data/",
//!     "doc://com.example.docs/",
//! )?;
//!
//! // Serve pre-downloaded pages; use `HttpFetch` (feature `http`) to go
//! // straight to the network instead.
//! let fetcher = MemoryFetch::new();
//!
//! let schema = convert_schema("/documentation/passes/pass", &options, fetcher).await?;
//! println!("{schema}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Guarantees
//!
//! - Each distinct document URI is fetched and built at most once, even
//!   when referenced concurrently from many pages.
//! - A document that references itself, directly or transitively, still
//!   converts in one pass; the emitted declaration forward-references the
//!   model by name.
//! - The first fault anywhere in the graph aborts the whole run with no
//!   output: there is no partial acceptance and no retry.

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod resolve;

#[cfg(feature = "http")]
pub use convert::HttpFetch;
pub use convert::{convert_schema, ConvertOptions, Fetch, MemoryFetch, Model};
pub use error::{Error, Result};
pub use model::{
    ContentPart, ContentSection, Document, InlinePart, PropertyItem, Reference, Relationship,
    TypePart,
};

/// Convert a document graph by fetching it over HTTP.
///
/// Convenience wrapper around [`convert_schema`] with an [`HttpFetch`]
/// collaborator.
#[cfg(feature = "http")]
pub async fn convert_schema_http(root: &str, options: &ConvertOptions) -> Result<String> {
    convert_schema(root, options, HttpFetch::new()).await
}
