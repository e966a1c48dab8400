//! Fetch collaborators for retrieving documents.
//!
//! The crawler does not know how documents reach it: anything that can turn
//! a URL into parsed JSON works. The crawler throttles how many fetches run
//! at once, so implementations can stay simple.

use std::collections::HashMap;
use std::future::Future;

use serde_json::Value;

use crate::error::{Error, Result};

/// Collaborator that retrieves one document and decodes it as JSON.
pub trait Fetch: Send + Sync {
    /// Retrieve the document at `url` as a parsed JSON value.
    ///
    /// Transport failures should surface as [`Error::Fetch`].
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Value>> + Send;
}

/// In-memory [`Fetch`] implementation backed by a URL → document table.
///
/// Useful in tests and for offline conversion of pre-downloaded pages.
/// Requests for unregistered URLs fail with [`Error::Fetch`].
#[derive(Debug, Clone, Default)]
pub struct MemoryFetch {
    documents: HashMap<String, Value>,
}

impl MemoryFetch {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the document served for `url`.
    pub fn insert(&mut self, url: impl Into<String>, document: Value) {
        self.documents.insert(url.into(), document);
    }

    /// Builder-style [`MemoryFetch::insert`].
    pub fn with_document(mut self, url: impl Into<String>, document: Value) -> Self {
        self.insert(url, document);
        self
    }
}

impl Fetch for MemoryFetch {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Value>> + Send {
        let result = match self.documents.get(url) {
            Some(value) => Ok(value.clone()),
            None => Err(Error::Fetch {
                url: url.to_string(),
                message: "no document registered for this URL".to_string(),
            }),
        };
        async move { result }
    }
}

/// HTTP-backed [`Fetch`] implementation over a shared `reqwest` client.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Default)]
pub struct HttpFetch {
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpFetch {
    /// Create a fetcher with a fresh client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fetcher over an existing client, keeping its pool and
    /// configuration.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "http")]
impl Fetch for HttpFetch {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Value>> + Send {
        let request = self.client.get(url);
        let url = url.to_string();
        async move {
            let fetch_error = |message: String| Error::Fetch {
                url: url.clone(),
                message,
            };
            let response = request
                .send()
                .await
                .map_err(|err| fetch_error(err.to_string()))?
                .error_for_status()
                .map_err(|err| fetch_error(err.to_string()))?;
            response
                .json()
                .await
                .map_err(|err| fetch_error(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_memory_fetch_returns_registered_document() {
        let fetcher = MemoryFetch::new()
            .with_document("https://docs.example.com/pass.json", json!({"ok": true}));
        let value = fetcher
            .fetch("https://docs.example.com/pass.json")
            .await
            .expect("document should be served");
        assert_eq!(value, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_memory_fetch_unknown_url_fails() {
        let fetcher = MemoryFetch::new();
        let err = fetcher
            .fetch("https://docs.example.com/missing.json")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
    }
}
