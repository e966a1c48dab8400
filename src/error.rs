//! Error types for the undoc library.

use std::io;
use thiserror::Error;

/// Result type alias for undoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during schema conversion.
///
/// Every variant is fatal to the run that raised it: the crawler performs no
/// retry and no partial-result salvage, so the first fault anywhere in the
/// task graph terminates the conversion with no output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A document URI could not be combined with the base URL.
    #[error("invalid document URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The fetch collaborator failed to retrieve a document.
    #[error("failed to fetch {url}: {message}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Transport-level failure description.
        message: String,
    },

    /// Decoded JSON does not conform to the document shape.
    #[error("document {url} failed validation: {message}")]
    Validation {
        /// URL the document was fetched from.
        url: String,
        /// What the decoder rejected.
        message: String,
    },

    /// A reference URI is absent from the document's reference map.
    #[error("reference {0} does not exist")]
    ReferenceNotFound(String),

    /// A type token sequence violates the mapping grammar.
    #[error("unsupported type shape: {0}")]
    UnsupportedShape(String),

    /// An inheritance relationship names the wrong number of parents.
    #[error("expected exactly one inheritance parent, found {0}")]
    Cardinality(usize),

    /// A resolution was dropped before completing. Only observable while the
    /// run is already aborting on another task's failure.
    #[error("resolution of {0} was aborted")]
    Aborted(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ReferenceNotFound("doc://example/thing".to_string());
        assert_eq!(err.to_string(), "reference doc://example/thing does not exist");

        let err = Error::Cardinality(3);
        assert_eq!(
            err.to_string(),
            "expected exactly one inheritance parent, found 3"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
