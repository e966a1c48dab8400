//! Decoding and validation of fetched documents.
//!
//! A fetched JSON value either decodes into a [`Document`] in full or the
//! run aborts: there is no lenient mode and no partial acceptance, because a
//! half-understood page would silently drop fields from the emitted schema.

use url::Url;

use crate::error::{Error, Result};
use crate::model::Document;

/// File extension appended to document URIs before fetching, when missing.
const DOCUMENT_EXTENSION: &str = ".json";

/// Lowest supported minor version of the 0.x document format.
const MIN_MINOR_VERSION: u64 = 3;

/// Interface language of the symbols this library understands.
const INTERFACE_LANGUAGE: &str = "data";

/// Decode and validate one fetched JSON value into a [`Document`].
///
/// `url` is only used for error context. Any shape mismatch is a fatal
/// [`Error::Validation`].
pub fn parse_document(url: &str, value: serde_json::Value) -> Result<Document> {
    let document: Document = serde_json::from_value(value).map_err(|err| Error::Validation {
        url: url.to_string(),
        message: err.to_string(),
    })?;
    validate(url, &document)?;
    Ok(document)
}

fn validate(url: &str, document: &Document) -> Result<()> {
    let version = &document.schema_version;
    if version.major != 0 || version.minor < MIN_MINOR_VERSION {
        return Err(Error::Validation {
            url: url.to_string(),
            message: format!(
                "unsupported schema version {}.{}.{}",
                version.major, version.minor, version.patch
            ),
        });
    }
    if document.identifier.interface_language != INTERFACE_LANGUAGE {
        return Err(Error::Validation {
            url: url.to_string(),
            message: format!(
                "unsupported interface language {:?}",
                document.identifier.interface_language
            ),
        });
    }
    Ok(())
}

/// Resolve a document URI into the absolute URL it is fetched from.
///
/// The URI is made relative, gains the document extension when missing, and
/// joins against `base_url`.
pub fn document_url(doc_uri: &str, base_url: &Url) -> Result<Url> {
    let rest = doc_uri.strip_prefix("./").unwrap_or(doc_uri);
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let mut relative = format!("./{rest}");
    if !relative.ends_with(DOCUMENT_EXTENSION) {
        relative.push_str(DOCUMENT_EXTENSION);
    }
    Ok(base_url.join(&relative)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_url() -> Url {
        Url::parse("https://docs.example.com/tutorials/data/").expect("base url should parse")
    }

    fn document_value() -> serde_json::Value {
        json!({
            "schemaVersion": {"major": 0, "minor": 3, "patch": 0},
            "identifier": {
                "interfaceLanguage": "data",
                "url": "doc://com.example.docs/documentation/passes/pass"
            },
            "metadata": {
                "title": "Pass",
                "externalID": "data.Pass",
                "symbolKind": "dictionary"
            },
            "primaryContentSections": [],
            "abstract": [],
            "references": {}
        })
    }

    #[test]
    fn test_parse_valid_document() {
        let doc = parse_document("https://docs.example.com/pass.json", document_value())
            .expect("document should parse");
        assert_eq!(doc.metadata.title, "Pass");
        assert!(doc.properties().is_empty());
    }

    #[test]
    fn test_rejects_wrong_major_version() {
        let mut value = document_value();
        value["schemaVersion"]["major"] = json!(1);
        let err = parse_document("u", value).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_rejects_old_minor_version() {
        let mut value = document_value();
        value["schemaVersion"]["minor"] = json!(2);
        assert!(parse_document("u", value).is_err());
    }

    #[test]
    fn test_rejects_wrong_interface_language() {
        let mut value = document_value();
        value["identifier"]["interfaceLanguage"] = json!("swift");
        let err = parse_document("u", value).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_rejects_missing_references() {
        let mut value = document_value();
        value.as_object_mut().expect("object").remove("references");
        assert!(parse_document("u", value).is_err());
    }

    #[test]
    fn test_document_url_appends_extension() {
        let url = document_url("/documentation/passes/pass", &base_url()).expect("url");
        assert_eq!(
            url.as_str(),
            "https://docs.example.com/tutorials/data/documentation/passes/pass.json"
        );
    }

    #[test]
    fn test_document_url_keeps_existing_extension() {
        let url = document_url("./documentation/passes/pass.json", &base_url()).expect("url");
        assert_eq!(
            url.as_str(),
            "https://docs.example.com/tutorials/data/documentation/passes/pass.json"
        );
    }

    #[test]
    fn test_document_url_accepts_bare_relative() {
        let url = document_url("pass", &base_url()).expect("url");
        assert_eq!(
            url.as_str(),
            "https://docs.example.com/tutorials/data/pass.json"
        );
    }
}
