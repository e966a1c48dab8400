//! Per-document reference resolution and output naming.
//!
//! Each document carries a mapping from reference URI to link metadata; a
//! [`ReferenceResolver`] wraps that mapping for the lifetime of one
//! resolution. Output names are derived from opaque stable identifiers by a
//! pure function, so the same identifier always produces the same name no
//! matter which document mentions it.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{Document, Reference};

/// Internal URI prefix rewritten when producing browser links.
const DOC_URI_PREFIX: &str = "doc://com.apple.documentation/";

/// Public URL prefix substituted for [`DOC_URI_PREFIX`].
const BROWSER_URL_PREFIX: &str = "https://developer.apple.com/";

/// Interface-language namespace stripped from external identifiers before
/// deriving output names.
const ID_NAMESPACE: &str = "data.";

/// Looks up cross-reference metadata for one document.
pub struct ReferenceResolver<'a> {
    references: &'a HashMap<String, Reference>,
}

impl<'a> ReferenceResolver<'a> {
    /// Wrap a document's reference mapping.
    pub fn new(document: &'a Document) -> Self {
        Self {
            references: &document.references,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_references(references: &'a HashMap<String, Reference>) -> Self {
        Self { references }
    }

    /// Look up the metadata recorded for a reference URI.
    pub fn reference(&self, uri: &str) -> Result<&'a Reference> {
        self.references
            .get(uri)
            .ok_or_else(|| Error::ReferenceNotFound(uri.to_string()))
    }

    /// Title and public browser URL for rendering a reference as a link.
    pub fn browser_link(&self, uri: &str) -> Result<(&'a str, String)> {
        let reference = self.reference(uri)?;
        Ok((reference.title.as_str(), browser_url(uri)))
    }
}

/// Rewrite an internal documentation URI into its public browser URL.
///
/// URIs outside the internal namespace pass through unchanged.
pub fn browser_url(uri: &str) -> String {
    match uri.strip_prefix(DOC_URI_PREFIX) {
        Some(rest) => format!("{BROWSER_URL_PREFIX}{rest}"),
        None => uri.to_string(),
    }
}

/// Derive the output name for a model from its external identifier.
///
/// The leading `data.` namespace is dropped, then the remaining segments are
/// capitalized and joined without separators: `data.foo` becomes `Foo`,
/// `data.pass.nfc` becomes `PassNfc`. Collisions between distinct
/// identifiers are not detected.
pub fn output_name(external_id: &str) -> String {
    let id = external_id.strip_prefix(ID_NAMESPACE).unwrap_or(external_id);
    id.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

/// Name used when a type refers to another model by its precise identifier.
///
/// Identical derivation to [`output_name`], so a reference always matches
/// the name the referenced model is emitted under.
pub fn type_reference_name(precise_id: &str) -> String {
    output_name(precise_id)
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Reference;

    fn references() -> HashMap<String, Reference> {
        let mut map = HashMap::new();
        map.insert(
            "doc://com.apple.documentation/documentation/passes/pass".to_string(),
            Reference {
                title: "Pass".to_string(),
                url: "/documentation/passes/pass".to_string(),
                deprecated: false,
            },
        );
        map
    }

    #[test]
    fn test_reference_lookup() {
        let references = references();
        let resolver = ReferenceResolver::from_references(&references);
        let reference = resolver
            .reference("doc://com.apple.documentation/documentation/passes/pass")
            .expect("reference should exist");
        assert_eq!(reference.title, "Pass");
    }

    #[test]
    fn test_missing_reference() {
        let references = references();
        let resolver = ReferenceResolver::from_references(&references);
        let err = resolver.reference("doc://com.apple.documentation/nope").unwrap_err();
        assert!(matches!(err, Error::ReferenceNotFound(_)));
    }

    #[test]
    fn test_browser_link_rewrites_prefix() {
        let references = references();
        let resolver = ReferenceResolver::from_references(&references);
        let (title, url) = resolver
            .browser_link("doc://com.apple.documentation/documentation/passes/pass")
            .expect("link should resolve");
        assert_eq!(title, "Pass");
        assert_eq!(url, "https://developer.apple.com/documentation/passes/pass");
    }

    #[test]
    fn test_browser_url_passthrough() {
        assert_eq!(
            browser_url("https://example.com/page"),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_output_name_strips_namespace() {
        assert_eq!(output_name("data.foo"), "Foo");
        assert_eq!(output_name("data.Pass"), "Pass");
    }

    #[test]
    fn test_output_name_joins_segments() {
        assert_eq!(output_name("data.pass.nfc"), "PassNfc");
        assert_eq!(
            output_name("data.PassFields.auxiliaryFields"),
            "PassFieldsAuxiliaryFields"
        );
    }

    #[test]
    fn test_output_name_without_namespace() {
        assert_eq!(output_name("pass-style"), "PassStyle");
    }

    #[test]
    fn test_output_name_is_pure() {
        let first = output_name("data.Pass.Barcode");
        let second = output_name("data.Pass.Barcode");
        assert_eq!(first, second);
    }

    #[test]
    fn test_type_reference_name_matches_output_name() {
        assert_eq!(
            type_reference_name("data.Pass.Barcode"),
            output_name("data.Pass.Barcode")
        );
    }
}
