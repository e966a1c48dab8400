//! Document-level types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::content::InlinePart;
use super::property::PropertyItem;

/// One fetched, validated unit of documentation describing one data type.
///
/// A document exists only for the duration of one resolution: it is fetched,
/// decoded, projected into a model declaration, and discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Format version of the page itself.
    pub schema_version: SchemaVersion,

    /// Stable identity of the documented symbol.
    pub identifier: DocumentIdentifier,

    /// Title, external identifier, and symbol kind.
    pub metadata: Metadata,

    /// Ordered content sections; only the `properties` kind carries data
    /// this library consumes.
    pub primary_content_sections: Vec<ContentSection>,

    /// Declared relationships to other symbols, when present.
    #[serde(default)]
    pub relationships_sections: Option<Vec<Relationship>>,

    /// Rich-text summary of the symbol.
    #[serde(rename = "abstract")]
    pub abstract_content: Vec<InlinePart>,

    /// Cross-reference metadata, keyed by reference URI. Every reference URI
    /// used anywhere in the document's content or types must appear here.
    pub references: HashMap<String, Reference>,

    /// Present when the whole symbol is deprecated upstream.
    #[serde(default)]
    pub deprecation_summary: Option<Vec<serde_json::Value>>,
}

impl Document {
    /// Items of the properties section, or an empty slice when the document
    /// declares no properties.
    pub fn properties(&self) -> &[PropertyItem] {
        self.primary_content_sections
            .iter()
            .find_map(|section| match section {
                ContentSection::Properties { items } => Some(items.as_slice()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Identifiers named by the inheritance relationship, when one exists.
    pub fn inherits_from(&self) -> Option<&[String]> {
        self.relationships_sections
            .as_deref()?
            .iter()
            .find_map(|relationship| match relationship {
                Relationship::InheritsFrom { identifiers } => Some(identifiers.as_slice()),
                _ => None,
            })
    }

    /// Whether the symbol carries an upstream deprecation summary.
    pub fn is_deprecated(&self) -> bool {
        self.deprecation_summary.is_some()
    }
}

/// Version triple of the document format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Identity block of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentIdentifier {
    /// Language namespace of the symbol; only `data` symbols are supported.
    pub interface_language: String,

    /// Canonical URI of the documented symbol.
    pub url: String,
}

/// Document metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Human-readable title.
    pub title: String,

    /// Opaque stable identifier; source of the derived output name.
    #[serde(rename = "externalID")]
    pub external_id: String,

    /// Kind of the documented symbol.
    #[serde(rename = "symbolKind")]
    pub symbol_kind: SymbolKind,
}

/// Symbol kinds this library accepts. Both spellings occur upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Dictionary,
    Dict,
}

/// One primary content section. Only `properties` carries data; the other
/// kinds are decoded so their presence does not fail validation, then
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContentSection {
    Properties { items: Vec<PropertyItem> },
    Declarations,
    Attributes,
    Mentions,
    Content,
}

/// A declared relationship to other symbols.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Relationship {
    /// The documented type extends another type. At most one parent
    /// identifier is legal; violations are a fatal cardinality error raised
    /// when the model is built.
    InheritsFrom { identifiers: Vec<String> },

    /// Inverse relationship; carries nothing this library consumes.
    InheritedBy,
}

/// Cross-reference metadata for one reference URI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    /// Link title.
    pub title: String,

    /// Upstream URL of the referenced page.
    pub url: String,

    /// Whether the referenced symbol is deprecated.
    #[serde(default)]
    pub deprecated: bool,
}
