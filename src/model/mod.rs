//! Data model for symbol documentation pages.
//!
//! This module defines the decoded representation of one fetched "symbol"
//! document: a JSON page describing a dictionary-shaped data type, its
//! properties, its rich-text prose, and its cross-references to other pages.
//! Tag-discriminated JSON nodes are closed enums, so an unrecognized tag is
//! rejected while decoding instead of surfacing later as an assertion.

mod content;
mod document;
mod property;

pub use content::{ContentPart, InlinePart};
pub use document::{
    ContentSection, Document, DocumentIdentifier, Metadata, Reference, Relationship,
    SchemaVersion, SymbolKind,
};
pub use property::{Attribute, PropertyItem, TypePart};
