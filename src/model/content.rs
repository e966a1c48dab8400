//! Rich-text content types.

use serde::{Deserialize, Serialize};

/// A top-level rich-text block. Property descriptions and abstracts only
/// ever contain paragraphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentPart {
    #[serde(rename_all = "camelCase")]
    Paragraph { inline_content: Vec<InlinePart> },
}

/// One inline node inside a paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlinePart {
    /// Plain text.
    Text { text: String },

    /// Emphasized span; recursive.
    #[serde(rename_all = "camelCase")]
    Emphasis { inline_content: Vec<InlinePart> },

    /// Inline code span.
    CodeVoice { code: String },

    /// Cross-reference to another page.
    #[serde(rename_all = "camelCase")]
    Reference { identifier: String, is_active: bool },
}
