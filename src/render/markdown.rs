//! Markdown rendering of rich document content.

use crate::error::Result;
use crate::model::{ContentPart, InlinePart};
use crate::resolve::ReferenceResolver;

/// Flatten inline content into one line of markdown.
///
/// Text passes through, code spans gain back-ticks, emphasis renders its
/// children and wraps them in underscores, and references become links
/// titled and targeted through the resolver.
pub fn inline_parts(parts: &[InlinePart], resolver: &ReferenceResolver) -> Result<String> {
    let mut output = String::new();
    for part in parts {
        match part {
            InlinePart::Text { text } => output.push_str(text),
            InlinePart::CodeVoice { code } => {
                output.push('`');
                output.push_str(code);
                output.push('`');
            }
            InlinePart::Emphasis { inline_content } => {
                output.push('_');
                output.push_str(&inline_parts(inline_content, resolver)?);
                output.push('_');
            }
            InlinePart::Reference { identifier, .. } => {
                let (title, url) = resolver.browser_link(identifier)?;
                output.push_str(&format!("[`{title}`]({url})"));
            }
        }
    }
    Ok(output)
}

/// Render top-level paragraphs, separated by blank lines.
pub fn paragraphs(parts: &[ContentPart], resolver: &ReferenceResolver) -> Result<String> {
    let rendered = parts
        .iter()
        .map(|part| {
            let ContentPart::Paragraph { inline_content } = part;
            inline_parts(inline_content, resolver)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(rendered.join("\n\n"))
}
