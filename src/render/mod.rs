//! Rendering module for producing the emitted declaration text.
//!
//! Everything here is pure and synchronous: rich text flattens to markdown,
//! markdown flattens into doc comments, and type token sequences map to
//! target type expressions. The async layers in [`crate::convert`] stitch
//! these pieces into whole declarations.

mod comment;
mod markdown;
mod typemap;

pub use comment::doc_comment;
pub use markdown::{inline_parts, paragraphs};
pub use typemap::{map_type, MappedType};

/// Quote a string as a JSON/target-language string literal.
pub(crate) fn json_quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_quote_escapes() {
        assert_eq!(json_quote("bar"), "\"bar\"");
        assert_eq!(json_quote("say \"hi\""), "\"say \\\"hi\\\"\"");
    }
}
