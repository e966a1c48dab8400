//! Mapping of property type tokens to target type expressions.
//!
//! The grammar is small but irregular: arrays have two distinct encodings
//! (bracket tokens around the sequence, or a single token whose own text
//! carries the brackets), scalar keywords map through a fixed vocabulary,
//! and identifier tokens become references to other emitted models.

use crate::error::{Error, Result};
use crate::model::TypePart;
use crate::render::json_quote;
use crate::resolve::{self, ReferenceResolver};

/// Result of mapping one property's type tokens.
#[derive(Debug, Clone)]
pub struct MappedType {
    /// Target-language type expression.
    pub expression: String,

    /// Whether the mapped type points at a deprecated symbol.
    pub deprecated: bool,

    /// Reference URIs that must be resolved into emitted models. The caller
    /// routes these through the crawler.
    pub references: Vec<String>,
}

impl MappedType {
    fn plain(expression: String) -> Self {
        Self {
            expression,
            deprecated: false,
            references: Vec::new(),
        }
    }

    fn into_array(self) -> Self {
        Self {
            expression: array_of(&self.expression),
            ..self
        }
    }
}

fn scalar(name: &str) -> String {
    format!("customScalars.{name}")
}

fn array_of(inner: &str) -> String {
    format!("z.array({inner})")
}

/// Map a type token sequence to its target expression.
///
/// `allowed_values` narrows the `string` and `number` keywords to closed
/// literal sets; combining it with the bracket-token array encoding is
/// rejected.
pub fn map_type(
    parts: &[TypePart],
    resolver: &ReferenceResolver,
    allowed_values: Option<&[String]>,
) -> Result<MappedType> {
    // Bracket tokens around the whole sequence encode an array of the
    // interior type.
    if parts.len() >= 2 {
        if let (TypePart::Text { text: first }, TypePart::Text { text: last }) =
            (&parts[0], &parts[parts.len() - 1])
        {
            if first == "[" && last == "]" {
                if allowed_values.is_some() {
                    return Err(Error::UnsupportedShape(
                        "allowed values cannot constrain an array type".to_string(),
                    ));
                }
                let inner = map_type(&parts[1..parts.len() - 1], resolver, None)?;
                return Ok(inner.into_array());
            }
        }
    }

    let part = match parts {
        [part] => part,
        _ => {
            return Err(Error::UnsupportedShape(format!(
                "expected a single type token, found {}",
                parts.len()
            )))
        }
    };

    match part {
        TypePart::Text { text } => map_text(text, allowed_values),
        TypePart::TypeIdentifier {
            identifier,
            precise_identifier,
            ..
        } => Ok(MappedType {
            expression: resolve::type_reference_name(precise_identifier),
            deprecated: resolver.reference(identifier)?.deprecated,
            references: vec![identifier.clone()],
        }),
    }
}

fn map_text(text: &str, allowed_values: Option<&[String]>) -> Result<MappedType> {
    // A single token whose string value carries its own brackets is the
    // second encoding of an array.
    if text.len() >= 2 && text.starts_with('[') && text.ends_with(']') {
        let inner = map_text(&text[1..text.len() - 1], allowed_values)?;
        return Ok(inner.into_array());
    }

    if let Some(values) = allowed_values {
        return match text {
            "number" => {
                let literals: Vec<String> = values
                    .iter()
                    .map(|value| format!("z.literal({value})"))
                    .collect();
                Ok(MappedType::plain(format!(
                    "z.union([{}])",
                    literals.join(", ")
                )))
            }
            "string" => {
                let quoted: Vec<String> = values.iter().map(|value| json_quote(value)).collect();
                Ok(MappedType::plain(format!("z.enum([{}])", quoted.join(", "))))
            }
            other => Err(Error::UnsupportedShape(format!(
                "allowed values cannot constrain the {other:?} type"
            ))),
        };
    }

    let expression = match text {
        "string" => "z.string()".to_string(),
        "boolean" => "z.boolean()".to_string(),
        "number" => "z.number()".to_string(),
        "double" => "z.number()".to_string(),
        "16-bit unsigned integer" => "z.number().positive()".to_string(),
        "any JSON data" => "z.unknown()".to_string(),
        "ISO 8601 date as string" => scalar("iso8601"),
        "ISO 4217 currency code as a string" => scalar("iso4217"),
        "localizable string" => scalar("localizableString"),
        "Localizable format string" => scalar("localizableFormatString"),
        "localizable string, ISO 8601 date, or number" => format!(
            "z.union([{},{},z.number()])",
            scalar("localizableString"),
            scalar("iso8601")
        ),
        other => {
            return Err(Error::UnsupportedShape(format!(
                "unknown type literal {other:?}"
            )))
        }
    };
    Ok(MappedType::plain(expression))
}
