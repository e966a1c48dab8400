//! Property-level types.

use serde::{Deserialize, Serialize};

use super::content::ContentPart;

/// One property of a dictionary symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyItem {
    /// Field name as declared upstream.
    pub name: String,

    /// Type-description token sequence.
    #[serde(rename = "type")]
    pub type_parts: Vec<TypePart>,

    /// Whether the field must be present. Upstream omits the flag for
    /// optional fields.
    #[serde(default)]
    pub required: bool,

    /// Rich-text description.
    pub content: Vec<ContentPart>,

    /// Extra constraints, when declared.
    #[serde(default)]
    pub attributes: Option<Vec<Attribute>>,
}

impl PropertyItem {
    /// The closed set of allowed literal values, when one is declared.
    pub fn allowed_values(&self) -> Option<&[String]> {
        self.attributes
            .as_deref()?
            .iter()
            .find_map(|attribute| match attribute {
                Attribute::AllowedValues { values } => Some(values.as_slice()),
            })
    }
}

/// One token in a property's type-description sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypePart {
    /// A literal token, e.g. `string` or `[`.
    Text { text: String },

    /// A reference to another documented type.
    #[serde(rename_all = "camelCase")]
    TypeIdentifier {
        /// Display text of the reference.
        text: String,
        /// Reference URI, resolvable through the document's reference map.
        identifier: String,
        /// Stable identifier used to derive the referenced model's name.
        precise_identifier: String,
    },
}

/// A property attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Attribute {
    /// Closed set of literal values the property may take.
    AllowedValues { values: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_property_with_allowed_values() {
        let property: PropertyItem = serde_json::from_value(json!({
            "name": "transitType",
            "type": [{"kind": "text", "text": "string"}],
            "content": [],
            "attributes": [{"kind": "allowedValues", "values": ["PKTransitTypeAir", "PKTransitTypeBus"]}]
        }))
        .expect("property should decode");

        assert!(!property.required);
        assert_eq!(
            property.allowed_values(),
            Some(&["PKTransitTypeAir".to_string(), "PKTransitTypeBus".to_string()][..])
        );
    }

    #[test]
    fn test_decode_type_identifier_part() {
        let part: TypePart = serde_json::from_value(json!({
            "kind": "typeIdentifier",
            "text": "Pass.Barcode",
            "identifier": "doc://com.example.docs/documentation/passes/pass/barcode",
            "preciseIdentifier": "data.Pass.Barcode"
        }))
        .expect("type part should decode");

        match part {
            TypePart::TypeIdentifier {
                precise_identifier, ..
            } => assert_eq!(precise_identifier, "data.Pass.Barcode"),
            TypePart::Text { .. } => panic!("expected a typeIdentifier part"),
        }
    }

    #[test]
    fn test_unknown_type_part_kind_rejected() {
        let result: Result<TypePart, _> =
            serde_json::from_value(json!({"kind": "generic", "text": "T"}));
        assert!(result.is_err());
    }
}
