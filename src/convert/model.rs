//! Building one model declaration from one fetched document.

use crate::convert::crawler::Crawler;
use crate::convert::Fetch;
use crate::error::{Error, Result};
use crate::model::PropertyItem;
use crate::parser;
use crate::render::{doc_comment, inline_parts, json_quote, map_type, paragraphs};
use crate::resolve::{self, ReferenceResolver};

/// One emitted output unit: a named model declaration.
#[derive(Debug, Clone)]
pub struct Model {
    /// Identifier other declarations refer to this model by.
    pub name: String,

    /// Rendered declaration text.
    pub declaration: String,
}

/// Fields with this name suffix are always arrays, whatever their declared
/// type says. Upstream declares them as bare dictionaries even though every
/// published document treats them as arrays.
const ARRAY_FIELD_SUFFIX: &str = "Fields";

/// Fetch, validate, and project one document into a [`Model`].
///
/// Reference URIs discovered while mapping property types are submitted to
/// the crawler but not awaited; the emitted declaration may legally name
/// models that have not been emitted yet. Only an inheritance parent is
/// awaited, because its derived name becomes part of this declaration.
pub(crate) async fn build<F>(crawler: &Crawler<F>, doc_uri: &str) -> Result<Model>
where
    F: Fetch + 'static,
{
    let url = parser::document_url(doc_uri, &crawler.options().base_url)?;
    let value = crawler.fetch(url.as_str()).await?;
    let document = parser::parse_document(url.as_str(), value)?;
    let resolver = ReferenceResolver::new(&document);

    let fields = document
        .properties()
        .iter()
        .map(|property| render_field(crawler, property, &resolver))
        .collect::<Result<Vec<_>>>()?;

    let base = match document.inherits_from() {
        Some([parent_uri]) => {
            let handle = crawler.resolve_reference(parent_uri);
            let parent = handle
                .await
                .map_err(|_| Error::Aborted(parent_uri.clone()))?;
            format!("{}.extend", parent.name)
        }
        Some(identifiers) => return Err(Error::Cardinality(identifiers.len())),
        None => "z.object".to_string(),
    };

    let name = resolve::output_name(&document.metadata.external_id);
    let summary = inline_parts(&document.abstract_content, &resolver)?;
    let header = doc_comment(&summary, document.is_deprecated());

    let declaration = format!(
        "{header}\nexport const {name} = {base}({{\n{body}}})\nexport type {name} = z.input<typeof {name}>",
        body = fields.join("\n"),
    );

    log::debug!("built model {name} from {url}");
    Ok(Model { name, declaration })
}

/// Render one property into its field entry.
fn render_field<F>(
    crawler: &Crawler<F>,
    property: &PropertyItem,
    resolver: &ReferenceResolver,
) -> Result<String>
where
    F: Fetch + 'static,
{
    let description = paragraphs(&property.content, resolver)?;
    let mapped = map_type(&property.type_parts, resolver, property.allowed_values())?;

    for uri in &mapped.references {
        // Scheduling only; completion is not awaited, which is what keeps
        // cyclic references from deadlocking the run.
        let _ = crawler.resolve_reference(uri);
    }

    let mut field = doc_comment(&description, mapped.deprecated);
    field.push_str(&json_quote(&property.name));
    field.push_str(": ");
    field.push_str(&mapped.expression);
    if property.name.ends_with(ARRAY_FIELD_SUFFIX) {
        field.push_str(".array()");
    }
    if !property.required {
        field.push_str(".optional()");
    }
    field.push_str(",\n");
    Ok(field)
}
