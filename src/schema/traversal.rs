//! Recursive walk over fields and lists

use super::fields::{describe_field, DescribedField};
use super::types::{FieldType, Verbosity};
use crate::converters::Mapping;
use crate::error::Result;
use crate::nodes::Node;
use serde_json::Value as JsonValue;
use tracing::debug;

/// Tag of a single typed field
pub const FIELD_TAG: &str = "Metadatenfeld";

/// Tag of a repeatable group of fields
pub const LIST_TAG: &str = "Metadatenliste";

/// Tag of the container holding a list's entries
pub const LIST_CONTENT_TAG: &str = "Metadatenobjekt";

/// Describe the fields and lists directly under `node` into `out`
///
/// Fields come first, then lists, each in document order. A name that occurs
/// twice keeps the last entry.
pub fn traverse_vars(node: &Node<'_>, out: &mut Mapping, verbosity: Verbosity) -> Result<()> {
    for field in node.children(FIELD_TAG)? {
        let name = field.require_attr("Name")?;
        let type_tag = field.require_attr("Datentyp")?;

        let value = match verbosity {
            Verbosity::Types => JsonValue::String(type_tag.to_string()),
            Verbosity::Typed => typed(type_tag),
            Verbosity::Detailed => serde_json::to_value(DescribedField {
                info: describe_field(&field)?,
                field_type: type_tag,
            })?,
        };
        out.insert(name.to_string(), value);
    }

    for list in node.children(LIST_TAG)? {
        let name = list.require_attr("Name")?;
        let content = list.require_child(LIST_CONTENT_TAG)?;
        debug!(list = name, path = content.path(), "descending into list");

        let mut entries = Mapping::new();
        traverse_vars(&content, &mut entries, verbosity)?;

        let value = match verbosity {
            Verbosity::Types => JsonValue::Object(entries),
            Verbosity::Typed | Verbosity::Detailed => {
                let mut wrapper = Mapping::new();
                wrapper.insert(
                    "type".to_string(),
                    JsonValue::String(FieldType::List.as_str().to_string()),
                );
                wrapper.insert("value".to_string(), JsonValue::Object(entries));
                JsonValue::Object(wrapper)
            }
        };
        out.insert(name.to_string(), value);
    }

    Ok(())
}

fn typed(type_tag: &str) -> JsonValue {
    let mut wrapper = Mapping::new();
    wrapper.insert("type".to_string(), JsonValue::String(type_tag.to_string()));
    JsonValue::Object(wrapper)
}
