//! Detailed field descriptions

use super::types::FieldType;
use crate::error::{Result, StructureError};
use crate::nodes::Node;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Optional details of a field, populated at the highest verbosity
///
/// Serialized with only the keys that were found in the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldInfo {
    /// `Werteliste` of a choice field, copied verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<JsonValue>,
    /// Lower bound of an integer field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    /// Upper bound of an integer field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    /// Default-language title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Default-language help text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl FieldInfo {
    /// Returns true if no detail was found
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A field description with its type merged in last
#[derive(Debug, Serialize)]
pub(crate) struct DescribedField<'a> {
    #[serde(flatten)]
    pub info: FieldInfo,
    #[serde(rename = "type")]
    pub field_type: &'a str,
}

/// Describe a `Metadatenfeld` node
///
/// Descends into the type-specific sub-node (`Textfeld`, `Zahlenfeld`, ...)
/// and collects whatever details it carries. A type tag whose sub-node is
/// missing is a structure error.
pub fn describe_field(field: &Node<'_>) -> Result<FieldInfo> {
    let field_type = FieldType::parse(field.require_attr("Datentyp")?);
    let mut info = FieldInfo::default();

    let detail = match field_type.detail_tag() {
        Some(tag) => field.require_child(tag)?,
        None => field.clone(),
    };

    match field_type {
        FieldType::Choice => {
            info.values = detail.get("Werteliste").cloned();
        }
        FieldType::Integer => {
            info.min = bound(&detail, "Von")?;
            info.max = bound(&detail, "Bis")?;
        }
        _ => {}
    }

    info.title = default_text(&detail, "Titel")?;
    info.help = default_text(&detail, "Hilfetext")?;

    Ok(info)
}

/// Read the `Standard` (default-language) attribute of a localized sub-node
fn default_text(node: &Node<'_>, tag: &str) -> Result<Option<String>> {
    match node.child(tag)? {
        Some(text) => Ok(Some(text.require_attr("Standard")?.to_string())),
        None => Ok(None),
    }
}

/// Read an integer bound such as `<Von>1</Von>`
fn bound(node: &Node<'_>, tag: &str) -> Result<Option<i64>> {
    let Some(child) = node.child(tag)? else {
        return Ok(None);
    };

    let text = child.text().unwrap_or_default().trim();
    text.parse::<i64>().map(Some).map_err(|_| {
        StructureError::new(format!("<{}> is not an integer", tag))
            .with_path(child.path())
            .with_found(format!("'{}'", text))
            .into()
    })
}
